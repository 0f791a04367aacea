//! Module for breaking text into tokens, one token at a time.

use log::trace;
use std::iter::Peekable;

use super::token::{Bracket, Token};
use crate::error::Error;


/// Characters that may start a symbol, in addition to letters.
const SYMBOL_START: &[char] = &['<', '=', '>', '*', '/', '#'];
/// Characters that may continue a symbol, in addition to letters and digits.
const SYMBOL_REST: &[char] = &['<', '=', '>', '*', '/', '#', '?', '!', '-'];


/// Lazily produces Tokens from a character source with one token of
/// lookahead.
///
/// The current token is available through [`Tokenizer::token`] until
/// [`Tokenizer::next`] replaces it. Once the source is exhausted there is no
/// current token and [`Tokenizer::is_end`] holds.
pub struct Tokenizer<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    token: Option<Token>,
}

impl<I: Iterator<Item = char>> Tokenizer<I> {
    /// Binds a Tokenizer to |chars| and reads the first token.
    pub fn new(chars: I) -> Result<Self, Error> {
        let mut tokenizer = Self {
            chars: chars.peekable(),
            token: None,
        };
        tokenizer.next()?;
        Ok(tokenizer)
    }

    pub fn is_end(&self) -> bool {
        self.token.is_none()
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Skips whitespace and lexes exactly one token into the current slot.
    pub fn next(&mut self) -> Result<(), Error> {
        while let Some(c) = self.chars.peek() {
            if !c.is_ascii_whitespace() {
                break;
            }
            self.chars.next();
        }

        let first = match self.chars.next() {
            Some(c) => c,
            None => {
                self.token = None;
                return Ok(());
            }
        };

        let token = match first {
            '(' => Token::Bracket(Bracket::Open),
            ')' => Token::Bracket(Bracket::Close),
            '\'' => Token::Quote,
            '.' => Token::Period,
            '+' | '-' | '0'..='9' => self.lex_number(first)?,
            _ if first.is_ascii_alphabetic() || SYMBOL_START.contains(&first) => {
                self.lex_symbol(first)
            }
            _ => return err!(Syntax, UnexpectedChar(first)),
        };

        trace!("Token: {}", token);
        self.token = Some(token);
        Ok(())
    }

    fn lex_number(&mut self, first: char) -> Result<Token, Error> {
        let mut text = first.to_string();
        while let Some(&c) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.chars.next();
        }

        // Lone signs are the arithmetic operators.
        if text == "+" || text == "-" {
            return Ok(Token::Symbol(text));
        }
        match text.parse::<i64>() {
            Ok(num) => Ok(Token::Number(num)),
            Err(_) => err!(Syntax, IntegerOverflow(text)),
        }
    }

    fn lex_symbol(&mut self, first: char) -> Token {
        let mut text = first.to_string();
        while let Some(&c) = self.chars.peek() {
            if !c.is_ascii_alphanumeric() && !SYMBOL_REST.contains(&c) {
                break;
            }
            text.push(c);
            self.chars.next();
        }

        match text.as_str() {
            "#t" => Token::Boolean(true),
            "#f" => Token::Boolean(false),
            _ => Token::Symbol(text),
        }
    }
}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
