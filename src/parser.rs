//! Module for parsing tokens into Cell trees.
//!
//! Lists fold right into nested Cells, so `(1 2 3)` becomes
//! `Cell(1, Cell(2, Cell(3, ())))` and `(1 . 2)` becomes `Cell(1, 2)`. The
//! empty list `()` reads as no value at all.

use std::collections::VecDeque;

use log::debug;

use crate::error::Error;
use crate::sexp::{Cell, HeapValue, Value};
use crate::token::{Bracket, Token, Tokenizer};


/// One list member as read, before folding into Cells.
enum Element {
    Datum(Option<HeapValue>),
    Period,
}

/// What a single read step produced.
enum Step {
    Element(Element),
    Close,
}


/// Parses exactly one expression from |text|.
///
/// Anything after the first complete expression is a syntax error.
pub fn parse<S: AsRef<str>>(text: S) -> Result<Option<HeapValue>, Error> {
    let mut tokenizer = Tokenizer::new(text.as_ref().chars())?;
    let value = read(&mut tokenizer)?;
    if !tokenizer.is_end() {
        return err!(Syntax, TrailingTokens);
    }

    match &value {
        Some(value) => debug!("Parsed: {}", value),
        None => debug!("Parsed: ()"),
    }
    Ok(value)
}

/// Consumes one full expression from |tokenizer|.
pub fn read<I: Iterator<Item = char>>(
    tokenizer: &mut Tokenizer<I>,
) -> Result<Option<HeapValue>, Error> {
    match read_step(tokenizer)? {
        Step::Element(Element::Datum(datum)) => Ok(datum),
        Step::Element(Element::Period) => err!(Syntax, MisplacedPeriod),
        Step::Close => err!(Syntax, UnmatchedClose),
    }
}

fn read_step<I: Iterator<Item = char>>(tokenizer: &mut Tokenizer<I>) -> Result<Step, Error> {
    let token = match tokenizer.token() {
        Some(token) => token.clone(),
        None => return err!(Syntax, UnexpectedEnd),
    };
    tokenizer.next()?;

    let datum = match token {
        Token::Number(num) => Value::Number(num),
        Token::Boolean(b) => Value::Boolean(b),
        Token::Symbol(name) => Value::Symbol(name),
        Token::Quote => return read_quoted(tokenizer),
        Token::Period => return Ok(Step::Element(Element::Period)),
        Token::Bracket(Bracket::Close) => return Ok(Step::Close),
        Token::Bracket(Bracket::Open) => {
            return Ok(Step::Element(Element::Datum(read_list(tokenizer)?)));
        }
    };
    Ok(Step::Element(Element::Datum(Some(datum.into_heap()))))
}

/// Reads the expression after ' and wraps it as (quote <expr>).
fn read_quoted<I: Iterator<Item = char>>(tokenizer: &mut Tokenizer<I>) -> Result<Step, Error> {
    if tokenizer.is_end() {
        return err!(Syntax, DanglingQuote);
    }
    let quoted = match read_step(tokenizer)? {
        Step::Element(Element::Datum(datum)) => datum,
        _ => return err!(Syntax, DanglingQuote),
    };

    let mut elements = VecDeque::with_capacity(2);
    elements.push_back(Element::Datum(Some(Value::symbol("quote").into_heap())));
    elements.push_back(Element::Datum(quoted));
    Ok(Step::Element(Element::Datum(make_cell(&mut elements)?)))
}

/// Reads list members up to and including the matching close bracket.
///
/// Called after the open bracket has been consumed.
fn read_list<I: Iterator<Item = char>>(
    tokenizer: &mut Tokenizer<I>,
) -> Result<Option<HeapValue>, Error> {
    if tokenizer.is_end() {
        return err!(Syntax, UnexpectedEnd);
    }

    let mut elements = VecDeque::new();
    loop {
        match read_step(tokenizer)? {
            Step::Close => break,
            Step::Element(element) => elements.push_back(element),
        }
        if tokenizer.is_end() {
            return err!(Syntax, UnexpectedEnd);
        }
    }
    make_cell(&mut elements)
}

/// Folds |elements| into right-nested Cells, consuming them.
///
/// A period may only sit just before the last element, which becomes the
/// tail. A lone () ending a list headed by a symbol becomes an empty Cell
/// tail, so the call still has an argument list.
fn make_cell(elements: &mut VecDeque<Element>) -> Result<Option<HeapValue>, Error> {
    let period = elements
        .iter()
        .position(|element| matches!(element, Element::Period));

    let mut tail = match period {
        None => {
            let lone_empty =
                elements.len() >= 2 && matches!(elements.back(), Some(Element::Datum(None)));
            if lone_empty {
                elements.pop_back();
                let head_is_symbol = matches!(
                    elements.back(),
                    Some(Element::Datum(Some(value))) if value.as_symbol().is_some()
                );
                if head_is_symbol {
                    Some(Value::Cell(Cell::default()).into_heap())
                } else {
                    None
                }
            } else {
                None
            }
        }
        Some(index) if index > 0 && index + 2 == elements.len() => {
            let tail = match elements.pop_back() {
                Some(Element::Datum(tail)) => tail,
                _ => return err!(Syntax, MisplacedPeriod),
            };
            elements.pop_back();
            tail
        }
        Some(_) => return err!(Syntax, MisplacedPeriod),
    };

    while let Some(element) = elements.pop_back() {
        let first = match element {
            Element::Datum(datum) => datum,
            Element::Period => return err!(Syntax, MisplacedPeriod),
        };
        tail = Some(Value::cell(first, tail).into_heap());
    }
    Ok(tail)
}

#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
