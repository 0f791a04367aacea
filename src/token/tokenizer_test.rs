use super::*;

use crate::error::{ErrorKind, SyntaxReason};
use crate::token::token::Bracket::{Close, Open};
use crate::token::token::Token::*;


fn tokens(input: &str) -> Result<Vec<Token>, Error> {
    let mut tokenizer = Tokenizer::new(input.chars())?;
    let mut res = Vec::new();
    while let Some(token) = tokenizer.token() {
        res.push(token.clone());
        tokenizer.next()?;
    }
    Ok(res)
}

fn nest(mut v: Vec<Token>) -> Vec<Token> {
    v.insert(0, Bracket(Open));
    v.push(Bracket(Close));
    v
}

fn sym(s: &str) -> Token {
    Symbol(s.to_string())
}


#[test]
fn nested() -> Result<(), Error> {
    let input = "(testing (this (out)))";
    let mut expected = nest(vec![sym("out")]);
    expected.insert(0, sym("this"));
    expected = nest(expected);
    expected.insert(0, sym("testing"));
    expected = nest(expected);

    assert_eq!(tokens(input)?, expected);
    Ok(())
}

#[test]
fn newlines() -> Result<(), Error> {
    let input = "\n(testing\n\n (\nthis\t(out))\n)";
    let mut expected = nest(vec![sym("out")]);
    expected.insert(0, sym("this"));
    expected = nest(expected);
    expected.insert(0, sym("testing"));
    expected = nest(expected);

    assert_eq!(tokens(input)?, expected);
    Ok(())
}

#[test]
fn ints() -> Result<(), Error> {
    let input = "(1 2 -4 33 +128)";
    let expected = nest(
        vec![1, 2, -4, 33, 128]
            .into_iter()
            .map(Number)
            .collect(),
    );

    assert_eq!(tokens(input)?, expected);
    Ok(())
}

#[test]
fn lone_signs_are_symbols() -> Result<(), Error> {
    assert_eq!(
        tokens("(+ - -5)")?,
        nest(vec![sym("+"), sym("-"), Number(-5)])
    );
    Ok(())
}

#[test]
fn booleans() -> Result<(), Error> {
    assert_eq!(
        tokens("#t #f #true")?,
        vec![Boolean(true), Boolean(false), sym("#true")]
    );
    Ok(())
}

#[test]
fn extended_symbols() -> Result<(), Error> {
    assert_eq!(
        tokens("<= >= = list-ref null? set! */x")?,
        vec![
            sym("<="),
            sym(">="),
            sym("="),
            sym("list-ref"),
            sym("null?"),
            sym("set!"),
            sym("*/x"),
        ]
    );
    Ok(())
}

#[test]
fn quote_and_period() -> Result<(), Error> {
    assert_eq!(
        tokens("'(1 . 2)")?,
        vec![Quote, Bracket(Open), Number(1), Period, Number(2), Bracket(Close)]
    );
    Ok(())
}

#[test]
fn number_then_symbol() -> Result<(), Error> {
    // Digits stop at the first non-digit; the rest starts a new token.
    assert_eq!(tokens("12ab")?, vec![Number(12), sym("ab")]);
    Ok(())
}

#[test]
fn lookahead_is_stable() -> Result<(), Error> {
    let mut tokenizer = Tokenizer::new("  foo bar".chars())?;
    assert!(!tokenizer.is_end());
    assert_eq!(tokenizer.token(), Some(&sym("foo")));
    assert_eq!(tokenizer.token(), Some(&sym("foo")));

    tokenizer.next()?;
    assert_eq!(tokenizer.token(), Some(&sym("bar")));
    tokenizer.next()?;
    assert!(tokenizer.is_end());
    assert_eq!(tokenizer.token(), None);
    Ok(())
}

#[test]
fn empty_input() -> Result<(), Error> {
    assert!(Tokenizer::new("".chars())?.is_end());
    assert!(Tokenizer::new(" \n\t ".chars())?.is_end());
    Ok(())
}

#[test]
fn invalid_chars() {
    for input in &["@", "(1 2 ,)", "\"str\"", "[1]"] {
        let err = tokens(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }
    assert_eq!(
        tokens("@").unwrap_err(),
        Error::Syntax(SyntaxReason::UnexpectedChar('@'))
    );
}

#[test]
fn integer_overflow() {
    let err = tokens("99999999999999999999").unwrap_err();
    assert!(matches!(err, Error::Syntax(SyntaxReason::IntegerOverflow(_))));
}
