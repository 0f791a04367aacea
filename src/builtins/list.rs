//! List built-ins over printed list text.
//!
//! A printed list is scanned as runs of digits (numeric fields) separated by
//! spaces or periods. Only non-negative integers are recognized as fields.

use super::{arg_text, exact_count, invalid_argument, number_arg, numbers, symbol_arg};
use crate::error::Error;
use crate::function::{Args, Ret};


/// A character of a printed list body, tagged with the index of the most
/// recently started numeric field (-1 before the first).
enum Scanned {
    Digit(char, i64),
    Separator(char, i64),
    Other,
}

fn scan(body: &str) -> impl Iterator<Item = Scanned> + '_ {
    let mut count: i64 = 0;
    let mut separated = true;
    body.chars().map(move |c| {
        if c.is_ascii_digit() {
            if separated {
                separated = false;
                count += 1;
            }
            Scanned::Digit(c, count - 1)
        } else if c == ' ' || c == '.' {
            separated = true;
            Scanned::Separator(c, count - 1)
        } else {
            Scanned::Other
        }
    })
}

/// Text between the brackets of a printed list.
pub(super) fn list_body(text: &str) -> Option<&str> {
    text.strip_prefix('(')?.strip_suffix(')')
}

pub(super) fn field_count(body: &str) -> i64 {
    scan(body)
        .filter_map(|scanned| match scanned {
            Scanned::Digit(_, field) => Some(field + 1),
            _ => None,
        })
        .last()
        .unwrap_or(0)
}

fn printed_list(args: &Args) -> Result<&str, Error> {
    let text = symbol_arg(&args[0])?;
    match list_body(text) {
        Some(body) => Ok(body),
        None => invalid_argument(&args[0], "a printed list"),
    }
}

/// Printed form of the single argument, which must not be ().
fn non_empty_text(args: &Args) -> Result<String, Error> {
    exact_count(args, 1)?;
    if args[0].is_none() {
        return invalid_argument(&args[0], "a non-empty list");
    }
    let text = arg_text(&args[0]);
    if text == "()" {
        return err!(Runtime, EmptyList);
    }
    Ok(text)
}


pub fn list(args: &Args) -> Ret {
    let fields: Vec<String> = numbers(args)?.iter().map(i64::to_string).collect();
    Ok(format!("({})", fields.join(" ")))
}

pub fn cons(args: &Args) -> Ret {
    let fields: Vec<String> = numbers(args)?.iter().map(i64::to_string).collect();
    Ok(format!("({})", fields.join(" . ")))
}

/// Leading digit run after the opening bracket.
pub fn car(args: &Args) -> Ret {
    let text = non_empty_text(args)?;
    let inner = text.chars().count().saturating_sub(2);
    Ok(text
        .chars()
        .skip(1)
        .take(inner)
        .take_while(char::is_ascii_digit)
        .collect())
}

pub fn cdr(args: &Args) -> Ret {
    let mut text = non_empty_text(args)?;
    let space = match text.find(' ') {
        Some(space) => space,
        None => return Ok("()".to_string()),
    };

    // (a . b) yields the bare tail b.
    if let Some(period) = text.find('.') {
        if space + 1 == period {
            text.pop();
            return Ok(text.get(period + 2..).unwrap_or_default().to_string());
        }
    }
    Ok(format!("({}", &text[space + 1..]))
}

pub fn list_ref(args: &Args) -> Ret {
    exact_count(args, 2)?;
    let body = printed_list(args)?;
    let index = number_arg(&args[1])?;

    let mut res = String::new();
    for scanned in scan(body) {
        match scanned {
            Scanned::Digit(c, field) if field == index => res.push(c),
            Scanned::Separator(_, field) if field == index => break,
            _ => {}
        }
    }

    if res.is_empty() {
        return err!(
            Runtime,
            IndexOutOfRange {
                index,
                list: arg_text(&args[0]),
            }
        );
    }
    Ok(res)
}

pub fn list_tail(args: &Args) -> Ret {
    exact_count(args, 2)?;
    let body = printed_list(args)?;
    let index = number_arg(&args[1])?;

    let res: String = scan(body)
        .filter_map(|scanned| match scanned {
            Scanned::Digit(c, field) | Scanned::Separator(c, field) if field >= index => Some(c),
            _ => None,
        })
        .collect();

    if res.is_empty() && field_count(body) < index {
        return err!(
            Runtime,
            IndexOutOfRange {
                index,
                list: arg_text(&args[0]),
            }
        );
    }
    Ok(format!("({})", res))
}
