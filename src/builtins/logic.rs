//! and/or over already-gathered arguments.
//!
//! Only Booleans decide the result early; otherwise the text of the last
//! argument is the result, and a trailing () renders as nothing.

use super::{arg_text, bool_text};
use crate::function::{Args, Ret};
use crate::sexp::Value;


pub fn and(args: &Args) -> Ret {
    decide(args, false)
}

pub fn or(args: &Args) -> Ret {
    decide(args, true)
}

fn decide(args: &Args, deciding: bool) -> Ret {
    let last = match args.last() {
        Some(last) => last,
        None => return bool_text(!deciding),
    };

    let decided = args
        .iter()
        .any(|arg| matches!(arg.as_deref(), Some(Value::Boolean(b)) if *b == deciding));
    if decided {
        return bool_text(deciding);
    }

    match last {
        Some(_) => Ok(arg_text(last)),
        None => Ok(String::new()),
    }
}
