use super::list::{field_count, list_body};
use super::{bool_text, exact_count, invalid_argument, symbol_arg};
use crate::function::{Args, Ret};
use crate::sexp::Value;


pub fn is_number(args: &Args) -> Ret {
    exact_count(args, 1)?;
    bool_text(matches!(args[0].as_deref(), Some(Value::Number(_))))
}

pub fn is_boolean(args: &Args) -> Ret {
    exact_count(args, 1)?;
    match args[0].as_deref() {
        Some(value) => bool_text(matches!(value, Value::Boolean(_))),
        None => invalid_argument(&args[0], "a value"),
    }
}

/// Only #f is false; every other value, including (), is truthy.
pub fn not(args: &Args) -> Ret {
    exact_count(args, 1)?;
    bool_text(matches!(args[0].as_deref(), Some(Value::Boolean(false))))
}

/// True iff the printed list holds exactly two numeric fields.
pub fn is_pair(args: &Args) -> Ret {
    exact_count(args, 1)?;
    let text = symbol_arg(&args[0])?;
    bool_text(list_body(text).map_or(false, |body| field_count(body) == 2))
}

pub fn is_list(args: &Args) -> Ret {
    exact_count(args, 1)?;
    bool_text(!symbol_arg(&args[0])?.contains('.'))
}

pub fn is_null(args: &Args) -> Ret {
    exact_count(args, 1)?;
    bool_text(symbol_arg(&args[0])? == "()")
}
