//! The fixed library of built-in functions.
//!
//! Every built-in takes a flat argument list and returns the text of its
//! result. List built-ins work on the printed form of a list (a Symbol such
//! as "(1 2 3)"), not on Cells.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::{Error, ExpectedCount};
use crate::function::{Args, BuiltIn, Ret};
use crate::sexp::HeapValue;

mod arithmetic;
mod comparison;
mod list;
mod logic;
mod predicate;
mod quote;


macro_rules! builtins {
    [$($n:tt : $x:expr),+ $(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert($n, BuiltIn::new($n, $x));
            )+
            m
        }
    };
}

/// Name of the built-in that receives its argument unevaluated.
pub const QUOTE: &str = "quote";

pub fn generate_builtin_map() -> HashMap<&'static str, BuiltIn> {
    builtins![
        "quote": quote::quote,
        "+": arithmetic::add,
        "*": arithmetic::mul,
        "-": arithmetic::sub,
        "/": arithmetic::div,
        "max": arithmetic::max,
        "min": arithmetic::min,
        "abs": arithmetic::abs,
        "=": comparison::eq,
        "<": comparison::lt,
        "<=": comparison::le,
        ">": comparison::gt,
        ">=": comparison::ge,
        "number?": predicate::is_number,
        "boolean?": predicate::is_boolean,
        "not": predicate::not,
        "pair?": predicate::is_pair,
        "list?": predicate::is_list,
        "null?": predicate::is_null,
        "and": logic::and,
        "or": logic::or,
        "list": list::list,
        "cons": list::cons,
        "car": list::car,
        "cdr": list::cdr,
        "list-ref": list::list_ref,
        "list-tail": list::list_tail,
    ]
}


fn arg_text(arg: &Option<HeapValue>) -> String {
    match arg {
        Some(value) => value.to_string(),
        None => "()".to_string(),
    }
}

fn bool_text(b: bool) -> Ret {
    Ok(if b { "#t" } else { "#f" }.to_string())
}

fn exact_count(args: &Args, expected: usize) -> Result<(), Error> {
    if args.len() != expected {
        return err!(
            Runtime,
            WrongArgumentCount {
                given: args.len(),
                expected: ExpectedCount::Exactly(expected),
            }
        );
    }
    Ok(())
}

fn at_least_count(args: &Args, expected: usize) -> Result<(), Error> {
    if args.len() < expected {
        return err!(
            Runtime,
            WrongArgumentCount {
                given: args.len(),
                expected: ExpectedCount::AtLeast(expected),
            }
        );
    }
    Ok(())
}

fn invalid_argument<T>(arg: &Option<HeapValue>, expected: &'static str) -> Result<T, Error> {
    err!(
        Runtime,
        InvalidArgument {
            given: arg_text(arg),
            expected: Cow::Borrowed(expected),
        }
    )
}

fn number_arg(arg: &Option<HeapValue>) -> Result<i64, Error> {
    match arg.as_ref().and_then(|value| value.as_number()) {
        Some(num) => Ok(num),
        None => invalid_argument(arg, "a Number"),
    }
}

fn numbers(args: &Args) -> Result<Vec<i64>, Error> {
    args.iter().map(number_arg).collect()
}

fn symbol_arg(arg: &Option<HeapValue>) -> Result<&str, Error> {
    match arg.as_ref().and_then(|value| value.as_symbol()) {
        Some(name) => Ok(name),
        None => invalid_argument(arg, "a printed list"),
    }
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
