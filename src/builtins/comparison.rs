//! Chained numeric comparisons: true iff every adjacent pair satisfies the
//! relation, and vacuously true for fewer than two arguments.

use super::{bool_text, number_arg};
use crate::function::{Args, Ret};


pub fn eq(args: &Args) -> Ret {
    chain(args, |a, b| a == b)
}

pub fn lt(args: &Args) -> Ret {
    chain(args, |a, b| a < b)
}

pub fn le(args: &Args) -> Ret {
    chain(args, |a, b| a <= b)
}

pub fn gt(args: &Args) -> Ret {
    chain(args, |a, b| a > b)
}

pub fn ge(args: &Args) -> Ret {
    chain(args, |a, b| a >= b)
}

fn chain(args: &Args, holds: fn(i64, i64) -> bool) -> Ret {
    let mut prev = match args.first() {
        Some(first) => number_arg(first)?,
        None => return bool_text(true),
    };

    // Arguments after the first failing pair are not inspected.
    for arg in &args[1..] {
        let curr = number_arg(arg)?;
        if !holds(prev, curr) {
            return bool_text(false);
        }
        prev = curr;
    }
    bool_text(true)
}
