//! Integer arithmetic. Overflow wraps.

use super::{at_least_count, exact_count, number_arg, numbers};
use crate::function::{Args, Ret};


pub fn add(args: &Args) -> Ret {
    let mut curr: i64 = 0;
    for num in numbers(args)? {
        curr = curr.wrapping_add(num);
    }
    Ok(curr.to_string())
}

pub fn mul(args: &Args) -> Ret {
    let mut curr: i64 = 1;
    for num in numbers(args)? {
        curr = curr.wrapping_mul(num);
    }
    Ok(curr.to_string())
}

/// A single argument is negated.
pub fn sub(args: &Args) -> Ret {
    at_least_count(args, 1)?;
    let mut curr = number_arg(&args[0])?;
    if args.len() == 1 {
        return Ok(curr.wrapping_neg().to_string());
    }
    for arg in &args[1..] {
        curr = curr.wrapping_sub(number_arg(arg)?);
    }
    Ok(curr.to_string())
}

pub fn div(args: &Args) -> Ret {
    at_least_count(args, 1)?;
    let mut curr = number_arg(&args[0])?;
    for arg in &args[1..] {
        let divisor = number_arg(arg)?;
        if divisor == 0 {
            return err!(Runtime, DivideByZero);
        }
        curr = curr.wrapping_div(divisor);
    }
    Ok(curr.to_string())
}

pub fn max(args: &Args) -> Ret {
    extremum(args, std::cmp::max)
}

pub fn min(args: &Args) -> Ret {
    extremum(args, std::cmp::min)
}

pub fn abs(args: &Args) -> Ret {
    exact_count(args, 1)?;
    Ok(number_arg(&args[0])?.wrapping_abs().to_string())
}

fn extremum(args: &Args, pick: fn(i64, i64) -> i64) -> Ret {
    at_least_count(args, 1)?;
    let mut curr = number_arg(&args[0])?;
    for arg in &args[1..] {
        curr = pick(curr, number_arg(arg)?);
    }
    Ok(curr.to_string())
}
