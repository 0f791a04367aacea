//! Evaluation of parsed expressions against the built-in table.
//!
//! Evaluation is text-driven: every call renders its result as text, and
//! nested call results are re-read into values with
//! [`Interpreter::check_string`] before being passed on as arguments.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use std::collections::HashMap;
use std::convert::TryFrom;

use crate::builtins::{self, QUOTE};
use crate::error::Error;
use crate::function::{Args, Function, Ret};
use crate::parser;
use crate::sexp::{Cell, HeapValue, Value};


#[derive(Clone, Debug)]
pub struct Interpreter {
    funcs: HashMap<&'static str, Box<dyn Function>>,
}

impl Interpreter {
    pub fn new() -> Self {
        let funcs = builtins::generate_builtin_map()
            .into_iter()
            .map(|(name, builtin)| (name, Box::new(builtin) as Box<dyn Function>))
            .collect();
        Self { funcs }
    }

    /// Parses and evaluates exactly one expression, returning its text.
    pub fn run<S: AsRef<str>>(&self, text: S) -> Ret {
        let text = text.as_ref();
        debug!("Run: {}", text);
        let value = parser::parse(text)?;
        let res = self.expand(value.as_ref())?;
        debug!("Result: {}", res);
        Ok(res)
    }

    /// Names of all built-ins, sorted.
    pub fn builtin_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.funcs.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    /// Reads a call result back into a value.
    ///
    /// Empty text is (); #t/#f are Booleans; text starting with a digit or
    /// '-' is the Number of its leading integer, if it has one. Anything
    /// else, including printed lists, stays a Symbol.
    pub fn check_string(text: &str) -> Result<Option<HeapValue>, Error> {
        lazy_static! {
            static ref LEADING_INT: Regex = Regex::new(r"^-?\d+").unwrap();
        }

        let value = match text {
            "" => return Ok(None),
            "#t" => Value::Boolean(true),
            "#f" => Value::Boolean(false),
            _ if text.starts_with(|c: char| c.is_ascii_digit() || c == '-') => {
                match LEADING_INT.find(text) {
                    Some(m) => match m.as_str().parse::<i64>() {
                        Ok(num) => Value::Number(num),
                        Err(_) => return err!(Runtime, IntegerOverflow(text.to_string())),
                    },
                    None => Value::symbol(text),
                }
            }
            _ => Value::symbol(text),
        };
        Ok(Some(value.into_heap()))
    }


    fn expand(&self, value: Option<&HeapValue>) -> Ret {
        let value = match value {
            Some(value) => value,
            None => return err!(Runtime, InvalidCallForm("()".to_string())),
        };

        match value.as_ref() {
            Value::Number(_) | Value::Boolean(_) => Ok(value.to_string()),
            Value::Symbol(name) => {
                if self.is_builtin(name) {
                    err!(Runtime, BareBuiltIn(name.clone()))
                } else {
                    err!(Name, name)
                }
            }
            Value::Cell(cell) => self.evaluate(cell, false),
        }
    }

    /// Calls the built-in named by the head of |cell|.
    ///
    /// Under |optimizer| (inside and/or), unknown heads evaluate to their
    /// own name instead of failing.
    fn evaluate(&self, cell: &Cell, optimizer: bool) -> Ret {
        let name = match cell.head_symbol() {
            Some(name) => name,
            None => return err!(Runtime, InvalidCallForm(cell.to_string())),
        };
        let func = match self.funcs.get(name) {
            Some(func) => func,
            None if optimizer => {
                debug!("Optimizer passing through unknown head {}", name);
                return Ok(name.to_string());
            }
            None => return err!(Name, name),
        };

        if name == QUOTE {
            let quoted = match <&Cell>::try_from(cell.second()) {
                Ok(quoted) => quoted,
                Err(_) => return err!(Runtime, InvalidCallForm(cell.to_string())),
            };
            return func.invoke(&vec![quoted.first().cloned()]);
        }

        let optimizer = optimizer || name == "and" || name == "or";
        let mut args = Args::new();
        self.unpack_args(cell.second(), &mut args, optimizer)?;
        if args.len() > 1 && matches!(args.last(), Some(None)) {
            args.pop();
        }

        debug!("Calling {} with {} arg(s)", name, args.len());
        func.invoke(&args)
    }

    /// Flattens the argument tail |object| into |args|, evaluating nested
    /// call forms along the way.
    ///
    /// The `second` spine is walked in a loop; only sub-lists in `first`
    /// position recurse.
    fn unpack_args(
        &self,
        object: Option<&HeapValue>,
        args: &mut Args,
        optimizer: bool,
    ) -> Result<(), Error> {
        let mut object = object;
        loop {
            let cell = match object.map(|value| value.as_ref()) {
                None => return Ok(()),
                Some(Value::Cell(cell)) => cell,
                Some(_) => {
                    args.push(object.cloned());
                    return Ok(());
                }
            };

            match cell.first() {
                Some(first) => self.unpack_member(first, args, optimizer)?,
                None => {
                    args.push(None);
                    return Ok(());
                }
            }
            let second = match cell.second() {
                Some(second) => second,
                None => return Ok(()),
            };
            match second.as_ref() {
                Value::Cell(sub) if sub.head_symbol().is_none() => object = Some(second),
                _ => return self.unpack_member(second, args, optimizer),
            }
        }
    }

    fn unpack_member(
        &self,
        member: &HeapValue,
        args: &mut Args,
        optimizer: bool,
    ) -> Result<(), Error> {
        match member.as_ref() {
            Value::Cell(sub) if sub.head_symbol().is_some() => {
                let text = self.evaluate(sub, optimizer)?;
                args.push(Self::check_string(&text)?);
            }
            Value::Cell(_) => self.unpack_args(Some(member), args, optimizer)?,
            _ => args.push(Some(member.clone())),
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
