//! Module for representing runtime values.

use std::fmt;
use std::rc::Rc;

use super::cell::Cell;


/// Value shared between parse-tree positions.
///
/// Values are never mutated after construction, so sharing is safe.
pub type HeapValue = Rc<Value>;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(i64),
    Boolean(bool),
    /// Identifier, or the printed form of a whole list such as "(1 2 . 3)".
    Symbol(String),
    Cell(Cell),
}

impl Value {
    pub fn symbol<S: Into<String>>(name: S) -> Value {
        Value::Symbol(name.into())
    }

    pub fn cell(first: Option<HeapValue>, second: Option<HeapValue>) -> Value {
        Value::Cell(Cell::new(first, second))
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(num) => Some(*num),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn into_heap(self) -> HeapValue {
        Rc::new(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(num) => write!(f, "{}", num),
            Value::Boolean(true) => write!(f, "#t"),
            Value::Boolean(false) => write!(f, "#f"),
            Value::Symbol(name) => write!(f, "{}", name),
            Value::Cell(cell) => write!(f, "{}", cell),
        }
    }
}


impl From<i64> for Value {
    fn from(num: i64) -> Self {
        Value::Number(num)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
