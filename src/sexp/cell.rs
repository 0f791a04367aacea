use std::convert::TryFrom;
use std::fmt;
use std::rc::Rc;

use super::sexp::{HeapValue, Value};


/// Two-slot node of list structure.
///
/// A missing |first| or |second| stands for the empty list in that position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    first: Option<HeapValue>,
    second: Option<HeapValue>,
}

impl Cell {
    pub fn new(first: Option<HeapValue>, second: Option<HeapValue>) -> Cell {
        Cell { first, second }
    }

    pub fn first(&self) -> Option<&HeapValue> {
        self.first.as_ref()
    }

    pub fn second(&self) -> Option<&HeapValue> {
        self.second.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }

    /// Name of the head symbol, if this Cell looks like a call form.
    pub fn head_symbol(&self) -> Option<&str> {
        self.first().and_then(|first| first.as_symbol())
    }
}

impl fmt::Display for Cell {
    /// Concatenated text of both slots; the empty Cell prints as ().
    ///
    /// This is the flat form text-based list built-ins scan, not the
    /// list-aware rendering produced by quote.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }

        let mut cell = self;
        loop {
            if let Some(first) = &cell.first {
                write!(f, "{}", first)?;
            }
            match cell.second.as_deref() {
                None => return Ok(()),
                Some(Value::Cell(next)) if next.is_empty() => return write!(f, "()"),
                Some(Value::Cell(next)) => cell = next,
                Some(atom) => return write!(f, "{}", atom),
            }
        }
    }
}

impl Drop for Cell {
    // Unlinks the |second| spine one Cell at a time so long lists don't
    // recurse once per element when freed.
    fn drop(&mut self) {
        let mut next = self.second.take();
        while let Some(value) = next {
            next = match Rc::try_unwrap(value) {
                Ok(Value::Cell(mut cell)) => cell.second.take(),
                _ => None,
            };
        }
    }
}


impl<'a> TryFrom<Option<&'a HeapValue>> for &'a Cell {
    type Error = Option<&'a HeapValue>;

    fn try_from(value: Option<&'a HeapValue>) -> Result<Self, Self::Error> {
        if let Some(heap) = value {
            if let Value::Cell(cell) = heap.as_ref() {
                return Ok(cell);
            }
        }
        Err(value)
    }
}
