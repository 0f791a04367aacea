//! A small Scheme-like expression evaluator.
//!
//! Expressions are read from text, evaluated against a fixed library of
//! integer, boolean, and list built-ins, and rendered back to text:
//!
//! ```
//! assert_eq!(minischeme::run("(+ 1 (* 2 3))").unwrap(), "7");
//! assert_eq!(minischeme::run("(cdr '(1 2 3))").unwrap(), "(2 3)");
//! ```
//!
//! There are no user definitions, closures, or mutation; each run is
//! independent of every other.
//!
//! Logging goes through the `log` facade. This crate never installs a
//! logger itself; see https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod error;

pub mod builtins;
#[cfg(feature = "cli")]
pub mod cli_helper;
pub mod function;
pub mod interpreter;
pub mod parser;
pub mod sexp;
pub mod token;

pub use crate::error::{Error, ErrorKind};
pub use crate::interpreter::Interpreter;


/// Evaluates one expression with a fresh Interpreter.
pub fn run<S: AsRef<str>>(expr: S) -> Result<String, Error> {
    Interpreter::new().run(expr)
}
