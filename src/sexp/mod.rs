pub mod cell;
pub mod sexp;


pub use cell::Cell;
pub use sexp::{HeapValue, Value};
