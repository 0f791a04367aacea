//! Basic blocks for procedural representation.

use dyn_clone::DynClone;
use std::fmt;

use crate::error::Error;
use crate::sexp::HeapValue;


/// Flat, ordered arguments of a call. Missing values stand for ().
pub type Args = Vec<Option<HeapValue>>;
/// Textual rendering of a call's result.
pub type Ret = Result<String, Error>;

pub trait Function: fmt::Debug + DynClone {
    fn invoke(&self, args: &Args) -> Ret;
}

dyn_clone::clone_trait_object!(Function);


#[derive(Clone, Copy)]
pub struct BuiltIn {
    name: &'static str,
    fun: fn(&Args) -> Ret,
}

impl BuiltIn {
    pub fn new(name: &'static str, fun: fn(&Args) -> Ret) -> BuiltIn {
        BuiltIn { name, fun }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Function for BuiltIn {
    fn invoke(&self, args: &Args) -> Ret {
        (self.fun)(args)
    }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{} @ {:p}]", self.name, &self.fun)
    }
}
