use minischeme::{ErrorKind, Interpreter};


pub fn setup() -> Interpreter {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    Interpreter::new()
}

pub fn result<S: AsRef<str>>(interpreter: &Interpreter, s: S) -> String {
    let s = s.as_ref();
    match interpreter.run(s) {
        Ok(val) => val,
        Err(err) => panic!("{:?} failed: {}", s, err),
    }
}

pub fn results<S: AsRef<str>>(interpreter: &Interpreter, exprs: &[S]) -> Vec<String> {
    exprs.iter().map(|s| result(interpreter, s)).collect()
}

pub fn error_kind<S: AsRef<str>>(interpreter: &Interpreter, s: S) -> ErrorKind {
    let s = s.as_ref();
    match interpreter.run(s) {
        Ok(val) => panic!("{:?} unexpectedly gave {:?}", s, val),
        Err(err) => err.kind(),
    }
}
