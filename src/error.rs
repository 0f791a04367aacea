//! Errors surfaced by tokenizing, parsing, and evaluation.
//!
//! Every failure aborts the current run. Callers that need to react to the
//! failure class rather than its details should match on [`Error::kind`].

use std::borrow::Cow;
use std::fmt;

use self::ExpectedCount::*;
use self::RuntimeReason::*;
use self::SyntaxReason::*;


/// Creates an Error wrapped in Err.
///
/// `err!(Syntax, UnexpectedEnd)` expands to
/// `Err(Error::Syntax(SyntaxReason::UnexpectedEnd))`; Name errors take the
/// offending symbol directly: `err!(Name, symbol)`.
#[macro_export]
macro_rules! err {
    (Syntax, $($reason:tt)+) => {
        Err($crate::error::Error::Syntax(
            $crate::error::SyntaxReason::$($reason)+,
        ))
    };
    (Runtime, $($reason:tt)+) => {
        Err($crate::error::Error::Runtime(
            $crate::error::RuntimeReason::$($reason)+,
        ))
    };
    (Name, $symbol:expr) => {
        Err($crate::error::Error::Name($symbol.to_string()))
    };
}


#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    Syntax(SyntaxReason),
    Runtime(RuntimeReason),
    /// Symbol that is not a built-in, used where it must be evaluated.
    Name(String),
}

/// Failure class of an Error, without details.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Syntax,
    Runtime,
    Name,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SyntaxReason {
    UnexpectedChar(char),
    IntegerOverflow(String),
    UnexpectedEnd,
    TrailingTokens,
    MisplacedPeriod,
    UnmatchedClose,
    DanglingQuote,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RuntimeReason {
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
    InvalidArgument {
        given: String,
        expected: Cow<'static, str>,
    },
    InvalidCallForm(String),
    DivideByZero,
    EmptyList,
    IndexOutOfRange {
        index: i64,
        list: String,
    },
    BareBuiltIn(String),
    IntegerOverflow(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
}


impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax(_) => ErrorKind::Syntax,
            Error::Runtime(_) => ErrorKind::Runtime,
            Error::Name(_) => ErrorKind::Name,
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(reason) => write!(f, "[Syntax Error] {}", reason),
            Error::Runtime(reason) => write!(f, "[Runtime Error] {}", reason),
            Error::Name(symbol) => write!(f, "[Name Error] Unbound symbol: \"{}\"", symbol),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Runtime => write!(f, "runtime error"),
            ErrorKind::Name => write!(f, "name error"),
        }
    }
}

impl fmt::Display for SyntaxReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnexpectedChar(c) => write!(f, "Unexpected character: {:?}", c),
            SyntaxReason::IntegerOverflow(text) => {
                write!(f, "Integer literal out of range: {}", text)
            }
            UnexpectedEnd => write!(f, "Unexpected end of input"),
            TrailingTokens => write!(f, "Trailing tokens after expression"),
            MisplacedPeriod => write!(f, "Period must be penultimate in a list"),
            UnmatchedClose => write!(f, "Unmatched close bracket"),
            DanglingQuote => write!(f, "Quote must be followed by an expression"),
        }
    }
}

impl fmt::Display for RuntimeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrongArgumentCount { given, expected } => write!(
                f,
                "Wrong argument count: given {}, expected {}",
                given, expected
            ),
            InvalidArgument { given, expected } => write!(
                f,
                "Invalid argument: given {}, expected {}",
                given, expected
            ),
            InvalidCallForm(form) => write!(f, "Invalid call form: {}", form),
            DivideByZero => write!(f, "Division by zero"),
            EmptyList => write!(f, "Expected a non-empty list"),
            IndexOutOfRange { index, list } => {
                write!(f, "Index {} out of range for {}", index, list)
            }
            BareBuiltIn(name) => write!(f, "Built-in used as a value: {}", name),
            RuntimeReason::IntegerOverflow(text) => {
                write!(f, "Integer result out of range: {}", text)
            }
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exactly(exactly) => write!(f, "{}", exactly),
            AtLeast(minimum) => write!(f, "at least {}", minimum),
        }
    }
}
