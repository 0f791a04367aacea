use std::fmt;


#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(i64),
    Boolean(bool),
    Symbol(String),
    Quote,
    Period,
    Bracket(Bracket),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Bracket {
    Open,
    Close,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(num) => write!(f, "{}", num),
            Token::Boolean(true) => write!(f, "#t"),
            Token::Boolean(false) => write!(f, "#f"),
            Token::Symbol(name) => write!(f, "{}", name),
            Token::Quote => write!(f, "'"),
            Token::Period => write!(f, "."),
            Token::Bracket(Bracket::Open) => write!(f, "("),
            Token::Bracket(Bracket::Close) => write!(f, ")"),
        }
    }
}
