use super::exact_count;
use crate::function::{Args, Ret};
use crate::sexp::{Cell, Value};


/// Renders the unevaluated argument; Cells are wrapped in brackets.
pub fn quote(args: &Args) -> Ret {
    exact_count(args, 1)?;
    Ok(match args[0].as_deref() {
        None => "()".to_string(),
        Some(Value::Cell(cell)) => format!("({})", cell_text(cell)),
        Some(atom) => atom.to_string(),
    })
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Cell(cell) => cell_text(cell),
        atom => atom.to_string(),
    }
}

/// List-aware text of a Cell chain, without the outer brackets.
fn cell_text(cell: &Cell) -> String {
    let mut res = String::new();
    let mut cell = cell;
    loop {
        let first = match cell.first() {
            Some(first) => first,
            None => {
                res.push_str("()");
                return res;
            }
        };
        let second = match cell.second() {
            Some(second) => second,
            None => {
                res.push_str(&value_text(first));
                return res;
            }
        };

        match (first.as_ref(), second.as_ref()) {
            (Value::Number(a), Value::Number(b)) => {
                res.push_str(&format!("{} . {}", a, b));
                return res;
            }
            (a, Value::Cell(next)) => {
                res.push_str(&value_text(a));
                res.push(' ');
                cell = next;
            }
            (a, b) => {
                res.push_str(&format!("{} {}", value_text(a), b));
                return res;
            }
        }
    }
}
