use rustyline::completion::{Candidate, Completer};
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::interpreter::Interpreter;


/// Rustyline Helper completing built-in names.
pub struct CliHelper {
    names: Vec<&'static str>,
}

pub struct CliCandidate {
    name: &'static str,
}

impl CliHelper {
    pub fn new(interpreter: &Interpreter) -> Self {
        Self {
            names: interpreter.builtin_names(),
        }
    }

    fn name_prefix(&self, prefix: &str) -> Vec<CliCandidate> {
        self.names
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|&name| CliCandidate { name })
            .collect()
    }

    /// Byte range of the word under |pos|.
    fn word_bounds(&self, line: &str, pos: usize) -> (usize, usize) {
        let mut start: usize = 0;
        let mut end: usize = line.len();
        for (i, c) in line.char_indices() {
            if c.is_whitespace() || c == '(' || c == ')' || c == '\'' {
                if i < pos {
                    start = i + c.len_utf8();
                } else {
                    end = i;
                    break;
                }
            }
        }
        (start, end)
    }
}


impl Completer for CliHelper {
    type Candidate = CliCandidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, _end) = self.word_bounds(line, pos);
        Ok((start, self.name_prefix(&line[start..pos])))
    }
}


impl Helper for CliHelper {}
impl Hinter for CliHelper {
    type Hint = CliCandidate;
}
impl Highlighter for CliHelper {}
impl Validator for CliHelper {}


impl Candidate for CliCandidate {
    fn display(&self) -> &str {
        self.name
    }

    fn replacement(&self) -> &str {
        self.name
    }
}

impl Hint for CliCandidate {
    fn display(&self) -> &str {
        self.name
    }

    fn completion(&self) -> Option<&str> {
        Some(self.name)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_builtin_prefixes() {
        let helper = CliHelper::new(&Interpreter::new());
        let names: Vec<&str> = helper.name_prefix("list").iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["list", "list-ref", "list-tail", "list?"]);
        assert!(helper.name_prefix("lambda").is_empty());
    }

    #[test]
    fn word_bounds_stop_at_brackets() {
        let helper = CliHelper::new(&Interpreter::new());
        assert_eq!(helper.word_bounds("(car '(1 2))", 3), (1, 4));
        assert_eq!(helper.word_bounds("(+ 1 (ab", 8), (6, 8));
        assert_eq!(helper.word_bounds("", 0), (0, 0));
    }
}
