//! Interactive REPL for minischeme.
//!
//! Run as:                  `cargo run`.
//! Evaluate one expression: `cargo run -- -e "(+ 1 2)"`.
//!
//! Logging is configured through RUST_LOG, e.g. `RUST_LOG=debug cargo run`.

use clap::{App, Arg};
use colored::Colorize;
use log::LevelFilter;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use minischeme::cli_helper::CliHelper;
use minischeme::{Error, Interpreter};


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = App::new("minischeme")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Evaluates Scheme-like integer and list expressions")
        .arg(
            Arg::new("eval")
                .short('e')
                .long("eval")
                .value_name("EXPR")
                .takes_value(true)
                .help("Evaluate EXPR, print the result, and exit"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Print errors without color"),
        )
        .get_matches();

    if matches.is_present("no-color") {
        colored::control::set_override(false);
    }

    let interpreter = Interpreter::new();
    if let Some(expr) = matches.value_of("eval") {
        return match interpreter.run(expr) {
            Ok(val) => {
                println!("{}", val);
                Ok(())
            }
            Err(err) => {
                print_error(&err);
                Err(format!("{:?} failed", expr))
            }
        };
    }

    repl(&interpreter);
    Ok(())
}

fn repl(interpreter: &Interpreter) {
    let mut editor = Editor::<CliHelper>::new();
    editor.set_helper(Some(CliHelper::new(interpreter)));

    let mut curr_expr = String::default();
    loop {
        let depth = bracket_depth(&curr_expr);
        let line = if depth == 0 {
            editor.readline("> ")
        } else {
            editor.readline(&format!("..{}", "  ".repeat(depth)))
        };

        match line {
            Ok(line) => {
                if !curr_expr.is_empty() {
                    curr_expr.push(' ');
                }
                curr_expr += &line;
                if curr_expr.trim().is_empty() || bracket_depth(&curr_expr) > 0 {
                    continue;
                }

                editor.add_history_entry(curr_expr.as_str());
                match interpreter.run(&curr_expr) {
                    Ok(val) => println!("-> {}", val),
                    Err(err) => print_error(&err),
                }
                println!();
                curr_expr.clear();
            }
            Err(ReadlineError::Interrupted) => {
                // Cancels an expression mid-entry.
                println!("^C");
                curr_expr.clear();
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                return;
            }
            Err(err) => {
                println!("[Readline Error]: {:?}", err);
                println!();
                curr_expr.clear();
            }
        }
    }
}

fn print_error(err: &Error) {
    println!(" {}", err.to_string().red());
}

/// Count of unclosed open brackets in |text|.
fn bracket_depth(text: &str) -> usize {
    let mut depth: usize = 0;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    depth
}
