mod common;

use minischeme::error::{Error, RuntimeReason, SyntaxReason};
use minischeme::{ErrorKind, Interpreter};


#[test]
fn basic_arithmetic() {
    let interpreter = common::setup();

    let results = common::results(&interpreter, &["(+ 1 2 3)", "(* 2 (+ 1 1) 3)", "(- 10 4 3)"]);
    assert_eq!(results, vec!["6", "12", "3"]);

    let results = common::results(&interpreter, &["(/ 7 2)", "(/ (- 1 1) 2)", "(/ -9 2)"]);
    assert_eq!(results, vec!["3", "0", "-4"]);

    let results = common::results(&interpreter, &["(max 3 -1 8)", "(min 3 -1 8)", "(abs -6)"]);
    assert_eq!(results, vec!["8", "-1", "6"]);
}

#[test]
fn arithmetic_boundaries() {
    let interpreter = common::setup();

    let results = common::results(&interpreter, &["(+)", "(*)", "(- 5)", "(and)", "(or)"]);
    assert_eq!(results, vec!["0", "1", "-5", "#t", "#f"]);
}

#[test]
fn comparisons() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &["(< 1 2 3)", "(< 1 3 2)", "(= 2 2)", "(>= 3 3 1)", "(> 1)", "(<=)"],
    );
    assert_eq!(results, vec!["#t", "#f", "#t", "#t", "#t", "#t"]);
}

#[test]
fn predicates() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &[
            "(number? 4)",
            "(number? #t)",
            "(boolean? #f)",
            "(not #f)",
            "(not 0)",
            "(null? '())",
            "(null? '(1))",
            "(list? '(1 2))",
            "(list? '(1 . 2))",
            "(pair? '(1 . 2))",
            "(pair? '(1 2 3))",
        ],
    );
    assert_eq!(
        results,
        vec!["#t", "#f", "#t", "#t", "#f", "#t", "#f", "#t", "#f", "#t", "#f"]
    );
}

#[test]
fn logic() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &["(and 1 2)", "(and 1 #f 2)", "(or #f 5)", "(or #f #t)", "(and (< 1 2) (> 3 2))"],
    );
    assert_eq!(results, vec!["2", "#f", "5", "#t", "#t"]);
}

#[test]
fn lists() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &[
            "(list 1 2 3)",
            "(list)",
            "(cons 1 2)",
            "(car (quote (1 2 3)))",
            "(cdr (quote (1 2 3)))",
            "(cdr '(5))",
            "(list-ref (quote (10 20 30)) 1)",
            "(list-tail '(1 2 3 4) 2)",
            "(car (cdr (list 4 5 6)))",
        ],
    );
    assert_eq!(
        results,
        vec!["(1 2 3)", "()", "(1 . 2)", "1", "(2 3)", "()", "20", "(3 4)", "5"]
    );
}

#[test]
fn quote_round_trip() {
    let interpreter = common::setup();

    for literal in &["7", "-7", "#t", "#f", "abc", "()", "(1 2 3)", "(1 . 2)", "(1 2 . 3)"] {
        assert_eq!(
            common::result(&interpreter, format!("(quote {})", literal)),
            *literal
        );
        assert_eq!(common::result(&interpreter, format!("'{}", literal)), *literal);
    }
}

#[test]
fn runtime_errors() {
    let interpreter = common::setup();

    for expr in &[
        "(car)",
        "(+ #t)",
        "(/ 1 0)",
        "(abs 1 2)",
        "(car '())",
        "(list-ref '(1 2) 5)",
        "(1 2)",
        "()",
        "+",
        "(quote)",
    ] {
        assert_eq!(common::error_kind(&interpreter, expr), ErrorKind::Runtime, "{}", expr);
    }

    assert_eq!(
        interpreter.run("(/ 1 0)"),
        Err(Error::Runtime(RuntimeReason::DivideByZero))
    );
}

#[test]
fn name_errors() {
    let interpreter = common::setup();

    assert_eq!(
        interpreter.run("(foo 1 2)"),
        Err(Error::Name("foo".to_string()))
    );
    for expr in &["foo", "(+ 1 a)", "(list (bar))"] {
        assert_eq!(common::error_kind(&interpreter, expr), ErrorKind::Name, "{}", expr);
    }
}

#[test]
fn syntax_errors() {
    let interpreter = common::setup();

    for expr in &["(1 . )", "(1 2", ")", "", "(+ 1 2) 3", "'", "(1 . 2 3)", "[1]", "(. 1)"] {
        assert_eq!(common::error_kind(&interpreter, expr), ErrorKind::Syntax, "{:?}", expr);
    }

    assert_eq!(
        interpreter.run("(1 2"),
        Err(Error::Syntax(SyntaxReason::UnexpectedEnd))
    );
    assert_eq!(
        interpreter.run("(+ 1 2) 3"),
        Err(Error::Syntax(SyntaxReason::TrailingTokens))
    );
}

#[test]
fn fresh_interpreters_agree() {
    let exprs = ["(+ 1 (* 2 3))", "(cdr '(1 2 3))", "(and 1 2)", "(list-tail '(1 2) 1)"];

    let first = common::results(&common::setup(), &exprs);
    let second = common::results(&Interpreter::new(), &exprs);
    assert_eq!(first, second);

    // Runs on one instance leave no state behind.
    let interpreter = common::setup();
    assert_eq!(common::results(&interpreter, &exprs), first);
    assert_eq!(common::results(&interpreter, &exprs), first);
}

#[test]
fn convenience_run() {
    assert_eq!(minischeme::run("(+ 2 2)"), Ok("4".to_string()));
    assert_eq!(
        minischeme::run("(car)").map_err(|err| err.kind()),
        Err(ErrorKind::Runtime)
    );
}

#[test]
fn whitespace_is_insignificant() {
    let interpreter = common::setup();

    let results = common::results(&interpreter, &["  ( +\n1\t2 )  ", "(+ 1 2)"]);
    assert_eq!(results, vec!["3", "3"]);
}
