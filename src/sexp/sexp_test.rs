use super::*;


fn num(n: i64) -> Option<HeapValue> {
    Some(Value::Number(n).into_heap())
}

#[test]
fn atom_text() {
    assert_eq!(Value::from(-42i64).to_string(), "-42");
    assert_eq!(Value::from(true).to_string(), "#t");
    assert_eq!(Value::from(false).to_string(), "#f");
    assert_eq!(Value::symbol("list-ref").to_string(), "list-ref");
    assert_eq!(Value::symbol("(1 2 . 3)").to_string(), "(1 2 . 3)");
}

#[test]
fn empty_cell_text() {
    assert_eq!(Value::cell(None, None).to_string(), "()");
    assert!(Cell::default().is_empty());
}

#[test]
fn cell_text_is_flat() {
    // (1 2) as a chain: no separators survive in the flat form.
    let tail = Value::cell(num(2), None);
    let list = Value::cell(num(1), Some(tail.into_heap()));
    assert_eq!(list.to_string(), "12");

    let dotted = Value::cell(num(1), num(2));
    assert_eq!(dotted.to_string(), "12");

    let second_only = Value::cell(None, num(7));
    assert_eq!(second_only.to_string(), "7");
}

#[test]
fn accessors() {
    let cell = Cell::new(Some(Value::symbol("car").into_heap()), None);
    assert_eq!(cell.head_symbol(), Some("car"));
    assert_eq!(Cell::new(num(1), None).head_symbol(), None);
    assert_eq!(Value::from(3i64).as_number(), Some(3));
    assert_eq!(Value::from(3i64).as_symbol(), None);
    assert_eq!(Value::symbol("x").as_symbol(), Some("x"));
}

#[test]
fn shared_children() {
    let shared = Value::from(5i64).into_heap();
    let a = Value::cell(Some(shared.clone()), None);
    let b = Value::cell(Some(shared.clone()), Some(shared.clone()));
    assert_eq!(std::rc::Rc::strong_count(&shared), 4);
    assert_eq!(a.to_string(), "5");
    assert_eq!(b.to_string(), "55");
}

#[test]
fn long_chains_print_and_free() {
    let mut chain = None;
    for _ in 0..100_000 {
        chain = Some(Value::cell(num(1), chain).into_heap());
    }
    let chain = chain.unwrap();
    assert_eq!(chain.to_string(), "1".repeat(100_000));

    let shared = chain.clone();
    drop(chain);
    assert_eq!(std::rc::Rc::strong_count(&shared), 1);
}
