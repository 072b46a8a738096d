use std::collections::BTreeMap;

use msys_core::{print, render_line, Logger, Value};

fn samples() -> Vec<Value> {
    let mut obj = BTreeMap::new();
    obj.insert("a".to_string(), Value::from(1));
    vec![
        Value::Null,
        Value::Bool(true),
        Value::Number(7.0),
        Value::Number(-2.25),
        Value::from("text"),
        Value::from(""),
        Value::Object(obj),
        Value::Sequence(vec![]),
        Value::from(vec![1, 2]),
        Value::Sequence(vec![Value::from(vec!["x", "y"]), Value::Null]),
    ]
}

// For sequences, print brackets the default texts of the elements.
#[test]
fn sequence_print_brackets_element_default_text() {
    for value in samples() {
        if let Value::Sequence(items) = &value {
            let inner = items.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
            assert_eq!(print(&value), format!("[{}]", inner));
        }
    }
}

#[test]
fn scalar_print_is_default_text() {
    for value in samples().into_iter().filter(|v| !v.is_sequence()) {
        assert_eq!(print(&value), value.to_string());
    }
}

#[test]
fn spelled_out_examples() {
    assert_eq!(print(&Value::Sequence(vec![])), "[]");
    assert_eq!(print(&Value::from(vec![1, 2, 3])), "[1, 2, 3]");
    assert_eq!(
        render_line(&[Value::from(1), Value::from("a"), Value::from(vec![1, 2])]),
        "1 a [1, 2]"
    );
    assert_eq!(render_line(&[]), "");
    assert_eq!(render_line(&[Value::from("x")]), "x");
}

#[test]
fn json_arguments_through_logger() {
    let logger = Logger::new(Vec::new());
    let args: Vec<Value> = [r#"[1, [2, 3], "s"]"#, "4.5", r#"{"k": [1]}"#]
        .iter()
        .map(|src| serde_json::from_str::<serde_json::Value>(src).expect("valid json").into())
        .collect();
    logger.log(&args).expect("log failed");

    let out = String::from_utf8(logger.into_inner()).expect("utf-8 output");
    assert_eq!(out, "[1, 2,3, s] 4.5 [object Object]\n");
}
