//! Basic rule evaluation: conditions and comparison operators over JSON
//! fact documents.

use serde_json::{Value, json};

use crate::output;

/// Evaluate one field comparison against a fact document.
fn field_matches(facts: &Value, field: &str, op: &str, expected: &Value) -> bool {
    let actual = &facts[field];
    match op {
        "eq" => actual == expected,
        "ne" => actual != expected,
        "gt" => actual
            .as_f64()
            .zip(expected.as_f64())
            .is_some_and(|(a, b)| a > b),
        "gte" => actual
            .as_f64()
            .zip(expected.as_f64())
            .is_some_and(|(a, b)| a >= b),
        "lt" => actual
            .as_f64()
            .zip(expected.as_f64())
            .is_some_and(|(a, b)| a < b),
        "lte" => actual
            .as_f64()
            .zip(expected.as_f64())
            .is_some_and(|(a, b)| a <= b),
        _ => false,
    }
}

/// Walk through a handful of single-condition rules against one fact
/// document.
pub fn simple_conditions() {
    output::heading("Basic: simple conditions");

    let facts = json!({ "age": 34, "country": "JP", "plan": "pro" });
    println!("Facts: {}", facts);

    let rules = [
        ("age gt 18", "age", "gt", json!(18)),
        ("age lt 30", "age", "lt", json!(30)),
        ("country eq \"JP\"", "country", "eq", json!("JP")),
        ("plan eq \"enterprise\"", "plan", "eq", json!("enterprise")),
        ("plan ne \"free\"", "plan", "ne", json!("free")),
    ];
    for (label, field, op, expected) in rules {
        output::print_verdict(label, field_matches(&facts, field, op, &expected));
    }
}

/// Show every comparison operator against the same numeric field.
pub fn operator_showcase() {
    output::heading("Basic: comparison operators");

    let facts = json!({ "score": 72.5 });
    println!("Facts: {}", facts);

    for op in ["eq", "ne", "gt", "gte", "lt", "lte"] {
        let label = format!("score {} 72.5", op);
        output::print_verdict(&label, field_matches(&facts, "score", op, &json!(72.5)));
    }
    output::print_success("operator walkthrough complete");
}
