//! Migration scenarios: compare the legacy string-based evaluator with
//! the current typed one, and take a rough timing baseline.

use std::time::Instant;

use serde_json::{Value, json};

use crate::output;

/// The legacy evaluator compared everything as strings.
fn legacy_eval(facts: &Value, field: &str, expected: &str) -> bool {
    facts[field].to_string().trim_matches('"') == expected
}

/// The current evaluator compares typed JSON values.
fn current_eval(facts: &Value, field: &str, expected: &Value) -> bool {
    &facts[field] == expected
}

/// Run both evaluators across cases where string coercion used to hide
/// type mismatches.
pub fn legacy_comparison() {
    output::heading("Migration: legacy vs current evaluator");

    let facts = json!({ "quantity": 5, "active": true, "region": "eu-west" });
    println!("Facts: {}", facts);

    let cases = [
        ("region eq \"eu-west\"", "region", "eu-west", json!("eu-west")),
        ("quantity eq \"5\"", "quantity", "5", json!("5")),
        ("quantity eq 5", "quantity", "5", json!(5)),
        ("active eq \"true\"", "active", "true", json!("true")),
    ];

    for (label, field, legacy_expected, current_expected) in cases {
        let legacy = legacy_eval(&facts, field, legacy_expected);
        let current = current_eval(&facts, field, &current_expected);
        let agreement = if legacy == current { "agree" } else { "DIFFER" };
        println!(
            "  {:<24} legacy={:<5} current={:<5} [{}]",
            label, legacy, current, agreement
        );
    }
    output::print_warning("string coercion matches above DIFFER under the typed evaluator");
}

/// Time a batch of typed evaluations. Rough numbers only; this is a
/// demo, not a benchmark harness.
pub fn timing_baseline() {
    output::heading("Migration: timing baseline");

    let facts = json!({ "quantity": 5, "active": true, "region": "eu-west" });
    let expected = json!("eu-west");
    let iterations = 100_000u32;

    let start = Instant::now();
    let mut matched = 0u32;
    for _ in 0..iterations {
        if current_eval(&facts, "region", &expected) {
            matched += 1;
        }
    }
    let elapsed = start.elapsed();

    output::print_kv("iterations", &iterations.to_string());
    output::print_kv("matched", &matched.to_string());
    output::print_kv("elapsed", &format!("{:?}", elapsed));
    output::print_success("timing baseline captured");
}
