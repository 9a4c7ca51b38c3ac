//! Console output helpers for demo narration.

/// Print a section heading.
pub fn heading(title: &str) {
    println!();
    println!("=== {} ===", title);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print a key-value pair.
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

/// Print a rule evaluation verdict.
pub fn print_verdict(rule: &str, matched: bool) {
    if matched {
        println!("  [MATCH]    {}", rule);
    } else {
        println!("  [NO MATCH] {}", rule);
    }
}
