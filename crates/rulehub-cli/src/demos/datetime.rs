//! Datetime rule scenarios: temporal comparison operators and a
//! business-hours window, built on chrono.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::output;

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    // Components are compile-time constants in this demo, so the
    // fallback never fires in practice.
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap_or_default()
}

/// Demonstrate before / after / between on fixed timestamps.
pub fn temporal_operators() {
    output::heading("Datetime: temporal operators");

    let signup = ts(2024, 3, 15, 9, 30);
    let trial_end = ts(2024, 4, 14, 9, 30);
    let now = ts(2024, 4, 2, 14, 0);

    output::print_kv("signup", &signup.to_string());
    output::print_kv("trial_end", &trial_end.to_string());
    output::print_kv("now", &now.to_string());

    output::print_verdict("now after signup", now > signup);
    output::print_verdict("now before trial_end", now < trial_end);
    output::print_verdict(
        "now between signup and trial_end",
        now > signup && now < trial_end,
    );
    output::print_verdict(
        "trial older than 45 days",
        now - signup > chrono::Duration::days(45),
    );
}

/// Weekday plus time-of-day window, the shape of an "only during
/// business hours" rule.
pub fn business_hours() {
    output::heading("Datetime: business hours window");

    let open = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default();
    let close = NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default();

    let samples = [
        ts(2024, 4, 1, 10, 15), // Monday morning
        ts(2024, 4, 3, 19, 40), // Wednesday evening
        ts(2024, 4, 6, 11, 0),  // Saturday
    ];

    for sample in samples {
        let weekday = sample.weekday();
        let is_weekday = !matches!(weekday, Weekday::Sat | Weekday::Sun);
        let in_window = sample.time() >= open && sample.time() < close;
        let label = format!("{} ({})", sample, weekday);
        output::print_verdict(&label, is_weekday && in_window);
    }
}
