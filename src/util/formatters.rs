//! Shared number formatting utilities.

/// Format an integer with thousand separators.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a value the way it reads in the data file: shortest form, no
/// trailing `.0`.
pub fn format_plain(val: f64) -> String {
    if val.is_nan() {
        "NaN".to_string()
    } else if val.is_infinite() {
        if val.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{}", val)
    }
}

/// Format a value with en-US grouping and at most three fraction digits.
pub fn format_grouped(val: f64) -> String {
    if !val.is_finite() {
        return format_plain(val);
    }

    let rounded = (val.abs() * 1000.0).round() as u64;
    let int_part = rounded / 1000;
    let frac_part = rounded % 1000;

    let sign = if val < 0.0 && rounded != 0 { "-" } else { "" };
    let mut text = format!("{}{}", sign, format_number(int_part));
    if frac_part != 0 {
        let frac = format!("{:03}", frac_part);
        text.push('.');
        text.push_str(frac.trim_end_matches('0'));
    }
    text
}

/// Format an axis tick value using the number of decimals implied by the
/// tick step.
pub fn format_tick(val: f64, decimals: usize) -> String {
    let text = if val.abs() >= 10_000.0 && decimals == 0 {
        format_grouped(val.round())
    } else {
        format!("{:.*}", decimals, val)
    };
    // Avoid "-0" for ticks that round to zero.
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}
