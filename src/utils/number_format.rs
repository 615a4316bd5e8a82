/// Format an amount the way an en-US locale string does: thousands grouping
/// and at most three fraction digits, trailing zeros dropped.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let negative = value < 0.0;
    let abs = value.abs();
    let mut whole = abs.trunc();
    let mut millis = ((abs - whole) * 1000.0).round() as u32;
    if millis >= 1000 {
        whole += 1.0;
        millis = 0;
    }

    let digits = format!("{:.0}", whole);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative && (whole > 0.0 || millis > 0) {
        out.push('-');
    }
    out.push_str(&grouped);
    if millis > 0 {
        let frac = format!("{:03}", millis);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// Plain number rendering with no grouping (`4.5`, `10`).
pub fn format_plain_number(value: f64) -> String {
    format!("{}", value)
}
