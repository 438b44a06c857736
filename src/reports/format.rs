//! Display formatting for report scalars

/// `12.34%`
pub fn format_pct(value: f64) -> String {
    format!("{:.2}%", value)
}

/// `+12.34%` / `-0.50%`
pub fn format_signed_pct(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// `25.36€`
pub fn format_currency(value: f64) -> String {
    format!("{:.2}€", value)
}

/// Rounded to an integer with comma thousands separators: `1,234,567`
pub fn format_count(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, digit) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0.0 && rounded != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Undefined values render as a dash
pub fn or_dash(value: Option<f64>, format: fn(f64) -> String) -> String {
    value.map(format).unwrap_or_else(|| "-".to_string())
}
