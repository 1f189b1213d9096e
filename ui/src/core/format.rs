//! Formatting helpers for presenting query results.

/// `0.95` -> `"95.0%"`.
pub fn format_confidence(ratio: f64) -> String {
    if !ratio.is_finite() {
        return "—".to_string();
    }
    format!("{:.1}%", ratio * 100.0)
}

pub fn format_amount(value: f64) -> String {
    format!("${value:.2}")
}

/// Width of the SQL line-number gutter for `lines` lines.
pub fn gutter_width(lines: usize) -> usize {
    lines.max(1).to_string().len()
}
