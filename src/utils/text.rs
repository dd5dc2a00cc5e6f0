pub const PLACEHOLDER: &str = "-";

pub fn fmt_number(value: Option<f64>, decimals: usize) -> Option<String> {
    value.map(|v| format!("{v:.decimals$}"))
}

pub fn fmt_pct(value: Option<f64>, decimals: usize) -> Option<String> {
    value.map(|v| format!("{v:.decimals$}%"))
}

pub fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => placeholder.to_string(),
    }
}
