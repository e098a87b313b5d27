//! Reusable formatting utilities for CLI output
//!
//! Dates from the content API arrive as RFC 3339 timestamps or plain
//! `YYYY-MM-DD` dates; rich text fields may carry HTML from the admin editor.

use chrono::{DateTime, NaiveDate};

/// Format an API date or timestamp as `15 Jan 2025`.
///
/// Returns "N/A" for empty input; unparseable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return "N/A".to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%d %b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%d %b %Y").to_string();
    }

    value.to_string()
}

/// Format an optional date.
pub fn format_opt_date(value: Option<&str>) -> String {
    value.map(format_date).unwrap_or_else(|| "N/A".to_string())
}

/// Format an event's date span. Same-day or open-ended events show one date.
pub fn format_date_range(start: Option<&str>, end: Option<&str>) -> String {
    let start = format_opt_date(start);
    match end.map(format_date) {
        Some(end) if end != start && end != "N/A" => format!("{} – {}", start, end),
        _ => start,
    }
}

/// Remove HTML tags and collapse whitespace.
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => {
                in_tag = true;
                out.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    out.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate text to `max_chars` characters with an ellipsis.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// Placeholder for empty cells.
pub fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
