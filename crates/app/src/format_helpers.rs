//! Formatting for trademark hits.
//!
//! Every function is total: missing or malformed input yields a fallback
//! string rather than an error.

use chrono::{DateTime, NaiveDate};
use shared_types::{ClassCode, DateValue, HitSource};
use shared_ui::BadgeVariant;

/// Classes shown per hit before the list is cut with an ellipsis.
pub const MAX_VISIBLE_CLASSES: usize = 3;

/// Format a hit date as "Jan 20, 2026".
///
/// Text dates are read as RFC 3339 or as a leading `YYYY-MM-DD`; numbers are
/// epoch seconds. Unreadable text is returned as-is.
pub fn format_date(value: &DateValue) -> String {
    const FORMAT: &str = "%b %d, %Y";
    match value {
        DateValue::Epoch(secs) => DateTime::from_timestamp(*secs, 0)
            .map(|dt| dt.format(FORMAT).to_string())
            .unwrap_or_else(|| secs.to_string()),
        DateValue::Text(text) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
                return dt.format(FORMAT).to_string();
            }
            text.get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
                .map(|date| date.format(FORMAT).to_string())
                .unwrap_or_else(|| text.clone())
        }
    }
}

/// Badge color and label for a raw `status_type`.
pub fn status_badge(status_type: Option<&str>) -> (BadgeVariant, &'static str) {
    let Some(status) = status_type.filter(|s| !s.trim().is_empty()) else {
        return (BadgeVariant::Outline, "Unknown");
    };
    let status = status.to_lowercase();
    if status.contains("live") || status.contains("registered") {
        (BadgeVariant::Live, "Live/Registered")
    } else if status.contains("pending") {
        (BadgeVariant::Pending, "Live/Pending")
    } else if status.contains("dead") || status.contains("abandoned") {
        (BadgeVariant::Dead, "Dead/Cancelled")
    } else {
        (BadgeVariant::Neutral, "Indifferent")
    }
}

/// A class code without leading zeros: `"009"` becomes `"9"`.
pub fn format_class_code(code: &ClassCode) -> String {
    match code {
        ClassCode::Number(n) => n.to_string(),
        ClassCode::Text(text) => {
            let trimmed = text.trim();
            match trimmed.parse::<i64>() {
                Ok(n) => n.to_string(),
                Err(_) => trimmed.to_string(),
            }
        }
    }
}

/// The first few class codes, and whether more were cut.
pub fn visible_class_codes(codes: &[ClassCode]) -> (Vec<String>, bool) {
    let shown = codes
        .iter()
        .take(MAX_VISIBLE_CLASSES)
        .map(format_class_code)
        .collect();
    (shown, codes.len() > MAX_VISIBLE_CLASSES)
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Display-ready fields of one hit.
#[derive(Debug, Clone, PartialEq)]
pub struct HitSummary {
    pub mark: String,
    pub owner: String,
    pub serial: String,
    pub filing_date: Option<String>,
    pub registration_date: Option<String>,
    pub renewal_date: Option<String>,
    pub status: (BadgeVariant, &'static str),
    pub description: String,
    pub classes: Vec<String>,
    pub more_classes: bool,
}

impl HitSummary {
    pub fn new(id: &str, source: &HitSource) -> Self {
        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let (classes, more_classes) = visible_class_codes(&source.class_codes);

        Self {
            mark: non_blank(&source.mark_identification)
                .unwrap_or_else(|| "Unknown Mark".to_string()),
            owner: non_blank(&source.current_owner)
                .unwrap_or_else(|| "Unknown Owner".to_string()),
            serial: if id.is_empty() { "-".to_string() } else { id.to_string() },
            filing_date: source.filing_date.as_ref().map(format_date),
            registration_date: source.registration_date.as_ref().map(format_date),
            renewal_date: source.renewal_date.as_ref().map(format_date),
            status: status_badge(source.status_type.as_deref()),
            description: source
                .mark_description_description
                .as_ref()
                .and_then(|d| d.as_text())
                .unwrap_or_else(|| "No description available".to_string()),
            classes,
            more_classes,
        }
    }
}
