//! Display formatting for values shown to people.
//!
//! Every helper renders a missing or unusable value as `-`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const PLACEHOLDER: &str = "-";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    // Offsets are kept as written: the wall-clock time the backend sent.
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `2025-06-01T12:30:00` becomes `2025-06-01 12:30:00`.
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw.trim()) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_amount(amount: Option<f64>, decimals: usize) -> String {
    match amount {
        Some(value) if value.is_finite() => format!("{:.*}", decimals, value),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Hide the middle four digits of the first 11-digit run: `138****5678`.
///
/// Text without such a run is returned unchanged.
pub fn mask_phone(phone: &str) -> String {
    if phone.is_empty() {
        return PLACEHOLDER.to_string();
    }
    let start = phone
        .as_bytes()
        .windows(11)
        .position(|w| w.iter().all(u8::is_ascii_digit));
    match start {
        Some(i) => format!("{}****{}", &phone[..i + 3], &phone[i + 7..]),
        None => phone.to_string(),
    }
}

/// Visual weight of an order status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Primary,
    Success,
}

impl StatusKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::Info => "info",
            StatusKind::Warning => "warning",
            StatusKind::Primary => "primary",
            StatusKind::Success => "success",
        }
    }
}

pub fn order_status_label(status: i32) -> &'static str {
    match status {
        0 => "cancelled",
        1 => "awaiting pickup",
        2 => "picking up",
        3 => "completed",
        _ => "unknown",
    }
}

pub fn order_status_kind(status: i32) -> StatusKind {
    match status {
        1 => StatusKind::Warning,
        2 => StatusKind::Primary,
        3 => StatusKind::Success,
        _ => StatusKind::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_inputs() {
        assert_eq!(format_date("2025-06-01T12:30:05"), "2025-06-01 12:30:05");
        assert_eq!(format_date("2025-06-01T12:30:05.123"), "2025-06-01 12:30:05");
        assert_eq!(format_date("2025-06-01T12:30:05+08:00"), "2025-06-01 12:30:05");
        assert_eq!(format_date("2025-06-01 08:00:00"), "2025-06-01 08:00:00");
        assert_eq!(format_date("2025-06-01"), "2025-06-01 00:00:00");
    }

    #[test]
    fn test_format_date_placeholder() {
        assert_eq!(format_date(""), "-");
        assert_eq!(format_date("yesterday"), "-");
        assert_eq!(format_date("2025-13-40T00:00:00"), "-");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(25.5), 2), "25.50");
        assert_eq!(format_amount(Some(3.0), 0), "3");
        assert_eq!(format_amount(None, 2), "-");
        assert_eq!(format_amount(Some(f64::NAN), 2), "-");
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("13812345678"), "138****5678");
        assert_eq!(mask_phone("tel 13812345678"), "tel 138****5678");
        assert_eq!(mask_phone("12345"), "12345");
        assert_eq!(mask_phone(""), "-");
    }

    #[test]
    fn test_order_status() {
        assert_eq!(order_status_label(1), "awaiting pickup");
        assert_eq!(order_status_label(9), "unknown");
        assert_eq!(order_status_kind(0), StatusKind::Info);
        assert_eq!(order_status_kind(3).as_str(), "success");
        assert_eq!(order_status_kind(-1), StatusKind::Info);
    }
}
