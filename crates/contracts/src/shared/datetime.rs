//! Даты и время в форматах бэкенда и HTML-полей.
//!
//! Бэкенд хранит даты строками `YYYY-MM-DD HH:MM:SS`, поле
//! `<input type="datetime-local">` работает с `YYYY-MM-DDTHH:MM`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const BACKEND_DATETIME: &str = "%Y-%m-%d %H:%M:%S";
pub const BACKEND_DATE: &str = "%Y-%m-%d";
pub const INPUT_DATETIME: &str = "%Y-%m-%dT%H:%M";
pub const DISPLAY_DATETIME: &str = "%d/%m/%Y %H:%M";
pub const DISPLAY_DATE: &str = "%d/%m/%Y";

/// Разбирает дату-время в любом из форматов, которые встречаются в API.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.naive_local());
    }
    const FORMATS: [&str; 6] = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
        "%a, %d %b %Y %H:%M:%S GMT",
        "%d/%m/%Y %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| parse_date(value).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.split(['T', ' ']).next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, BACKEND_DATE)
        .or_else(|_| NaiveDate::parse_from_str(date_part, DISPLAY_DATE))
        .ok()
}

/// `2025-03-15T20:30` → `2025-03-15 20:30:00`
pub fn input_to_backend(value: &str) -> Option<String> {
    parse_datetime(value).map(|dt| dt.format(BACKEND_DATETIME).to_string())
}

/// `2025-03-15 20:30:00` → `2025-03-15T20:30` (значение для datetime-local)
pub fn backend_to_input(value: &str) -> String {
    parse_datetime(value)
        .map(|dt| dt.format(INPUT_DATETIME).to_string())
        .unwrap_or_default()
}

/// `2025-03-15 20:30:00` → `15/03/2025 20:30`; нераспознанное значение возвращается как есть.
pub fn format_display_datetime(value: &str) -> String {
    parse_datetime(value)
        .map(|dt| dt.format(DISPLAY_DATETIME).to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn format_display_date(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format(DISPLAY_DATE).to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_and_backend_formats_convert_both_ways() {
        assert_eq!(
            input_to_backend("2025-03-15T20:30").as_deref(),
            Some("2025-03-15 20:30:00")
        );
        assert_eq!(backend_to_input("2025-03-15 20:30:00"), "2025-03-15T20:30");
        assert_eq!(backend_to_input(""), "");
        assert_eq!(input_to_backend("mañana"), None);
    }

    #[test]
    fn parses_http_date_and_iso() {
        let dt = parse_datetime("Sat, 15 Mar 2025 20:30:00 GMT").unwrap();
        assert_eq!(dt.format(BACKEND_DATETIME).to_string(), "2025-03-15 20:30:00");
        let dt = parse_datetime("2025-03-15T20:30:00.123").unwrap();
        assert_eq!(dt.format(INPUT_DATETIME).to_string(), "2025-03-15T20:30");
        let dt = parse_datetime("2025-03-15").unwrap();
        assert_eq!(dt.format(BACKEND_DATETIME).to_string(), "2025-03-15 00:00:00");
    }

    #[test]
    fn display_formats() {
        assert_eq!(format_display_datetime("2025-03-15 20:30:00"), "15/03/2025 20:30");
        assert_eq!(format_display_date("2025-03-15 20:30:00"), "15/03/2025");
        assert_eq!(format_display_datetime("sin fecha"), "sin fecha");
    }
}
