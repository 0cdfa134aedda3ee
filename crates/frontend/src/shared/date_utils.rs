//! Текущее время браузера и значения для полей дат.
//!
//! Разбор и форматирование строк API живут в `contracts::shared::datetime`;
//! здесь только то, что зависит от часов клиента.

use chrono::{Duration, Local, NaiveDateTime};
use contracts::shared::datetime::{BACKEND_DATE, INPUT_DATETIME};

/// Локальное время браузера
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Значение `<input type="date">` для даты `days` дней назад
pub fn date_input_days_ago(now: NaiveDateTime, days: i64) -> String {
    (now - Duration::days(days)).format(BACKEND_DATE).to_string()
}

/// Ближайший получас после `now` для новой брони
pub fn next_half_hour_input(now: NaiveDateTime) -> String {
    let minutes = now.and_utc().timestamp() / 60;
    let rounded = (minutes / 30 + 1) * 30;
    let next = now + Duration::minutes(rounded - minutes);
    next.format(INPUT_DATETIME).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 15)
            .and_then(|d| d.and_hms_opt(h, m, 0))
            .unwrap()
    }

    #[test]
    fn half_hour_is_always_in_future() {
        assert_eq!(next_half_hour_input(at(20, 10)), "2025-03-15T20:30");
        assert_eq!(next_half_hour_input(at(20, 30)), "2025-03-15T21:00");
        assert_eq!(next_half_hour_input(at(23, 45)), "2025-03-16T00:00");
    }

    #[test]
    fn days_ago_for_report_range() {
        assert_eq!(date_input_days_ago(at(12, 0), 30), "2025-02-13");
        assert_eq!(date_input_days_ago(at(12, 0), 0), "2025-03-15");
    }
}
