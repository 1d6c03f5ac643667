//! Форматирование дат и времени для таблиц и заголовков

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc, Weekday};

/// Сегодня по часам браузера
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part
                    .split(['.', 'Z', '+'])
                    .next()
                    .unwrap_or(time_part);
                return format!("{}.{}.{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

/// Момент UTC в локальном времени браузера
pub fn format_utc_local(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%d.%m.%Y %H:%M:%S").to_string()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

fn weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "пн",
        Weekday::Tue => "вт",
        Weekday::Wed => "ср",
        Weekday::Thu => "чт",
        Weekday::Fri => "пт",
        Weekday::Sat => "сб",
        Weekday::Sun => "вс",
    }
}

/// "15.03.2024, пт" для заголовка сетки
pub fn format_day_title(date: NaiveDate) -> String {
    format!("{}, {}", format_date(date), weekday_short(date.weekday()))
}

/// Значение `<input type="date">` в дату
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn to_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59+00:00"),
            "31.12.2024 23:59:59"
        );
        assert_eq!(format_datetime("вчера"), "вчера");
    }

    #[test]
    fn day_title_has_weekday() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_day_title(d), "15.03.2024, пт");
    }

    #[test]
    fn input_date_roundtrip() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(to_input_date(d), "2025-01-09");
        assert_eq!(parse_input_date(" 2025-01-09 "), Some(d));
        assert_eq!(parse_input_date("09.01.2025"), None);
    }
}
