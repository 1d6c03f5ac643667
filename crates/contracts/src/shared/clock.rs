//! Время суток в минутах от полуночи и форматы "HH:MM"

pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Разбирает "HH:MM" (24h) в минуты от полуночи.
///
/// Часы из одной или двух цифр, минуты ровно из двух. Секунды ("HH:MM:SS",
/// как отдаёт `<input type="time" step>`) отбрасываются, другие хвосты нет.
pub fn parse_hhmm(value: &str) -> Option<i32> {
    let mut parts = value.trim().split(':');
    let hours = parts.next()?;
    let minutes = parts.next()?;
    if let Some(seconds) = parts.next() {
        if !is_digits(seconds, 2) {
            return None;
        }
    }
    if parts.next().is_some() || !is_digits(minutes, 2) {
        return None;
    }
    if hours.is_empty() || hours.len() > 2 || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Приводит время к виду "HH:MM"; `None`, если строка не разбирается
pub fn normalize_hhmm(value: &str) -> Option<String> {
    parse_hhmm(value).map(format_hhmm)
}

fn is_digits(part: &str, len: usize) -> bool {
    part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
}

/// Минуты от полуночи → "HH:MM". Значения вне суток приводятся по модулю.
pub fn format_hhmm(minutes: i32) -> String {
    let m = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Ключ часа для маски рабочих часов: 9 → "09"
pub fn hour_key(hour: u32) -> String {
    format!("{:02}", hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_forms() {
        assert_eq!(parse_hhmm("09:15"), Some(555));
        assert_eq!(parse_hhmm("9:15"), Some(555));
        assert_eq!(parse_hhmm("23:59:30"), Some(1439));
        assert_eq!(parse_hhmm("00:00"), Some(0));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("12:60"), None);
        assert_eq!(parse_hhmm("noon"), None);
        assert_eq!(parse_hhmm("12"), None);
    }

    #[test]
    fn rejects_malformed_forms() {
        assert_eq!(parse_hhmm("10:00:junk"), None);
        assert_eq!(parse_hhmm("10:00:00:00"), None);
        assert_eq!(parse_hhmm("+9:15"), None);
        assert_eq!(parse_hhmm("-1:15"), None);
        assert_eq!(parse_hhmm("9:5"), None);
        assert_eq!(parse_hhmm("009:15"), None);
        assert_eq!(parse_hhmm(" 9 :15"), None);
        assert_eq!(parse_hhmm(":15"), None);
    }

    #[test]
    fn normalizes_to_two_digit_hours() {
        assert_eq!(normalize_hhmm("9:15").as_deref(), Some("09:15"));
        assert_eq!(normalize_hhmm(" 18:45:00 ").as_deref(), Some("18:45"));
        assert_eq!(normalize_hhmm("9:5"), None);
    }

    #[test]
    fn formats_with_wraparound() {
        assert_eq!(format_hhmm(555), "09:15");
        assert_eq!(format_hhmm(-30), "23:30");
        assert_eq!(format_hhmm(1440 + 15), "00:15");
        assert_eq!(hour_key(7), "07");
    }
}
