//! Фильтр списка записей. Применяется до построения сетки расписания.

use super::aggregate::Booking;
use crate::enums::booking_status::BookingStatus;
use crate::shared::clock::parse_hhmm;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Все поля необязательны. Пустая строка или пробелы означают "без ограничения".
///
/// Поля строковые, чтобы фильтр одинаково разбирался из query-строки и из формы.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingFilter {
    /// id филиала или его наименование
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// id мастера или его имя
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff: Option<String>,
    /// "YYYY-MM-DD"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Подстрока имени клиента
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// "HH:MM"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Код статуса, см. `BookingStatus::code`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Подстрока имени клиента, филиала или услуги
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl BookingFilter {
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Количество заданных условий (для бейджа на кнопке фильтра)
    pub fn active_count(&self) -> usize {
        [
            &self.branch,
            &self.staff,
            &self.date,
            &self.customer,
            &self.time,
            &self.status,
            &self.search,
        ]
        .iter()
        .filter(|v| active(v).is_some())
        .count()
    }

    pub fn matches(&self, b: &Booking) -> bool {
        if b.base.metadata.is_deleted {
            return false;
        }

        if let Some(branch) = active(&self.branch) {
            if b.branch_ref != branch && b.branch_name != branch {
                return false;
            }
        }

        if let Some(staff) = active(&self.staff) {
            if b.staff_ref != staff && b.staff_name != staff {
                return false;
            }
        }

        if let Some(date) = active(&self.date) {
            // Нераспознанная дата ничего не пропускает
            match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                Ok(d) if d == b.booking_date => {}
                _ => return false,
            }
        }

        if let Some(time) = active(&self.time) {
            match (parse_hhmm(time), b.start_minutes()) {
                (Some(t), Some(start)) if t == start => {}
                _ => return false,
            }
        }

        if let Some(status) = active(&self.status) {
            match BookingStatus::from_code(status) {
                Some(s) if s == b.status => {}
                _ => return false,
            }
        }

        if let Some(customer) = active(&self.customer) {
            if !contains_ci(b.customer_name(), &customer.to_lowercase()) {
                return false;
            }
        }

        if let Some(search) = active(&self.search) {
            let needle = search.to_lowercase();
            let hit = contains_ci(b.customer_name(), &needle)
                || contains_ci(&b.branch_name, &needle)
                || b.services.iter().any(|l| contains_ci(&l.name, &needle));
            if !hit {
                return false;
            }
        }

        true
    }

    /// Отфильтровать список, сохранив исходный порядок
    pub fn apply<'a>(&self, bookings: &'a [Booking]) -> Vec<&'a Booking> {
        bookings.iter().filter(|b| self.matches(b)).collect()
    }

    /// То же, что `apply`, но с владением
    pub fn apply_owned(&self, bookings: Vec<Booking>) -> Vec<Booking> {
        bookings.into_iter().filter(|b| self.matches(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_booking::aggregate::{BookingDto, ServiceLine};

    fn booking(customer: &str, branch: &str, staff: &str, time: &str, service: &str) -> Booking {
        let dto = BookingDto {
            customer_name: customer.into(),
            services: vec![ServiceLine {
                name: service.into(),
                price: 1000.0,
                ..Default::default()
            }],
            booking_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            booking_time: time.into(),
            branch_ref: format!("{}-id", branch),
            branch_name: branch.into(),
            staff_ref: format!("{}-id", staff),
            staff_name: staff.into(),
            ..Default::default()
        };
        Booking::new_for_insert("BK".into(), &dto)
    }

    fn sample() -> Vec<Booking> {
        vec![
            booking("Ольга Смирнова", "Центр", "Анна", "10:00", "Маникюр"),
            booking("Ирина Ким", "Север", "Анна", "11:00", "Стрижка"),
            booking("Ольга Новикова", "Север", "Борис", "10:00", "Окрашивание"),
        ]
    }

    #[test]
    fn empty_filter_passes_everything() {
        let list = sample();
        let f = BookingFilter {
            customer: Some("   ".into()),
            ..Default::default()
        };
        assert!(f.is_empty());
        assert_eq!(f.apply(&list).len(), 3);
    }

    #[test]
    fn exact_fields_combine() {
        let list = sample();
        let f = BookingFilter {
            branch: Some("Север-id".into()),
            time: Some("10:00".into()),
            ..Default::default()
        };
        let found = f.apply(&list);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].customer_name(), "Ольга Новикова");
        assert_eq!(f.active_count(), 2);
    }

    #[test]
    fn customer_is_case_insensitive_substring() {
        let list = sample();
        let f = BookingFilter {
            customer: Some("ольга".into()),
            ..Default::default()
        };
        assert_eq!(f.apply(&list).len(), 2);
    }

    #[test]
    fn search_covers_branch_and_services() {
        let list = sample();
        let by_service = BookingFilter {
            search: Some("СТРИЖ".into()),
            ..Default::default()
        };
        assert_eq!(by_service.apply(&list).len(), 1);
        let by_branch = BookingFilter {
            search: Some("центр".into()),
            ..Default::default()
        };
        assert_eq!(by_branch.apply(&list).len(), 1);
    }

    #[test]
    fn status_and_date_are_exact() {
        let mut list = sample();
        list[1].status = BookingStatus::Confirmed;
        let f = BookingFilter {
            status: Some("confirmed".into()),
            date: Some("2025-05-01".into()),
            ..Default::default()
        };
        assert_eq!(f.apply(&list).len(), 1);
        let other_day = BookingFilter {
            date: Some("2025-05-02".into()),
            ..Default::default()
        };
        assert!(other_day.apply(&list).is_empty());
    }

    #[test]
    fn deleted_bookings_never_pass() {
        let mut list = sample();
        list[0].base.metadata.is_deleted = true;
        assert_eq!(BookingFilter::default().apply(&list).len(), 2);
    }
}
