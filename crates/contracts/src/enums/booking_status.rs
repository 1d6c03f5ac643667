use serde::{Deserialize, Serialize};

/// Статус записи клиента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::NoShow => "no_show",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Ожидает",
            BookingStatus::Confirmed => "Подтверждена",
            BookingStatus::InProgress => "В работе",
            BookingStatus::Completed => "Завершена",
            BookingStatus::Cancelled => "Отменена",
            BookingStatus::NoShow => "Неявка",
        }
    }

    /// CSS-модификатор бейджа
    pub fn badge_class(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "badge badge--warning",
            BookingStatus::Confirmed => "badge badge--primary",
            BookingStatus::InProgress => "badge badge--info",
            BookingStatus::Completed => "badge badge--success",
            BookingStatus::Cancelled => "badge badge--neutral",
            BookingStatus::NoShow => "badge badge--error",
        }
    }

    /// Запись занимает место в сетке расписания
    pub fn occupies_schedule(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }

    pub fn all() -> Vec<BookingStatus> {
        vec![
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::InProgress,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
            BookingStatus::NoShow,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for s in BookingStatus::all() {
            assert_eq!(BookingStatus::from_code(s.code()), Some(s));
        }
        assert_eq!(BookingStatus::from_code("unknown"), None);
    }

    #[test]
    fn only_cancelled_frees_the_slot() {
        assert!(!BookingStatus::Cancelled.occupies_schedule());
        assert!(BookingStatus::NoShow.occupies_schedule());
    }
}
