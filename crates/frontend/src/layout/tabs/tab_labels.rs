//! Заголовки табов. Для агрегатов берутся из `AggregateRoot::list_name`.

use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a002_staff::aggregate::Staff;
use contracts::domain::a003_salon_service::aggregate::SalonService;
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::a005_membership::aggregate::Membership;
use contracts::domain::a006_booking::aggregate::Booking;
use contracts::domain::common::AggregateRoot;

/// Заголовок таба по ключу. Fallback: пустая строка.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_branch" => Branch::list_name(),
        "a002_staff" => Staff::list_name(),
        "a003_salon_service" => SalonService::list_name(),
        "a004_product" => Product::list_name(),
        "a005_membership" => Membership::list_name(),
        "a006_booking" => Booking::list_name(),
        "a007_notification" => "Тест уведомлений",

        "d400_schedule_board" => "Расписание",

        "sys_logs" => "Журнал событий",

        k if k.starts_with("a006_booking_detail_") => Booking::element_name(),
        _ => "",
    }
}

/// Заголовок detail-таба: «<entity> · <identifier>»
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_have_labels() {
        for key in [
            "a001_branch",
            "a002_staff",
            "a003_salon_service",
            "a004_product",
            "a005_membership",
            "a006_booking",
            "a007_notification",
            "d400_schedule_board",
            "sys_logs",
        ] {
            assert!(!tab_label_for_key(key).is_empty(), "{}", key);
        }
        assert_eq!(tab_label_for_key("unknown"), "");
    }

    #[test]
    fn detail_label_joins_parts() {
        assert_eq!(detail_tab_label("Запись", "BK-1"), "Запись · BK-1");
    }
}
