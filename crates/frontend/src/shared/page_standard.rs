//! Категории страниц внутри табов.
//!
//! Корневой элемент каждой страницы получает `id` вида `{entity}--{category}`
//! (например `"a006_booking--list"`) и атрибут `data-page-category`.
//! По id из DOM-инспектора легко найти каталог модуля.

/// Список записей
pub const PAGE_CAT_LIST: &str = "list";

/// Карточка одной записи
pub const PAGE_CAT_DETAIL: &str = "detail";

pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Служебные страницы (журнал, тест уведомлений)
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

/// Формат `{entity}--{category}` с известной категорией
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        assert!(is_valid_page_id("a006_booking--list"));
        assert!(is_valid_page_id("d400_schedule_board--dashboard"));
        assert!(!is_valid_page_id("a006_booking"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a006_booking--wizard"));
    }
}
