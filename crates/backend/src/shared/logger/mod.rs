pub mod repository;

use repository::log_event_internal;

pub const CATEGORY_STARTUP: &str = "startup";
pub const CATEGORY_BOOKING: &str = "booking";
pub const CATEGORY_MEMBERSHIP: &str = "membership";
pub const CATEGORY_PRODUCT: &str = "product";
pub const CATEGORY_NOTIFICATION: &str = "notification";
pub const CATEGORY_MAINTENANCE: &str = "maintenance";

/// Запись события сервера в журнал `system_log` без ожидания
///
/// # Примеры
/// ```ignore
/// logger::log(CATEGORY_BOOKING, "BK-0001: статус Ожидает → Подтверждена");
/// ```
pub fn log(category: &str, message: &str) {
    log_event_internal("server", category, message);
}
