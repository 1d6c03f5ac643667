use crate::shared::api_utils::{self, SavedId};
use contracts::domain::a007_notification::aggregate::{Notification, NotificationDto};

pub async fn fetch_all() -> Result<Vec<Notification>, String> {
    api_utils::get_json("/api/notification").await
}

pub async fn create(dto: &NotificationDto) -> Result<String, String> {
    api_utils::post_json::<_, SavedId>("/api/notification", dto)
        .await
        .map(|r| r.id)
}

/// Тестовая отправка. Ошибка канала приходит в `Notification::error`, а не как HTTP-ошибка.
pub async fn send_test(id: &str) -> Result<Notification, String> {
    api_utils::post_json(&format!("/api/notification/{}/send", id), &()).await
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/notification/{}", id)).await
}

pub async fn clear_history() -> Result<(), String> {
    api_utils::delete("/api/notification").await
}
