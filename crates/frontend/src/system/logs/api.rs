use crate::shared::api_utils;
use contracts::shared::logger::{CreateLogRequest, LogEntry};
use leptos::task::spawn_local;

pub async fn fetch_all() -> Result<Vec<LogEntry>, String> {
    api_utils::get_json("/api/logs").await
}

pub async fn clear_all() -> Result<(), String> {
    api_utils::delete("/api/logs").await
}

/// Событие клиента в журнал backend. Ошибка отправки только пишется в консоль.
pub fn report(category: &str, message: String) {
    let request = CreateLogRequest {
        source: "client".to_string(),
        category: category.to_string(),
        message,
    };
    spawn_local(async move {
        if let Err(e) = api_utils::post_empty("/api/logs", &request).await {
            log::warn!("Failed to send client log: {}", e);
        }
    });
}
