use axum::{http::StatusCode, Json};
use contracts::shared::logger::{CreateLogRequest, LogEntry};

use crate::shared::error::ApiError;
use crate::shared::logger;

/// GET /api/logs
pub async fn list_all() -> Result<Json<Vec<LogEntry>>, ApiError> {
    Ok(Json(logger::repository::get_all_logs().await?))
}

/// POST /api/logs
pub async fn create(Json(req): Json<CreateLogRequest>) -> Result<StatusCode, ApiError> {
    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Пустое сообщение".into()));
    }
    logger::repository::log_event(&req.source, &req.category, &req.message).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/logs
pub async fn clear_all() -> Result<StatusCode, ApiError> {
    logger::repository::clear_all_logs().await?;
    Ok(StatusCode::OK)
}
