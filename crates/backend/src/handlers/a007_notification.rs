use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a007_notification::aggregate::{Notification, NotificationDto};
use serde_json::json;

use crate::domain::a007_notification;
use crate::shared::error::{parse_id, ApiError};

/// GET /api/notification
pub async fn list_all() -> Result<Json<Vec<Notification>>, ApiError> {
    Ok(Json(a007_notification::service::list_all().await?))
}

/// GET /api/notification/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Notification>, ApiError> {
    let uuid = parse_id(&id)?;
    match a007_notification::service::get_by_id(uuid).await? {
        Some(v) => Ok(Json(v)),
        None => Err(ApiError::NotFound),
    }
}

/// POST /api/notification
pub async fn create(Json(dto): Json<NotificationDto>) -> Result<Json<serde_json::Value>, ApiError> {
    let id = a007_notification::service::create(dto).await?;
    Ok(Json(json!({ "id": id.to_string() })))
}

/// POST /api/notification/:id/send
pub async fn send_test(Path(id): Path<String>) -> Result<Json<Notification>, ApiError> {
    let uuid = parse_id(&id)?;
    Ok(Json(a007_notification::service::send_test(uuid).await?))
}

/// DELETE /api/notification/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let uuid = parse_id(&id)?;
    if a007_notification::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound)
    }
}

/// DELETE /api/notification
pub async fn clear_history() -> Result<Json<serde_json::Value>, ApiError> {
    let removed = a007_notification::service::clear_history().await?;
    Ok(Json(json!({ "removed": removed })))
}
