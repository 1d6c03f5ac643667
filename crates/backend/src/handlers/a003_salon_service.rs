use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a003_salon_service::aggregate::{SalonService, SalonServiceDto};
use serde_json::json;

use crate::domain::a003_salon_service;
use crate::shared::error::{parse_id, ApiError};

/// GET /api/salon_service
pub async fn list_all() -> Result<Json<Vec<SalonService>>, ApiError> {
    Ok(Json(a003_salon_service::service::list_all().await?))
}

/// GET /api/salon_service/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<SalonService>, ApiError> {
    let uuid = parse_id(&id)?;
    match a003_salon_service::service::get_by_id(uuid).await? {
        Some(v) => Ok(Json(v)),
        None => Err(ApiError::NotFound),
    }
}

/// POST /api/salon_service
pub async fn upsert(Json(dto): Json<SalonServiceDto>) -> Result<Json<serde_json::Value>, ApiError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a003_salon_service::service::update(dto).await?;
            id
        }
        None => a003_salon_service::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/salon_service/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let uuid = parse_id(&id)?;
    if a003_salon_service::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound)
    }
}

/// POST /api/salon_service/testdata
pub async fn insert_test_data() -> Result<StatusCode, ApiError> {
    a003_salon_service::service::insert_test_data().await?;
    Ok(StatusCode::OK)
}
