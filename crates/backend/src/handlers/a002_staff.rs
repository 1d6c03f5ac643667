use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_staff::aggregate::{Staff, StaffDto};
use serde_json::json;

use crate::domain::a002_staff;
use crate::shared::error::{parse_id, ApiError};

/// GET /api/staff
pub async fn list_all() -> Result<Json<Vec<Staff>>, ApiError> {
    Ok(Json(a002_staff::service::list_all().await?))
}

/// GET /api/staff/by-branch/:branch_id
pub async fn list_by_branch(Path(branch_id): Path<String>) -> Result<Json<Vec<Staff>>, ApiError> {
    parse_id(&branch_id)?;
    Ok(Json(a002_staff::service::list_by_branch(&branch_id).await?))
}

/// GET /api/staff/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Staff>, ApiError> {
    let uuid = parse_id(&id)?;
    match a002_staff::service::get_by_id(uuid).await? {
        Some(v) => Ok(Json(v)),
        None => Err(ApiError::NotFound),
    }
}

/// POST /api/staff
pub async fn upsert(Json(dto): Json<StaffDto>) -> Result<Json<serde_json::Value>, ApiError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a002_staff::service::update(dto).await?;
            id
        }
        None => a002_staff::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/staff/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let uuid = parse_id(&id)?;
    if a002_staff::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound)
    }
}

/// POST /api/staff/testdata
pub async fn insert_test_data() -> Result<StatusCode, ApiError> {
    a002_staff::service::insert_test_data().await?;
    Ok(StatusCode::OK)
}
