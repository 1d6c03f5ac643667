use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_branch::aggregate::{Branch, BranchDto};
use serde_json::json;

use crate::domain::a001_branch;
use crate::shared::error::{parse_id, ApiError};

/// GET /api/branch
pub async fn list_all() -> Result<Json<Vec<Branch>>, ApiError> {
    Ok(Json(a001_branch::service::list_all().await?))
}

/// GET /api/branch/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Branch>, ApiError> {
    let uuid = parse_id(&id)?;
    match a001_branch::service::get_by_id(uuid).await? {
        Some(v) => Ok(Json(v)),
        None => Err(ApiError::NotFound),
    }
}

/// POST /api/branch
pub async fn upsert(Json(dto): Json<BranchDto>) -> Result<Json<serde_json::Value>, ApiError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a001_branch::service::update(dto).await?;
            id
        }
        None => a001_branch::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/branch/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let uuid = parse_id(&id)?;
    if a001_branch::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound)
    }
}

/// POST /api/branch/testdata
pub async fn insert_test_data() -> Result<StatusCode, ApiError> {
    a001_branch::service::insert_test_data().await?;
    Ok(StatusCode::OK)
}
