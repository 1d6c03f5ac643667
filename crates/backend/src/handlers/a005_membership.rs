use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a005_membership::aggregate::{FreezeRequest, Membership, MembershipDto};
use serde_json::json;

use crate::domain::a005_membership;
use crate::shared::error::{parse_id, ApiError};

/// GET /api/membership
pub async fn list_all() -> Result<Json<Vec<Membership>>, ApiError> {
    Ok(Json(a005_membership::service::list_all().await?))
}

/// GET /api/membership/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Membership>, ApiError> {
    let uuid = parse_id(&id)?;
    match a005_membership::service::get_by_id(uuid).await? {
        Some(v) => Ok(Json(v)),
        None => Err(ApiError::NotFound),
    }
}

/// POST /api/membership
pub async fn upsert(Json(dto): Json<MembershipDto>) -> Result<Json<serde_json::Value>, ApiError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a005_membership::service::update(dto).await?;
            id
        }
        None => a005_membership::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({ "id": id })))
}

/// POST /api/membership/:id/use-visit
pub async fn use_visit(Path(id): Path<String>) -> Result<Json<Membership>, ApiError> {
    let uuid = parse_id(&id)?;
    Ok(Json(a005_membership::service::use_visit(uuid).await?))
}

/// POST /api/membership/:id/freeze
pub async fn freeze(
    Path(id): Path<String>,
    Json(req): Json<FreezeRequest>,
) -> Result<Json<Membership>, ApiError> {
    let uuid = parse_id(&id)?;
    Ok(Json(a005_membership::service::set_frozen(uuid, req.frozen).await?))
}

/// DELETE /api/membership/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let uuid = parse_id(&id)?;
    if a005_membership::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound)
    }
}

/// POST /api/membership/testdata
pub async fn insert_test_data() -> Result<StatusCode, ApiError> {
    a005_membership::service::insert_test_data().await?;
    Ok(StatusCode::OK)
}
