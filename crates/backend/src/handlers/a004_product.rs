use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a004_product::aggregate::{Product, ProductDto, StockAdjustRequest};
use serde_json::json;

use crate::domain::a004_product;
use crate::shared::error::{parse_id, ApiError};

/// GET /api/product
pub async fn list_all() -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(a004_product::service::list_all().await?))
}

/// GET /api/product/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Product>, ApiError> {
    let uuid = parse_id(&id)?;
    match a004_product::service::get_by_id(uuid).await? {
        Some(v) => Ok(Json(v)),
        None => Err(ApiError::NotFound),
    }
}

/// POST /api/product
pub async fn upsert(Json(dto): Json<ProductDto>) -> Result<Json<serde_json::Value>, ApiError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a004_product::service::update(dto).await?;
            id
        }
        None => a004_product::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({ "id": id })))
}

/// POST /api/product/:id/stock
pub async fn adjust_stock(
    Path(id): Path<String>,
    Json(req): Json<StockAdjustRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let uuid = parse_id(&id)?;
    let stock_qty = a004_product::service::adjust_stock(uuid, req.delta).await?;
    Ok(Json(json!({ "id": id, "stock_qty": stock_qty })))
}

/// DELETE /api/product/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let uuid = parse_id(&id)?;
    if a004_product::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound)
    }
}

/// POST /api/product/testdata
pub async fn insert_test_data() -> Result<StatusCode, ApiError> {
    a004_product::service::insert_test_data().await?;
    Ok(StatusCode::OK)
}
