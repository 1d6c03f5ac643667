use crate::shared::api_utils::{self, SavedId};
use contracts::domain::a004_product::aggregate::{Product, ProductDto, StockAdjustRequest};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StockResponse {
    stock_qty: i32,
}

pub async fn fetch_all() -> Result<Vec<Product>, String> {
    api_utils::get_json("/api/product").await
}

pub async fn fetch_by_id(id: &str) -> Result<Product, String> {
    api_utils::get_json(&format!("/api/product/{}", id)).await
}

pub async fn save(dto: &ProductDto) -> Result<String, String> {
    api_utils::post_json::<_, SavedId>("/api/product", dto)
        .await
        .map(|r| r.id)
}

/// Приход (delta > 0) или списание; возвращает новый остаток
pub async fn adjust_stock(id: &str, delta: i32) -> Result<i32, String> {
    api_utils::post_json::<_, StockResponse>(
        &format!("/api/product/{}/stock", id),
        &StockAdjustRequest { delta },
    )
    .await
    .map(|r| r.stock_qty)
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/product/{}", id)).await
}

pub async fn insert_test_data() -> Result<(), String> {
    api_utils::post_empty("/api/product/testdata", &()).await
}
