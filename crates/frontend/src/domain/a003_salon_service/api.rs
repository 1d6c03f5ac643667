use crate::shared::api_utils::{self, SavedId};
use contracts::domain::a003_salon_service::aggregate::{SalonService, SalonServiceDto};

pub async fn fetch_all() -> Result<Vec<SalonService>, String> {
    api_utils::get_json("/api/salon_service").await
}

pub async fn fetch_by_id(id: &str) -> Result<SalonService, String> {
    api_utils::get_json(&format!("/api/salon_service/{}", id)).await
}

pub async fn save(dto: &SalonServiceDto) -> Result<String, String> {
    api_utils::post_json::<_, SavedId>("/api/salon_service", dto)
        .await
        .map(|r| r.id)
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/salon_service/{}", id)).await
}

pub async fn insert_test_data() -> Result<(), String> {
    api_utils::post_empty("/api/salon_service/testdata", &()).await
}
