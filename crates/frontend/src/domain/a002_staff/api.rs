use crate::shared::api_utils::{self, SavedId};
use contracts::domain::a002_staff::aggregate::{Staff, StaffDto};

pub async fn fetch_all() -> Result<Vec<Staff>, String> {
    api_utils::get_json("/api/staff").await
}

pub async fn fetch_by_branch(branch_id: &str) -> Result<Vec<Staff>, String> {
    api_utils::get_json(&format!("/api/staff/by-branch/{}", branch_id)).await
}

pub async fn fetch_by_id(id: &str) -> Result<Staff, String> {
    api_utils::get_json(&format!("/api/staff/{}", id)).await
}

pub async fn save(dto: &StaffDto) -> Result<String, String> {
    api_utils::post_json::<_, SavedId>("/api/staff", dto)
        .await
        .map(|r| r.id)
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/staff/{}", id)).await
}

/// Мастера по каждому филиалу без персонала
pub async fn insert_test_data() -> Result<(), String> {
    api_utils::post_empty("/api/staff/testdata", &()).await
}
