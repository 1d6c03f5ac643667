use crate::shared::api_utils::{self, SavedId};
use contracts::domain::a001_branch::aggregate::{Branch, BranchDto};

pub async fn fetch_all() -> Result<Vec<Branch>, String> {
    api_utils::get_json("/api/branch").await
}

pub async fn fetch_by_id(id: &str) -> Result<Branch, String> {
    api_utils::get_json(&format!("/api/branch/{}", id)).await
}

pub async fn save(dto: &BranchDto) -> Result<String, String> {
    api_utils::post_json::<_, SavedId>("/api/branch", dto)
        .await
        .map(|r| r.id)
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/branch/{}", id)).await
}

pub async fn insert_test_data() -> Result<(), String> {
    api_utils::post_empty("/api/branch/testdata", &()).await
}
