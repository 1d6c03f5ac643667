use crate::shared::api_utils::{self, SavedId};
use contracts::domain::a005_membership::aggregate::{FreezeRequest, Membership, MembershipDto};

pub async fn fetch_all() -> Result<Vec<Membership>, String> {
    api_utils::get_json("/api/membership").await
}

pub async fn fetch_by_id(id: &str) -> Result<Membership, String> {
    api_utils::get_json(&format!("/api/membership/{}", id)).await
}

pub async fn save(dto: &MembershipDto) -> Result<String, String> {
    api_utils::post_json::<_, SavedId>("/api/membership", dto)
        .await
        .map(|r| r.id)
}

pub async fn use_visit(id: &str) -> Result<Membership, String> {
    api_utils::post_json(&format!("/api/membership/{}/use-visit", id), &()).await
}

pub async fn set_frozen(id: &str, frozen: bool) -> Result<Membership, String> {
    api_utils::post_json(
        &format!("/api/membership/{}/freeze", id),
        &FreezeRequest { frozen },
    )
    .await
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/membership/{}", id)).await
}

pub async fn insert_test_data() -> Result<(), String> {
    api_utils::post_empty("/api/membership/testdata", &()).await
}
