use axum::Json;
use contracts::shared::live_changes::ChangeRevisions;

use crate::shared::data::changes;

/// GET /api/changes
pub async fn snapshot() -> Json<ChangeRevisions> {
    Json(changes::snapshot())
}
