use axum::{extract::Path, Json};
use contracts::shared::form_settings::{FormSettings, SaveSettingsRequest, SaveSettingsResponse};
use contracts::shared::live_changes::COLLECTION_SETTINGS;

use crate::shared::data::{changes, form_settings};
use crate::shared::error::ApiError;

/// GET /api/form-settings/:form_key
pub async fn get_settings(Path(form_key): Path<String>) -> Result<Json<Option<FormSettings>>, ApiError> {
    let settings = form_settings::load(&form_key)
        .await?
        .map(|settings_json| FormSettings {
            form_key,
            settings_json,
        });
    Ok(Json(settings))
}

/// POST /api/form-settings
pub async fn save_settings(
    Json(request): Json<SaveSettingsRequest>,
) -> Result<Json<SaveSettingsResponse>, ApiError> {
    let settings_json = serde_json::to_string(&request.settings)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    form_settings::save(&request.form_key, &settings_json).await?;
    changes::notify(COLLECTION_SETTINGS);
    Ok(Json(SaveSettingsResponse {
        success: true,
        message: "Настройки сохранены".to_string(),
    }))
}
