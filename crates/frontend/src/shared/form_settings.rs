//! Настройки экранов на backend (`/api/form-settings`): ключ формы → JSON

use crate::shared::api_utils;
use contracts::shared::form_settings::{FormSettings, SaveSettingsRequest, SaveSettingsResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// `None`, если настройки ещё не сохранялись
pub async fn load<T: DeserializeOwned>(form_key: &str) -> Result<Option<T>, String> {
    let stored: Option<FormSettings> =
        api_utils::get_json(&format!("/api/form-settings/{}", form_key)).await?;
    match stored {
        Some(s) => parse(&s.settings_json).map(Some),
        None => Ok(None),
    }
}

pub async fn save<T: Serialize>(form_key: &str, settings: &T) -> Result<(), String> {
    let request = SaveSettingsRequest {
        form_key: form_key.to_string(),
        settings: serde_json::to_value(settings).map_err(|e| format!("Ошибка сериализации: {}", e))?,
    };
    let response: SaveSettingsResponse = api_utils::post_json("/api/form-settings", &request).await?;
    if response.success {
        Ok(())
    } else {
        Err(response.message)
    }
}

fn parse<T: DeserializeOwned>(settings_json: &str) -> Result<T, String> {
    serde_json::from_str(settings_json).map_err(|e| format!("Настройки повреждены: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_booking::filter::BookingFilter;

    #[test]
    fn parses_stored_filter() {
        let f: BookingFilter = parse(r#"{"status":"confirmed","search":"окраш"}"#).unwrap();
        assert_eq!(f.status.as_deref(), Some("confirmed"));
        assert_eq!(f.search.as_deref(), Some("окраш"));
        assert_eq!(f.staff, None);
    }

    #[test]
    fn broken_json_is_an_error() {
        assert!(parse::<BookingFilter>("{").is_err());
    }
}
