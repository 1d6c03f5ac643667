//! Маска рабочих часов сетки, документ настроек `schedule_hours`

use contracts::dashboards::d400_schedule_board::HourMask;
use contracts::shared::form_settings::SCHEDULE_HOURS_KEY;
use contracts::shared::live_changes::COLLECTION_SETTINGS;

use crate::shared::data::{changes, form_settings};

/// Разобрать сохранённую маску. Повреждённый документ означает "все часы включены".
pub fn parse_mask(json: Option<&str>) -> HourMask {
    match json {
        Some(json) => serde_json::from_str(json).unwrap_or_else(|e| {
            tracing::warn!("{}: cannot parse hour mask: {}", SCHEDULE_HOURS_KEY, e);
            HourMask::default()
        }),
        None => HourMask::default(),
    }
}

pub async fn load() -> anyhow::Result<HourMask> {
    let json = form_settings::load(SCHEDULE_HOURS_KEY).await?;
    Ok(parse_mask(json.as_deref()))
}

pub async fn save(mask: &HourMask) -> anyhow::Result<()> {
    let json = serde_json::to_string(mask)?;
    form_settings::save(SCHEDULE_HOURS_KEY, &json).await?;
    changes::notify(COLLECTION_SETTINGS);
    tracing::info!("Schedule hours saved: enabled {:?}", mask.enabled_hours());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_broken_document_enables_all_hours() {
        assert_eq!(parse_mask(None).enabled_hours().len(), 24);
        assert_eq!(parse_mask(Some("[1,2]")).enabled_hours().len(), 24);
    }

    #[test]
    fn stored_document_is_applied() {
        let mask = parse_mask(Some(r#"{"00":false,"01":false,"23":false}"#));
        assert_eq!(mask.enabled_hours().len(), 21);
        assert!(!mask.is_enabled(23));
    }
}
