use super::hour_mask::HourMask;
use super::time_slots::SlotRange;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Параметры запроса сетки. Без даты берётся сегодняшняя.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleBoardQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Настройки сетки, которые UI получает вместе с маской часов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleHoursResponse {
    pub range: SlotRange,
    pub mask: HourMask,
}

/// Массовое изменение маски часов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursRangeRequest {
    pub from_hour: u32,
    pub to_hour: u32,
    pub enabled: bool,
}
