use crate::shared::api_utils;
use contracts::dashboards::d400_schedule_board::dto::{
    HoursRangeRequest, ScheduleBoardQuery, ScheduleHoursResponse,
};
use contracts::dashboards::d400_schedule_board::{HourMask, ScheduleBoard};

const API_BASE: &str = "/api/d400";

/// Сетка расписания на дату с фильтрами
pub async fn get_board(query: &ScheduleBoardQuery) -> Result<ScheduleBoard, String> {
    api_utils::get_json_with_query(&format!("{}/schedule-board", API_BASE), query).await
}

/// Диапазон сетки и маска рабочих часов
pub async fn get_hours() -> Result<ScheduleHoursResponse, String> {
    api_utils::get_json(&format!("{}/hours", API_BASE)).await
}

pub async fn save_hours(mask: &HourMask) -> Result<(), String> {
    api_utils::put_json(&format!("{}/hours", API_BASE), mask).await
}

/// Включить или выключить часы `[from_hour, to_hour)`; возвращает новую маску
pub async fn set_hours_range(from_hour: u32, to_hour: u32, enabled: bool) -> Result<HourMask, String> {
    api_utils::post_json(
        &format!("{}/hours/range", API_BASE),
        &HoursRangeRequest {
            from_hour,
            to_hour,
            enabled,
        },
    )
    .await
}
