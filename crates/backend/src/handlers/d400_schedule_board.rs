use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d400_schedule_board::dto::{
    HoursRangeRequest, ScheduleBoardQuery, ScheduleHoursResponse,
};
use contracts::dashboards::d400_schedule_board::{HourMask, ScheduleBoard};

use crate::dashboards::d400_schedule_board::{hours, service};
use crate::shared::config;
use crate::shared::error::ApiError;

/// GET /api/d400/schedule-board?date=&branch=&staff=&status=&search=
pub async fn get_board(
    Query(query): Query<ScheduleBoardQuery>,
) -> Result<Json<ScheduleBoard>, ApiError> {
    Ok(Json(service::get_board(&query).await?))
}

/// GET /api/d400/hours
pub async fn get_hours() -> Result<Json<ScheduleHoursResponse>, ApiError> {
    let mask = hours::load().await?;
    Ok(Json(ScheduleHoursResponse {
        range: config::schedule_range(),
        mask,
    }))
}

/// PUT /api/d400/hours
pub async fn save_hours(Json(mask): Json<HourMask>) -> Result<StatusCode, ApiError> {
    if let Some(key) = mask.as_map().keys().find(|k| !is_hour_key(k)) {
        return Err(ApiError::BadRequest(format!("Неверный ключ часа: {}", key)));
    }
    hours::save(&mask).await?;
    Ok(StatusCode::OK)
}

/// POST /api/d400/hours/range
pub async fn set_hours_range(
    Json(req): Json<HoursRangeRequest>,
) -> Result<Json<HourMask>, ApiError> {
    if req.from_hour > 24 || req.to_hour > 24 || req.from_hour >= req.to_hour {
        return Err(ApiError::BadRequest(format!(
            "Неверный интервал часов: {}..{}",
            req.from_hour, req.to_hour
        )));
    }
    let mut mask = hours::load().await?;
    mask.set_range(req.from_hour, req.to_hour, req.enabled);
    hours::save(&mask).await?;
    Ok(Json(mask))
}

/// Ключ маски: "00".."23"
fn is_hour_key(key: &str) -> bool {
    key.len() == 2
        && key.bytes().all(|b| b.is_ascii_digit())
        && key.parse::<u32>().map(|h| h < 24).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_keys_are_two_digit_hours() {
        assert!(is_hour_key("00"));
        assert!(is_hour_key("23"));
        assert!(!is_hour_key("24"));
        assert!(!is_hour_key("7"));
        assert!(!is_hour_key("ab"));
        assert!(!is_hour_key("+1"));
        assert!(!is_hour_key(" 9"));
    }
}
