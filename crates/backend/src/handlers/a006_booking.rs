use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use contracts::domain::a006_booking::aggregate::{
    Booking, BookingDto, BookingListQuery, StatusChangeRequest,
};
use contracts::domain::a006_booking::filter::BookingFilter;
use serde::Deserialize;
use serde_json::json;

use crate::domain::a006_booking;
use crate::shared::error::{parse_id, ApiError};

/// Параметры выгрузки: период и филиал выборки плюс фильтр журнала
#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    #[serde(flatten)]
    pub period: BookingListQuery,
    #[serde(flatten)]
    pub filter: BookingFilter,
}

/// GET /api/booking?date_from=&date_to=&branch=
pub async fn list(Query(query): Query<BookingListQuery>) -> Result<Json<Vec<Booking>>, ApiError> {
    Ok(Json(a006_booking::service::list(&query).await?))
}

/// GET /api/booking/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Booking>, ApiError> {
    let uuid = parse_id(&id)?;
    match a006_booking::service::get_by_id(uuid).await? {
        Some(v) => Ok(Json(v)),
        None => Err(ApiError::NotFound),
    }
}

/// POST /api/booking
pub async fn upsert(Json(dto): Json<BookingDto>) -> Result<Json<serde_json::Value>, ApiError> {
    let id = match dto.id.clone() {
        Some(id) => {
            parse_id(&id)?;
            a006_booking::service::update(dto).await?;
            id
        }
        None => a006_booking::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({ "id": id })))
}

/// POST /api/booking/:id/status
pub async fn change_status(
    Path(id): Path<String>,
    Json(req): Json<StatusChangeRequest>,
) -> Result<Json<Booking>, ApiError> {
    let uuid = parse_id(&id)?;
    Ok(Json(a006_booking::service::change_status(uuid, req.status).await?))
}

/// DELETE /api/booking/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let uuid = parse_id(&id)?;
    if a006_booking::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound)
    }
}

/// GET /api/booking/export
pub async fn export_csv(Query(query): Query<ExportQuery>) -> Result<Response, ApiError> {
    let csv = a006_booking::service::export_csv(&query.period, &query.filter).await?;
    let file_name = match (query.period.date_from, query.period.date_to) {
        (Some(from), Some(to)) => format!("bookings_{}_{}.csv", from, to),
        (Some(from), None) => format!("bookings_{}.csv", from),
        _ => "bookings.csv".to_string(),
    };
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        csv,
    )
        .into_response())
}

/// POST /api/booking/testdata
pub async fn insert_test_data() -> Result<StatusCode, ApiError> {
    a006_booking::service::insert_test_data().await?;
    Ok(StatusCode::OK)
}
