use crate::shared::api_utils::{self, SavedId};
use contracts::domain::a006_booking::aggregate::{
    Booking, BookingDto, BookingListQuery, StatusChangeRequest,
};
use contracts::domain::a006_booking::filter::BookingFilter;
use contracts::enums::booking_status::BookingStatus;
use serde::Serialize;

/// Query выгрузки: период и филиал выборки плюс фильтр журнала
#[derive(Serialize)]
struct ExportParams<'a> {
    #[serde(flatten)]
    period: &'a BookingListQuery,
    #[serde(flatten)]
    filter: &'a BookingFilter,
}

pub async fn fetch_list(query: &BookingListQuery) -> Result<Vec<Booking>, String> {
    api_utils::get_json_with_query("/api/booking", query).await
}

pub async fn fetch_by_id(id: &str) -> Result<Booking, String> {
    api_utils::get_json(&format!("/api/booking/{}", id)).await
}

pub async fn save(dto: &BookingDto) -> Result<String, String> {
    api_utils::post_json::<_, SavedId>("/api/booking", dto)
        .await
        .map(|r| r.id)
}

pub async fn change_status(id: &str, status: BookingStatus) -> Result<Booking, String> {
    api_utils::post_json(
        &format!("/api/booking/{}/status", id),
        &StatusChangeRequest { status },
    )
    .await
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/booking/{}", id)).await
}

/// CSV-текст журнала по тем же условиям, что и на экране
pub async fn export_csv(period: &BookingListQuery, filter: &BookingFilter) -> Result<String, String> {
    let path = api_utils::with_query("/api/booking/export", &ExportParams { period, filter })?;
    api_utils::get_text(&path).await
}

pub async fn insert_test_data() -> Result<(), String> {
    api_utils::post_empty("/api/booking/testdata", &()).await
}
