use chrono::{Duration, Local, NaiveDate};
use contracts::dashboards::d400_schedule_board::dto::ScheduleBoardQuery;
use contracts::dashboards::d400_schedule_board::{build_board, BoardInput, ScheduleBoard};
use contracts::domain::a006_booking::filter::BookingFilter;

use super::hours;
use crate::domain::{a002_staff, a006_booking};
use crate::shared::config;

/// Сетка на дату. Загружаются записи за дату и предыдущий день:
/// поздние записи накануне могут заходить за полночь.
pub async fn get_board(query: &ScheduleBoardQuery) -> anyhow::Result<ScheduleBoard> {
    let date: NaiveDate = query.date.unwrap_or_else(|| Local::now().date_naive());
    let branch = query
        .branch
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty());

    let bookings =
        a006_booking::repository::list(Some(date - Duration::days(1)), Some(date), branch).await?;
    let staff = match branch {
        Some(b) => a002_staff::repository::list_by_branch(b).await?,
        None => a002_staff::repository::list_all().await?,
    };
    let mask = hours::load().await?;
    let filter = BookingFilter {
        staff: query.staff.clone(),
        status: query.status.clone(),
        search: query.search.clone(),
        ..Default::default()
    };

    let board = build_board(BoardInput {
        date,
        branch_ref: branch,
        range: config::schedule_range(),
        mask: &mask,
        staff: &staff,
        bookings: &bookings,
        filter: &filter,
    });
    tracing::debug!(
        "Schedule board {} branch {:?}: {} bookings, {} conflicts",
        date,
        branch,
        board.stats.placed_bookings,
        board.stats.conflict_cells
    );
    Ok(board)
}
