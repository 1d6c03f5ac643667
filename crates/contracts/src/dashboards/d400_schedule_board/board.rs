//! Построение сетки: какие записи занимают каждую пару (слот, мастер)

use super::hour_mask::HourMask;
use super::summary::DaySummary;
use super::time_slots::{generate_slots, SlotRange, TimeSlot};
use crate::domain::a002_staff::aggregate::{sort_for_board, Staff};
use crate::domain::a006_booking::aggregate::Booking;
use crate::domain::a006_booking::filter::BookingFilter;
use crate::enums::booking_status::BookingStatus;
use crate::shared::clock::{format_hhmm, MINUTES_PER_DAY};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Колонка сетки (мастер)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    pub staff_ref: String,
    pub staff_name: String,
    /// Колонка добавлена по записям: мастер не найден среди активных мастеров филиала
    pub from_bookings_only: bool,
}

/// Запись в ячейке
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardBooking {
    pub id: String,
    pub customer_name: String,
    pub services: String,
    pub status: BookingStatus,
    pub start_label: String,
    pub end_label: String,
    pub duration: i32,
    /// Запись начата накануне и переходит через полночь
    pub from_previous_day: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardCell {
    pub staff_ref: String,
    /// Записи, занимающие слот
    pub bookings: Vec<BoardBooking>,
    /// id записей, которые начинаются в этом слоте
    pub starts_here: Vec<String>,
    /// Ячейка доступна для создания записи
    pub enabled: bool,
    /// Слот занят более чем одной записью
    pub conflict: bool,
}

impl BoardCell {
    pub fn is_free(&self) -> bool {
        self.bookings.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardRow {
    pub slot: TimeSlot,
    pub enabled: bool,
    pub cells: Vec<BoardCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStats {
    /// Записи дня, прошедшие фильтр и размещённые в сетке
    pub placed_bookings: usize,
    /// Записи, у которых нет ни одной видимой ячейки (время вне диапазона или в отключённых часах)
    pub hidden_bookings: usize,
    /// Записи с нераспознанным временем
    pub invalid_time: usize,
    pub occupied_cells: usize,
    pub conflict_cells: usize,
    pub free_cells: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleBoard {
    pub date: NaiveDate,
    pub branch_ref: Option<String>,
    pub columns: Vec<BoardColumn>,
    /// Все строки диапазона, включая отключённые часы
    pub rows: Vec<BoardRow>,
    pub stats: BoardStats,
    pub summary: DaySummary,
}

impl ScheduleBoard {
    /// Строки, которые отображаются: отключённые часы скрыты
    pub fn visible_rows(&self) -> impl Iterator<Item = &BoardRow> {
        self.rows.iter().filter(|r| r.enabled)
    }
}

/// Исходные данные для сетки
pub struct BoardInput<'a> {
    pub date: NaiveDate,
    pub branch_ref: Option<&'a str>,
    pub range: SlotRange,
    pub mask: &'a HourMask,
    pub staff: &'a [Staff],
    pub bookings: &'a [Booking],
    pub filter: &'a BookingFilter,
}

/// Начало записи относительно полуночи даты сетки.
///
/// Запись предыдущего дня сдвигается на −1440 минут, чтобы её хвост после
/// полуночи занял первые слоты. Другие даты не участвуют.
pub fn start_on_board(booking: &Booking, board_date: NaiveDate) -> Option<i32> {
    let start = booking.start_minutes()?;
    if booking.booking_date == board_date {
        Some(start)
    } else if Some(booking.booking_date) == board_date.checked_sub_signed(Duration::days(1)) {
        Some(start - MINUTES_PER_DAY)
    } else {
        None
    }
}

/// Занимает ли запись слот: `slot ∈ [start, start + duration)`
pub fn occupies(booking: &Booking, board_date: NaiveDate, slot_minutes: i32) -> bool {
    match start_on_board(booking, board_date) {
        Some(start) => slot_minutes >= start && slot_minutes < start + booking.effective_duration(),
        None => false,
    }
}

/// Филиал сетки; пустая строка означает "все филиалы"
fn active_branch(branch_ref: Option<&str>) -> Option<&str> {
    branch_ref.map(str::trim).filter(|b| !b.is_empty())
}

fn in_branch(item_branch: &str, branch_ref: Option<&str>) -> bool {
    active_branch(branch_ref).map_or(true, |branch| item_branch == branch)
}

fn to_board_booking(b: &Booking, start: i32) -> BoardBooking {
    let duration = b.effective_duration();
    BoardBooking {
        id: b.to_string_id(),
        customer_name: b.customer_name().to_string(),
        services: b.services_summary(),
        status: b.status,
        start_label: b.booking_time.clone(),
        end_label: format_hhmm(start + duration),
        duration,
        from_previous_day: start < 0,
    }
}

fn build_columns(input: &BoardInput<'_>, candidates: &[(&Booking, i32)]) -> Vec<BoardColumn> {
    let mut staff: Vec<Staff> = input
        .staff
        .iter()
        .filter(|s| {
            !s.base.metadata.is_deleted && s.is_active && in_branch(&s.branch_ref, input.branch_ref)
        })
        .cloned()
        .collect();
    sort_for_board(&mut staff);

    let mut columns: Vec<BoardColumn> = staff
        .iter()
        .map(|s| BoardColumn {
            staff_ref: s.to_string_id(),
            staff_name: s.base.description.clone(),
            from_bookings_only: false,
        })
        .collect();

    // Запись не должна потеряться, если мастер уволен или переведён
    for (b, _) in candidates {
        if !columns.iter().any(|c| c.staff_ref == b.staff_ref) {
            columns.push(BoardColumn {
                staff_ref: b.staff_ref.clone(),
                staff_name: b.staff_name.clone(),
                from_bookings_only: true,
            });
        }
    }
    columns
}

/// Построить сетку на дату
pub fn build_board(input: BoardInput<'_>) -> ScheduleBoard {
    let mut stats = BoardStats::default();

    // Фильтр → филиал → не отменена → дата (с учётом предыдущего дня)
    let mut candidates: Vec<(&Booking, i32)> = Vec::new();
    let mut day_bookings: Vec<&Booking> = Vec::new();
    for b in input.bookings.iter() {
        if !input.filter.matches(b) || !in_branch(&b.branch_ref, input.branch_ref) {
            continue;
        }
        if !b.status.occupies_schedule() {
            continue;
        }
        if b.booking_date == input.date {
            day_bookings.push(b);
        }
        match start_on_board(b, input.date) {
            Some(start) => {
                // Предыдущий день нужен только если запись переходит через полночь
                if start + b.effective_duration() > 0 {
                    candidates.push((b, start));
                }
            }
            None => {
                if b.booking_date == input.date {
                    stats.invalid_time += 1;
                }
            }
        }
    }

    let columns = build_columns(&input, &candidates);
    let slots = generate_slots(input.range);

    let mut visible_ids: HashSet<String> = HashSet::new();
    let rows: Vec<BoardRow> = slots
        .into_iter()
        .map(|slot| {
            let enabled = input.mask.is_enabled(slot.hour());
            let cells = columns
                .iter()
                .map(|col| {
                    let occupying: Vec<&(&Booking, i32)> = candidates
                        .iter()
                        .filter(|(b, start)| {
                            b.staff_ref == col.staff_ref
                                && slot.minutes >= *start
                                && slot.minutes < *start + b.effective_duration()
                        })
                        .collect();
                    let starts_here = occupying
                        .iter()
                        .filter(|(_, start)| *start == slot.minutes)
                        .map(|(b, _)| b.to_string_id())
                        .collect();
                    let bookings: Vec<BoardBooking> = occupying
                        .iter()
                        .map(|(b, start)| to_board_booking(b, *start))
                        .collect();
                    if enabled {
                        visible_ids.extend(bookings.iter().map(|bb| bb.id.clone()));
                    }
                    BoardCell {
                        staff_ref: col.staff_ref.clone(),
                        conflict: bookings.len() > 1,
                        bookings,
                        starts_here,
                        enabled,
                    }
                })
                .collect();
            BoardRow {
                slot,
                enabled,
                cells,
            }
        })
        .collect();

    for row in rows.iter().filter(|r| r.enabled) {
        for cell in &row.cells {
            if cell.is_free() {
                stats.free_cells += 1;
            } else {
                stats.occupied_cells += 1;
            }
            if cell.conflict {
                stats.conflict_cells += 1;
            }
        }
    }
    stats.placed_bookings = candidates.len();
    stats.hidden_bookings = candidates
        .iter()
        .filter(|(b, _)| !visible_ids.contains(&b.to_string_id()))
        .count();

    ScheduleBoard {
        date: input.date,
        branch_ref: active_branch(input.branch_ref).map(str::to_string),
        columns,
        rows,
        stats,
        summary: DaySummary::from_bookings(day_bookings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_staff::aggregate::StaffDto;
    use crate::domain::a006_booking::aggregate::{BookingDto, ServiceLine};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn staff(name: &str, order: i32) -> Staff {
        Staff::new_for_insert(
            format!("ST-{}", name),
            &StaffDto {
                description: name.into(),
                branch_ref: "br-1".into(),
                sort_order: order,
                ..Default::default()
            },
        )
    }

    fn booking(staff: &Staff, date: NaiveDate, time: &str, minutes: i32) -> Booking {
        let dto = BookingDto {
            customer_name: format!("Клиент {}", time),
            services: vec![ServiceLine {
                name: "Стрижка".into(),
                price: 1000.0,
                duration_minutes: minutes,
                ..Default::default()
            }],
            booking_date: date,
            booking_time: time.into(),
            branch_ref: "br-1".into(),
            branch_name: "Центр".into(),
            staff_ref: staff.to_string_id(),
            staff_name: staff.base.description.clone(),
            ..Default::default()
        };
        let mut b = Booking::new_for_insert("BK".into(), &dto);
        b.recalculate();
        b
    }

    fn board(staff: &[Staff], bookings: &[Booking], mask: &HourMask, range: SlotRange) -> ScheduleBoard {
        build_board(BoardInput {
            date: day(10),
            branch_ref: Some("br-1"),
            range,
            mask,
            staff,
            bookings,
            filter: &BookingFilter::default(),
        })
    }

    fn cell<'a>(board: &'a ScheduleBoard, label: &str, col: usize) -> &'a BoardCell {
        let row = board
            .rows
            .iter()
            .find(|r| r.slot.label == label)
            .expect("slot exists");
        &row.cells[col]
    }

    #[test]
    fn half_open_occupancy() {
        let anna = staff("Анна", 1);
        let b = booking(&anna, day(10), "10:00", 45);
        let board = board(&[anna], &[b], &HourMask::default(), SlotRange::new(9, 12).unwrap());

        assert!(cell(&board, "09:45", 0).is_free());
        assert_eq!(cell(&board, "10:00", 0).bookings.len(), 1);
        assert_eq!(cell(&board, "10:00", 0).starts_here.len(), 1);
        assert!(cell(&board, "10:15", 0).starts_here.is_empty());
        assert_eq!(cell(&board, "10:30", 0).bookings.len(), 1);
        assert!(cell(&board, "10:45", 0).is_free());
        assert_eq!(board.stats.occupied_cells, 3);
        assert_eq!(cell(&board, "10:00", 0).bookings[0].end_label, "10:45");
    }

    #[test]
    fn overlapping_bookings_flag_conflict() {
        let anna = staff("Анна", 1);
        let a = booking(&anna, day(10), "10:00", 60);
        let b = booking(&anna, day(10), "10:30", 30);
        let board = board(&[anna], &[a, b], &HourMask::default(), SlotRange::new(10, 12).unwrap());
        assert!(cell(&board, "10:30", 0).conflict);
        assert!(cell(&board, "10:45", 0).conflict);
        assert!(!cell(&board, "10:15", 0).conflict);
        assert_eq!(board.stats.conflict_cells, 2);
    }

    #[test]
    fn previous_day_booking_spills_past_midnight() {
        let anna = staff("Анна", 1);
        let late = booking(&anna, day(9), "23:30", 60);
        let early = booking(&anna, day(9), "10:00", 60);
        let board = board(&[anna], &[late, early], &HourMask::default(), SlotRange::default());

        let first = cell(&board, "00:00", 0);
        assert_eq!(first.bookings.len(), 1);
        assert!(first.bookings[0].from_previous_day);
        assert!(first.starts_here.is_empty());
        assert_eq!(cell(&board, "00:15", 0).bookings.len(), 1);
        assert!(cell(&board, "00:30", 0).is_free());
        assert!(cell(&board, "10:00", 0).is_free());
        assert_eq!(board.stats.placed_bookings, 1);
        // Итоги дня считаются только по записям этой даты
        assert_eq!(board.summary.bookings_count, 0);
    }

    #[test]
    fn cancelled_and_other_branch_are_excluded() {
        let anna = staff("Анна", 1);
        let mut cancelled = booking(&anna, day(10), "10:00", 30);
        cancelled.status = BookingStatus::Cancelled;
        let mut elsewhere = booking(&anna, day(10), "11:00", 30);
        elsewhere.branch_ref = "br-2".into();
        let board = board(&[anna], &[cancelled, elsewhere], &HourMask::default(), SlotRange::new(9, 12).unwrap());
        assert_eq!(board.stats.placed_bookings, 0);
        assert_eq!(board.stats.occupied_cells, 0);
    }

    #[test]
    fn duration_falls_back_to_one_slot() {
        let anna = staff("Анна", 1);
        let mut b = booking(&anna, day(10), "10:00", 0);
        b.total_duration = 0;
        let board = board(&[anna], &[b], &HourMask::default(), SlotRange::new(10, 11).unwrap());
        assert_eq!(cell(&board, "10:00", 0).bookings.len(), 1);
        assert!(cell(&board, "10:15", 0).is_free());
    }

    #[test]
    fn disabled_hours_hide_rows() {
        let anna = staff("Анна", 1);
        let b = booking(&anna, day(10), "09:00", 30);
        let mut mask = HourMask::default();
        mask.set(9, false);
        let board = board(&[anna], &[b], &mask, SlotRange::new(8, 11).unwrap());
        assert_eq!(board.rows.len(), 12);
        assert_eq!(board.visible_rows().count(), 8);
        assert!(!cell(&board, "09:00", 0).enabled);
        assert_eq!(board.stats.hidden_bookings, 1);
        assert_eq!(board.stats.occupied_cells, 0);
    }

    #[test]
    fn columns_sorted_and_unknown_staff_appended() {
        let boris = staff("Борис", 2);
        let anna = staff("Анна", 1);
        let ghost = staff("Вера", 3);
        let b = booking(&ghost, day(10), "10:00", 30);
        let board = board(&[boris, anna], &[b], &HourMask::default(), SlotRange::new(10, 11).unwrap());
        let names: Vec<&str> = board.columns.iter().map(|c| c.staff_name.as_str()).collect();
        assert_eq!(names, ["Анна", "Борис", "Вера"]);
        assert!(board.columns[2].from_bookings_only);
        assert_eq!(cell(&board, "10:00", 2).bookings.len(), 1);
    }

    #[test]
    fn filter_is_applied_before_placement() {
        let anna = staff("Анна", 1);
        let a = booking(&anna, day(10), "10:00", 30);
        let mut b = booking(&anna, day(10), "11:00", 30);
        b.base.description = "Ирина".into();
        let filter = BookingFilter {
            customer: Some("ирина".into()),
            ..Default::default()
        };
        let board = build_board(BoardInput {
            date: day(10),
            branch_ref: None,
            range: SlotRange::new(10, 12).unwrap(),
            mask: &HourMask::default(),
            staff: &[anna],
            bookings: &[a, b],
            filter: &filter,
        });
        assert!(cell(&board, "10:00", 0).is_free());
        assert_eq!(cell(&board, "11:00", 0).bookings.len(), 1);
        assert_eq!(board.summary.bookings_count, 1);
    }

    #[test]
    fn blank_branch_means_all_and_padding_is_trimmed() {
        assert_eq!(active_branch(None), None);
        assert_eq!(active_branch(Some("   ")), None);
        assert_eq!(active_branch(Some(" br-1 ")), Some("br-1"));
        assert!(in_branch("br-2", Some("")));
        assert!(!in_branch("br-2", Some("br-1")));

        let anna = staff("Анна", 1);
        let bookings = vec![booking(&anna, day(10), "10:00", 60)];
        let mask = HourMask::default();
        let b = build_board(BoardInput {
            date: day(10),
            branch_ref: Some(" br-1 "),
            range: SlotRange::default(),
            mask: &mask,
            staff: std::slice::from_ref(&anna),
            bookings: &bookings,
            filter: &BookingFilter::default(),
        });
        assert_eq!(b.branch_ref.as_deref(), Some("br-1"));
        assert_eq!(b.columns.len(), 1);
        assert_eq!(cell(&b, "10:15", 0).bookings.len(), 1);
    }

    #[test]
    fn long_booking_counted_visible_once() {
        let anna = staff("Анна", 1);
        let bookings = vec![
            booking(&anna, day(10), "10:00", 180),
            booking(&anna, day(10), "20:00", 30),
        ];
        let mut mask = HourMask::default();
        mask.set(20, false);
        let b = board(std::slice::from_ref(&anna), &bookings, &mask, SlotRange::default());
        assert_eq!(b.stats.placed_bookings, 2);
        assert_eq!(b.stats.hidden_bookings, 1);
    }

    #[test]
    fn occupies_matches_direct_check() {
        let anna = staff("Анна", 1);
        let b = booking(&anna, day(10), "12:00", 30);
        assert!(occupies(&b, day(10), 12 * 60 + 15));
        assert!(!occupies(&b, day(10), 12 * 60 + 30));
        assert!(!occupies(&b, day(11), 12 * 60));
    }
}
