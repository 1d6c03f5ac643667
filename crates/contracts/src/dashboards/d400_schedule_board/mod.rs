//! Сетка расписания: слоты × мастера, маска рабочих часов, итоги дня

pub mod board;
pub mod dto;
pub mod hour_mask;
pub mod summary;
pub mod time_slots;

pub use board::{build_board, BoardBooking, BoardCell, BoardColumn, BoardInput, BoardRow, BoardStats, ScheduleBoard};
pub use hour_mask::HourMask;
pub use summary::{DaySummary, MethodTotal};
pub use time_slots::{generate_slots, SlotRange, TimeSlot, SLOT_MINUTES};
