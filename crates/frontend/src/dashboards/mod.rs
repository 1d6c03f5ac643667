pub mod d400_schedule_board;

pub use d400_schedule_board::ui::ScheduleBoardDashboard;
