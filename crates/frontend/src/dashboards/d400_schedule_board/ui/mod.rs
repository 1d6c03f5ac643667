mod dashboard;
mod grid;
mod hours_panel;
mod summary_panel;

pub use dashboard::ScheduleBoardDashboard;
