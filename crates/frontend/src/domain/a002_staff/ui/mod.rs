pub mod details;
pub mod list;

pub use details::StaffDetails;
pub use list::StaffList;
