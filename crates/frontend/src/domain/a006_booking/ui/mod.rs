pub mod details;
pub mod list;

pub use details::BookingDetails;
pub use list::BookingList;
