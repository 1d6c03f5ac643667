pub mod details;
pub mod list;

pub use details::SalonServiceDetails;
pub use list::SalonServiceList;
