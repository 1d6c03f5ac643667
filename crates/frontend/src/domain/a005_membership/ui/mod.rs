pub mod details;
pub mod list;

pub use details::MembershipDetails;
pub use list::MembershipList;
