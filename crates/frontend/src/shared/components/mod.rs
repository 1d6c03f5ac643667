pub mod badge;
pub mod error_box;
pub mod page_header;
pub mod table;
