pub mod api_utils;
pub mod browser;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod form_settings;
pub mod icons;
pub mod list_utils;
pub mod live_changes;
pub mod page_frame;
pub mod page_standard;
