pub mod clock;
pub mod form_settings;
pub mod live_changes;
pub mod logger;
