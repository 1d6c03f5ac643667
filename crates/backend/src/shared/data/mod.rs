pub mod changes;
pub mod db;
pub mod form_settings;
