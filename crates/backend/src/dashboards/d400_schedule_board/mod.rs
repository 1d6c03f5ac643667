pub mod hours;
pub mod service;
