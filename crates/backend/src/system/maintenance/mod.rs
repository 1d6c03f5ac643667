pub mod worker;

pub use worker::MaintenanceWorker;
