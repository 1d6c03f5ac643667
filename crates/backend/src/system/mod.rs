pub mod maintenance;
pub mod middleware;
pub mod tracing;
