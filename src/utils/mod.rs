pub mod constants;
pub mod template;
pub mod tracing;
