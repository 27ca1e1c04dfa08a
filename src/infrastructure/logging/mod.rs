//! Logger implementations

mod console;
mod tracing_logger;

pub use console::ConsoleLogger;
pub use tracing_logger::{init_subscriber, TracingLogger};
