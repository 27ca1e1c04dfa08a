//! Logger port
//!
//! Core packaging code reports progress and failures through this single
//! capability. Concrete loggers (console, tracing) live in infrastructure
//! and are selected once when the application is wired.

/// Severity of a log message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Detail only shown with `-v`
    Verbose,
    /// Normal progress notices
    Info,
    /// Failures surfaced to the user
    Error,
}

/// Trait for receiving log messages
///
/// Implementations:
/// - `ConsoleLogger` - plain stderr lines filtered by verbosity
/// - `TracingLogger` - structured events through `tracing`
/// - `NoopLogger` - silent operation
pub trait Logger: Send + Sync {
    /// Handle a log message
    fn log(&self, level: LogLevel, message: &str);

    fn verbose(&self, message: &str) {
        self.log(LogLevel::Verbose, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// No-op logger for silent operation
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}
}
