//! Console logger
//!
//! Writes `fnpack: <message>` lines to stderr, filtered by verbosity.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{LogLevel, Logger};

pub struct ConsoleLogger {
    verbosity: Verbosity,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleLogger {
    pub fn stderr(verbosity: Verbosity) -> Self {
        Self::with_writer(verbosity, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbosity: Verbosity, writer: W) -> Self {
        Self {
            verbosity,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        match self.verbosity {
            Verbosity::Quiet => level == LogLevel::Error,
            Verbosity::Normal => level >= LogLevel::Info,
            Verbosity::Verbose | Verbosity::Debug => true,
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let prefix = if level == LogLevel::Error { "ERROR: " } else { "" };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "fnpack: {}{}", prefix, message);
            let _ = writer.flush();
        }
    }
}
