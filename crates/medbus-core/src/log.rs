//! Structured loggers carried in the `ActionContext`.
//!
//! Mediators write decision records (e.g. the chosen join operator and the
//! full cost table) through whatever logger the caller placed under
//! `keys::LOG`. Without one, nothing is recorded.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(s)
    }
}

/// A logger accepting a message plus a structured payload.
pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str, data: &Value);

    fn trace(&self, message: &str, data: &Value) {
        self.log(LogLevel::Trace, message, data)
    }

    fn debug(&self, message: &str, data: &Value) {
        self.log(LogLevel::Debug, message, data)
    }

    fn info(&self, message: &str, data: &Value) {
        self.log(LogLevel::Info, message, data)
    }

    fn warn(&self, message: &str, data: &Value) {
        self.log(LogLevel::Warn, message, data)
    }

    fn error(&self, message: &str, data: &Value) {
        self.log(LogLevel::Error, message, data)
    }
}

/// Drops every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidLogger;

impl Logger for VoidLogger {
    fn log(&self, _level: LogLevel, _message: &str, _data: &Value) {}
}

/// Forwards records to `tracing` events under the `medbus` target.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

#[cfg(feature = "tracing")]
impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, data: &Value) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "medbus", %data, "{}", message),
            LogLevel::Debug => tracing::debug!(target: "medbus", %data, "{}", message),
            LogLevel::Info => tracing::info!(target: "medbus", %data, "{}", message),
            LogLevel::Warn => tracing::warn!(target: "medbus", %data, "{}", message),
            LogLevel::Error => tracing::error!(target: "medbus", %data, "{}", message),
        }
    }
}
