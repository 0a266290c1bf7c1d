//! Log level definitions
//!
//! `Done` is a success notice. It is filtered exactly like `Info` but keeps
//! its own tag so output formats can render it differently.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Fatal,
    Error,
    Warn,
    #[default]
    Info,
    Done,
    Debug,
}

impl LogLevel {
    /// All levels, most to least severe.
    pub const fn all() -> [LogLevel; 6] {
        [
            LogLevel::Fatal,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Done,
            LogLevel::Debug,
        ]
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Done => "DONE",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Lowercase tag used in rendered output
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "fatal",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Done => "done",
            LogLevel::Debug => "debug",
        }
    }

    /// Filtering priority. Higher is more severe; `Info` and `Done` share one.
    #[inline]
    pub fn priority(&self) -> u8 {
        match self {
            LogLevel::Fatal => 4,
            LogLevel::Error => 3,
            LogLevel::Warn => 2,
            LogLevel::Info | LogLevel::Done => 1,
            LogLevel::Debug => 0,
        }
    }

    /// Whether an entry at this level is visible under `threshold`.
    #[inline]
    pub fn passes(&self, threshold: LogLevel) -> bool {
        self.priority() >= threshold.priority()
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Fatal => BrightRed,
            LogLevel::Error => Red,
            LogLevel::Warn => Yellow,
            LogLevel::Info => Cyan,
            LogLevel::Done => Green,
            LogLevel::Debug => Blue,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FATAL" => Ok(LogLevel::Fatal),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DONE" | "SUCCESS" => Ok(LogLevel::Done),
            "DEBUG" => Ok(LogLevel::Debug),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
