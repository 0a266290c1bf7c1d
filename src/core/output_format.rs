//! Output format configuration for log entries
//!
//! Provides the two encodings a logger can switch between at runtime:
//! - Text: Human-readable format (default)
//! - Json: One machine-readable JSON object per line

use super::field_set::escape_control;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::timestamp::FormatterConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `info  Request processed animal=walrus size=10`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"fields":{"size":10},"level":"info","message":"Request processed","time":"2025-01-08T10:30:45.123Z"}`
    Json,
}

impl OutputFormat {
    /// Encode an entry as a single newline-terminated line
    pub fn encode(&self, entry: &LogEntry, config: &FormatterConfig, colors: bool) -> String {
        match self {
            OutputFormat::Text => Self::encode_text(entry, config, colors),
            OutputFormat::Json => Self::encode_json(entry, config),
        }
    }

    fn encode_text(entry: &LogEntry, config: &FormatterConfig, colors: bool) -> String {
        let mut line = String::with_capacity(entry.message.len() + 32);

        if config.text_timestamps {
            line.push_str(&config.timestamp_format.format(&entry.timestamp));
            line.push(' ');
        }

        line.push_str(&level_tag(entry.level, colors));
        line.push(' ');
        line.push_str(&escape_control(trim_line_ending(&entry.message)));

        if !entry.fields.is_empty() {
            line.push(' ');
            line.push_str(&entry.fields.format_text());
        }

        line.push('\n');
        line
    }

    fn encode_json(entry: &LogEntry, config: &FormatterConfig) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "time".to_string(),
            config.timestamp_format.to_json_value(&entry.timestamp),
        );
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.tag().to_string()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );
        json_obj.insert(
            "fields".to_string(),
            serde_json::Value::Object(entry.fields.to_json_map()),
        );

        match serde_json::to_string(&serde_json::Value::Object(json_obj)) {
            Ok(mut line) => {
                line.push('\n');
                line
            }
            Err(_) => Self::encode_text(entry, config, false),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: '{}'", s)),
        }
    }
}

pub(crate) fn trim_line_ending(message: &str) -> &str {
    message
        .strip_suffix('\n')
        .map(|m| m.strip_suffix('\r').unwrap_or(m))
        .unwrap_or(message)
}

#[cfg(feature = "console")]
fn level_tag(level: LogLevel, colors: bool) -> String {
    use colored::Colorize;

    if !colors {
        return format!("{:5}", level.tag());
    }
    let tag = match level {
        LogLevel::Done => format!("{:5}", "\u{2713}"),
        _ => format!("{:5}", level.tag()),
    };
    tag.color(level.color_code()).bold().to_string()
}

#[cfg(not(feature = "console"))]
fn level_tag(level: LogLevel, _colors: bool) -> String {
    format!("{:5}", level.tag())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldSet;

    fn walrus_entry() -> LogEntry {
        LogEntry::new(LogLevel::Info, "A group of walrus emerges from the ocean").with_fields(
            FieldSet::new().with("animal", "walrus").with("size", 10),
        )
    }

    #[test]
    fn test_text_format() {
        let entry = LogEntry::new(LogLevel::Warn, "Low disk space");
        let result = OutputFormat::Text.encode(&entry, &FormatterConfig::default(), false);

        assert_eq!(result, "warn  Low disk space\n");
    }

    #[test]
    fn test_text_format_with_fields() {
        let result = OutputFormat::Text.encode(&walrus_entry(), &FormatterConfig::default(), false);

        assert!(result.contains("A group of walrus emerges from the ocean"));
        assert!(result.contains("animal=walrus"));
        assert!(result.contains("size=10"));
        assert!(result.ends_with('\n'));
    }

    #[test]
    fn test_text_format_does_not_double_newline() {
        let entry = LogEntry::new(LogLevel::Info, "line\n");
        let result = OutputFormat::Text.encode(&entry, &FormatterConfig::default(), false);
        assert_eq!(result, "info  line\n");
    }

    #[test]
    fn test_text_format_escapes_embedded_newlines() {
        let entry = LogEntry::new(LogLevel::Info, "a\nb\r\n")
            .with_fields(FieldSet::new().with("k", "v"));
        let result = OutputFormat::Text.encode(&entry, &FormatterConfig::default(), false);
        assert_eq!(result, "info  a\\nb k=v\n");
    }

    #[test]
    fn test_text_timestamps() {
        let config = FormatterConfig::new()
            .with_timestamp_format(crate::core::TimestampFormat::Unix)
            .with_text_timestamps(true);
        let entry = LogEntry::new(LogLevel::Debug, "tick");
        let result = OutputFormat::Text.encode(&entry, &config, false);

        let (ts, rest) = result.split_once(' ').unwrap();
        assert!(ts.parse::<i64>().is_ok());
        assert!(rest.starts_with("debug tick"));
    }

    #[test]
    fn test_json_format() {
        let result = OutputFormat::Json.encode(&walrus_entry(), &FormatterConfig::default(), true);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["message"], "A group of walrus emerges from the ocean");
        assert_eq!(parsed["fields"]["animal"], "walrus");
        assert_eq!(parsed["fields"]["size"], 10);
        assert!(parsed["time"].is_string());
    }

    #[test]
    fn test_json_message_kept_verbatim() {
        let entry = LogEntry::new(LogLevel::Info, "x\n");
        let result = OutputFormat::Json.encode(&entry, &FormatterConfig::default(), false);

        assert_eq!(result.matches('\n').count(), 1);
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["message"], "x\n");
    }

    #[test]
    fn test_json_fields_always_present() {
        let entry = LogEntry::new(LogLevel::Done, "ok");
        let result = OutputFormat::Json.encode(&entry, &FormatterConfig::default(), false);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["level"], "done");
        assert!(parsed["fields"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
