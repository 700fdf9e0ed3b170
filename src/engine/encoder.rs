//! Record encoders
//!
//! Two encodings are supported:
//! - Json: one machine-readable JSON object per line
//! - Console: human-readable, tab-separated columns followed by the fields as JSON

use crate::core::{LogLevel, Record, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Prepended to a field key that would overwrite one of the record's own keys
pub const COLLIDING_FIELD_PREFIX: &str = "fields.";

/// Output encoding for records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Example: `{"caller":"src/main.rs:10","level":"info","msg":"Request processed","ts":1736332245.123}`
    #[default]
    Json,

    /// Example: `2025-01-08T10:30:45.123Z	INFO	src/main.rs:10	Request processed	{"status":200}`
    Console,
}

/// How a level is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelEncoding {
    /// `info`
    #[default]
    Lowercase,
    /// `INFO`
    Capital,
    /// `INFO` wrapped in ANSI color codes
    CapitalColor,
}

impl LevelEncoding {
    pub fn encode(&self, level: LogLevel) -> String {
        match self {
            LevelEncoding::Lowercase => level.as_lowercase().to_string(),
            LevelEncoding::Capital => level.to_str().to_string(),
            LevelEncoding::CapitalColor => level
                .to_str()
                .color(level.color_code())
                .to_string(),
        }
    }
}

/// How a timestamp is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeEncoding {
    /// `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,
    /// `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,
    /// `1736332245.123` (floating point seconds)
    EpochSeconds,
    /// `1736332245123`
    EpochMillis,
}

impl TimeEncoding {
    pub fn to_json_value(&self, timestamp: &DateTime<Utc>) -> serde_json::Value {
        match self {
            TimeEncoding::Iso8601 | TimeEncoding::Rfc3339 => {
                serde_json::Value::String(self.format(timestamp))
            }
            TimeEncoding::EpochSeconds => {
                let secs = timestamp.timestamp_millis() as f64 / 1000.0;
                serde_json::Number::from_f64(secs)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null)
            }
            TimeEncoding::EpochMillis => {
                serde_json::Value::Number(timestamp.timestamp_millis().into())
            }
        }
    }

    pub fn format(&self, timestamp: &DateTime<Utc>) -> String {
        match self {
            TimeEncoding::Iso8601 => timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimeEncoding::Rfc3339 => timestamp.to_rfc3339(),
            TimeEncoding::EpochSeconds => {
                format!("{:.3}", timestamp.timestamp_millis() as f64 / 1000.0)
            }
            TimeEncoding::EpochMillis => timestamp.timestamp_millis().to_string(),
        }
    }
}

/// Keys and renderers used by the encoders. An empty key omits that element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub message_key: String,
    pub level_key: String,
    pub time_key: String,
    pub name_key: String,
    pub caller_key: String,
    pub stacktrace_key: String,
    pub level_encoding: LevelEncoding,
    pub time_encoding: TimeEncoding,
}

impl EncoderConfig {
    /// Keys suited to log aggregation: `ts`, `level`, `logger`, `caller`, `msg`
    pub fn production() -> Self {
        Self {
            message_key: "msg".to_string(),
            level_key: "level".to_string(),
            time_key: "ts".to_string(),
            name_key: "logger".to_string(),
            caller_key: "caller".to_string(),
            stacktrace_key: "stacktrace".to_string(),
            level_encoding: LevelEncoding::Lowercase,
            time_encoding: TimeEncoding::EpochSeconds,
        }
    }

    /// Short keys and readable timestamps for local development
    pub fn development() -> Self {
        Self {
            message_key: "M".to_string(),
            level_key: "L".to_string(),
            time_key: "T".to_string(),
            name_key: "N".to_string(),
            caller_key: "C".to_string(),
            stacktrace_key: "S".to_string(),
            level_encoding: LevelEncoding::Capital,
            time_encoding: TimeEncoding::Iso8601,
        }
    }

    /// Non-empty keys the encoder writes for the record itself
    pub fn reserved_keys(&self) -> Vec<&str> {
        [
            &self.time_key,
            &self.level_key,
            &self.name_key,
            &self.caller_key,
            &self.message_key,
            &self.stacktrace_key,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|key| !key.is_empty())
        .collect()
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::production()
    }
}

impl Encoding {
    /// Encode a record as a single line (stack traces in console output
    /// continue on following lines).
    pub fn encode(&self, config: &EncoderConfig, record: &Record) -> Result<String> {
        match self {
            Encoding::Json => Self::encode_json(config, record),
            Encoding::Console => Self::encode_console(config, record),
        }
    }

    fn encode_json(config: &EncoderConfig, record: &Record) -> Result<String> {
        let mut json_obj = serde_json::Map::new();

        if !config.time_key.is_empty() {
            json_obj.insert(
                config.time_key.clone(),
                config.time_encoding.to_json_value(&record.timestamp),
            );
        }
        if !config.level_key.is_empty() {
            json_obj.insert(
                config.level_key.clone(),
                serde_json::Value::String(config.level_encoding.encode(record.level)),
            );
        }
        if let (false, Some(name)) = (config.name_key.is_empty(), &record.logger_name) {
            json_obj.insert(config.name_key.clone(), serde_json::Value::String(name.clone()));
        }
        if let (false, Some(caller)) = (config.caller_key.is_empty(), &record.caller) {
            json_obj.insert(
                config.caller_key.clone(),
                serde_json::Value::String(caller.to_string()),
            );
        }
        if !config.message_key.is_empty() {
            json_obj.insert(
                config.message_key.clone(),
                serde_json::Value::String(record.message.clone()),
            );
        }

        // Record keys win; a colliding field is kept under a prefixed key
        let reserved = config.reserved_keys();
        for field in &record.fields {
            let key = if reserved.contains(&field.key.as_str()) {
                format!("{}{}", COLLIDING_FIELD_PREFIX, field.key)
            } else {
                field.key.clone()
            };
            json_obj.insert(key, field.value.to_json_value());
        }

        if let (false, Some(stack)) = (config.stacktrace_key.is_empty(), &record.stacktrace) {
            json_obj.insert(
                config.stacktrace_key.clone(),
                serde_json::Value::String(stack.clone()),
            );
        }

        Ok(serde_json::to_string(&serde_json::Value::Object(json_obj))?)
    }

    fn encode_console(config: &EncoderConfig, record: &Record) -> Result<String> {
        let mut columns: Vec<String> = Vec::with_capacity(6);

        if !config.time_key.is_empty() {
            columns.push(config.time_encoding.format(&record.timestamp));
        }
        if !config.level_key.is_empty() {
            columns.push(config.level_encoding.encode(record.level));
        }
        if let (false, Some(name)) = (config.name_key.is_empty(), &record.logger_name) {
            columns.push(sanitize_message(name));
        }
        if let (false, Some(caller)) = (config.caller_key.is_empty(), &record.caller) {
            columns.push(caller.to_string());
        }
        if !config.message_key.is_empty() {
            columns.push(sanitize_message(&record.message));
        }

        if !record.fields.is_empty() {
            let mut fields = serde_json::Map::new();
            for field in &record.fields {
                fields.insert(field.key.clone(), field.value.to_json_value());
            }
            columns.push(serde_json::to_string(&serde_json::Value::Object(fields))?);
        }

        let mut line = columns.join("\t");
        if let (false, Some(stack)) = (config.stacktrace_key.is_empty(), &record.stacktrace) {
            line.push('\n');
            line.push_str(stack.trim_end());
        }
        Ok(line)
    }
}

/// Escape control characters so a message cannot forge extra console lines
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
