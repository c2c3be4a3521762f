//! Parse options

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarType;
use crate::date::DateValue;
use crate::error::{ConfigError, Result};

/// How date fields are parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Calendar assumed for the dates in a field
    pub calendar: CalendarType,
    /// Keep unparseable fields as nonstandard text instead of failing
    pub tolerant: bool,
}

impl ParseOptions {
    pub fn new(calendar: CalendarType) -> Self {
        Self {
            calendar,
            tolerant: false,
        }
    }

    pub fn tolerant(mut self, tolerant: bool) -> Self {
        self.tolerant = tolerant;
        self
    }

    /// Build options from string key/value pairs (`calendar`, `tolerant`).
    ///
    /// Unknown keys are ignored; missing keys keep their defaults.
    pub fn from_map(config: &HashMap<String, String>) -> std::result::Result<Self, ConfigError> {
        let mut options = Self::default();

        if let Some(calendar) = config.get("calendar") {
            options.calendar = calendar.parse()?;
        }
        if let Some(tolerant) = config.get("tolerant") {
            options.tolerant = match tolerant.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => true,
                "false" | "no" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "tolerant".to_string(),
                        value: tolerant.clone(),
                    })
                }
            };
        }

        Ok(options)
    }

    /// Read options from JSON, e.g. `{"calendar": "julian", "tolerant": true}`
    pub fn from_json(json: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse one date field with these options
    pub fn parse(&self, text: &str) -> Result<DateValue> {
        if self.tolerant {
            Ok(DateValue::parse_lenient(text, self.calendar))
        } else {
            DateValue::parse(text, self.calendar)
        }
    }
}
