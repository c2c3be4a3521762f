//! Calendar systems and epochs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Calendar a date part is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarType {
    #[default]
    Gregorian,
    Julian,
    Hebrew,
    /// French Republican
    French,
    Future,
    Unknown,
}

impl CalendarType {
    /// Number of month names the calendar accepts (0 when it has none)
    pub fn month_count(self) -> u8 {
        match self {
            CalendarType::Gregorian | CalendarType::Julian => 12,
            CalendarType::Hebrew | CalendarType::French => 13,
            CalendarType::Future | CalendarType::Unknown => 0,
        }
    }

    /// Year spans and BC only exist in the gregorian calendar
    pub fn is_gregorian(self) -> bool {
        self == CalendarType::Gregorian
    }

    /// The GEDCOM calendar escape for this calendar
    pub fn escape(self) -> &'static str {
        match self {
            CalendarType::Gregorian => "@#DGREGORIAN@",
            CalendarType::Julian => "@#DJULIAN@",
            CalendarType::Hebrew => "@#DHEBREW@",
            CalendarType::French => "@#DFRENCH R@",
            CalendarType::Future => "@#DFUTURE@",
            CalendarType::Unknown => "@#DUNKNOWN@",
        }
    }
}

impl fmt::Display for CalendarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarType::Gregorian => write!(f, "gregorian"),
            CalendarType::Julian => write!(f, "julian"),
            CalendarType::Hebrew => write!(f, "hebrew"),
            CalendarType::French => write!(f, "french"),
            CalendarType::Future => write!(f, "future"),
            CalendarType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Accepts plain names ("hebrew") and GEDCOM escapes ("@#DHEBREW@")
impl FromStr for CalendarType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed
            .strip_prefix("@#D")
            .and_then(|rest| rest.strip_suffix('@'))
            .unwrap_or(trimmed);

        match name.to_ascii_lowercase().as_str() {
            "gregorian" => Ok(CalendarType::Gregorian),
            "julian" => Ok(CalendarType::Julian),
            "hebrew" => Ok(CalendarType::Hebrew),
            "french" | "french r" => Ok(CalendarType::French),
            "future" => Ok(CalendarType::Future),
            "unknown" => Ok(CalendarType::Unknown),
            _ => Err(ConfigError::UnknownCalendar(s.to_string())),
        }
    }
}

/// AD/BC marker of a gregorian date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Epoch {
    #[default]
    #[serde(rename = "AD")]
    Ad,
    #[serde(rename = "BC")]
    Bc,
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Epoch::Ad => write!(f, "AD"),
            Epoch::Bc => write!(f, "BC"),
        }
    }
}
