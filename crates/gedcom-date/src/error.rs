//! Error types for GEDCOM date parsing

use thiserror::Error;

use crate::calendar::CalendarType;
use crate::date::{DateKind, TokenClass};

/// Errors raised while parsing a date field or reading a field that is absent.
///
/// Every parse failure carries the remainder of the input starting at the
/// offending token, which is what callers show to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The lexer could not classify the input
    #[error("format error at '{remainder}': unrecognized input")]
    Token { remainder: String },

    /// A single calendar date was malformed
    #[error("format error at '{remainder}': {fault}")]
    DatePart {
        fault: DatePartFault,
        remainder: String,
    },

    /// The qualifiers around the date(s) were malformed
    #[error("format error at '{remainder}': {fault}")]
    DateValue {
        fault: DateValueFault,
        remainder: String,
    },

    /// Accessor called for a field the date does not have
    #[error("date has no {0}")]
    MissingField(DateField),

    /// Accessor that does not apply to this kind of date part
    #[error("{0}")]
    NotApplicable(&'static str),
}

impl FormatError {
    /// The unconsumed input at the point of failure, for parse errors.
    pub fn remainder(&self) -> Option<&str> {
        match self {
            FormatError::Token { remainder }
            | FormatError::DatePart { remainder, .. }
            | FormatError::DateValue { remainder, .. } => Some(remainder),
            FormatError::MissingField(_) | FormatError::NotApplicable(_) => None,
        }
    }
}

/// Why a single date part was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DatePartFault {
    #[error("month is not valid for the {0} calendar")]
    InvalidMonth(CalendarType),

    #[error("date already has a month")]
    DuplicateMonth,

    #[error("date already has a year span")]
    DuplicateSlash,

    #[error("year spans are only allowed in the gregorian calendar, not {0}")]
    SpanOutsideGregorian(CalendarType),

    #[error("BC is only allowed in the gregorian calendar, not {0}")]
    EpochOutsideGregorian(CalendarType),

    #[error("day {0} is out of range")]
    DayOutOfRange(u32),

    #[error("unexpected {0}")]
    UnexpectedToken(TokenClass),
}

/// Why the date-field qualifiers were rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateValueFault {
    #[error("'to' must follow a 'from' date")]
    ToWithoutFrom,

    #[error("'and' must follow a 'between' date")]
    AndWithoutBetween,

    #[error("'between' needs two dates")]
    MissingSecondDate,

    #[error("a date phrase may only follow an interpreted date")]
    PhraseWithoutInterpreted,

    #[error("empty date")]
    Empty,

    #[error("unexpected {0}")]
    UnexpectedToken(TokenClass),
}

/// Fields of a concrete date, named in [`FormatError::MissingField`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Day,
    Month,
    Year,
    YearSpan,
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateField::Day => write!(f, "day"),
            DateField::Month => write!(f, "month"),
            DateField::Year => write!(f, "year"),
            DateField::YearSpan => write!(f, "year span"),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown calendar: {0}")]
    UnknownCalendar(String),

    #[error("invalid value for '{key}': {value}")]
    InvalidValue { key: String, value: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Deserialized data that no parse could have produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("{0:?} needs a second date")]
    MissingSecond(DateKind),

    #[error("{0:?} does not take a second date")]
    UnexpectedSecond(DateKind),

    #[error("{0:?} needs a date")]
    MissingFirst(DateKind),

    #[error("status {0:?} does not take a date")]
    StatusWithDate(DateKind),

    #[error("only interpreted dates carry a phrase, not {0:?}")]
    PhraseWithoutInterpreted(DateKind),

    #[error("day {0} is out of range")]
    DayOutOfRange(u8),

    #[error("month {month} is not valid for the {calendar} calendar")]
    MonthOutOfRange { month: u8, calendar: CalendarType },

    #[error("second year {0} has more than two digits")]
    SecondYearOutOfRange(u8),

    #[error("year spans are only allowed in the gregorian calendar, not {0}")]
    SpanOutsideGregorian(CalendarType),

    #[error("BC is only allowed in the gregorian calendar, not {0}")]
    EpochOutsideGregorian(CalendarType),
}

/// Result type for date parsing and field access
pub type Result<T> = std::result::Result<T, FormatError>;
