//! # GEDCOM date parsing
//!
//! Parses the value of a GEDCOM `DATE` field into a structured, comparable,
//! re-renderable [`DateValue`]:
//!
//! - **date**: lexer, the two date state machines, rendering and ordering
//! - **calendar**: gregorian, julian, hebrew, french republican, future, unknown
//! - **options**: [`ParseOptions`] (calendar, tolerant mode)
//! - **records**: [`DateFieldHandler`] and [`DateCollector`] for record walkers
//! - **error**: [`FormatError`] and friends
//! - **tracing**: subscriber setup for applications
//!
//! ## Usage
//!
//! ```rust
//! use gedcom_date::{parse, DateKind};
//!
//! let value = parse("BET 1 JAN 1970 AND 1 APR 2008").unwrap();
//! assert_eq!(value.kind(), DateKind::Between);
//! assert_eq!(value.second().unwrap().year(), Ok(2008));
//! assert_eq!(value.to_string(), "bet 1 Jan 1970 and 1 Apr 2008");
//! ```

pub mod calendar;
pub mod date;
pub mod error;
pub mod options;
pub mod records;
pub mod tracing;

pub use calendar::{CalendarType, Epoch};
pub use date::{Compliance, DateKind, DatePart, DateValue};
pub use error::{
    ConfigError, DateField, DatePartFault, DateValueFault, FormatError, InvariantError, Result,
};
pub use options::ParseOptions;
pub use records::{DateCollector, DateFieldHandler, RejectedField};

/// Parse a gregorian date field strictly
pub fn parse(text: &str) -> Result<DateValue> {
    DateValue::parse(text, CalendarType::Gregorian)
}

/// Parse a date field with explicit options.
///
/// With `tolerant` set this never fails.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<DateValue> {
    options.parse(text)
}
