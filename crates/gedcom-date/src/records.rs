//! Receiving date fields from a record walker
//!
//! A GEDCOM reader hands each raw `DATE` line value to a [`DateFieldHandler`].
//! [`DateCollector`] is the stock handler: it parses every field, keeps the
//! results, and answers the usual queries (chronological listing, anniversaries
//! in a month or on a day).

use tracing::warn;

use crate::date::{DatePart, DateValue};
use crate::error::{FormatError, Result};
use crate::options::ParseOptions;

/// Callback invoked once per date field found in a record file
pub trait DateFieldHandler {
    fn on_date_field(&mut self, raw: &str);
}

impl<F> DateFieldHandler for F
where
    F: FnMut(&str),
{
    fn on_date_field(&mut self, raw: &str) {
        self(raw)
    }
}

/// A date field that failed to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedField {
    pub raw: String,
    pub error: FormatError,
}

/// Parses and keeps every date field it is given
#[derive(Debug, Clone, Default)]
pub struct DateCollector {
    options: ParseOptions,
    dates: Vec<DateValue>,
    rejected: Vec<RejectedField>,
}

impl DateCollector {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            dates: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// Parsed dates, in the order received
    pub fn dates(&self) -> &[DateValue] {
        &self.dates
    }

    /// Fields that failed a strict parse
    pub fn rejected(&self) -> &[RejectedField] {
        &self.rejected
    }

    /// Parsed dates in chronological order (stable for equal dates)
    pub fn sorted(&self) -> Vec<&DateValue> {
        let mut dates: Vec<&DateValue> = self.dates.iter().collect();
        dates.sort_by(|a, b| a.chronological_cmp(b));
        dates
    }

    /// Dates whose first part falls in `month` of its calendar
    pub fn in_month(&self, month: u8) -> Vec<&DateValue> {
        self.matching(|value| first_field(value, |p| p.month()) == Some(month))
    }

    /// Dates whose first part falls on `day` of `month`
    pub fn on_day(&self, month: u8, day: u8) -> Vec<&DateValue> {
        self.matching(|value| {
            first_field(value, |p| p.month()) == Some(month)
                && first_field(value, |p| p.day()) == Some(day)
        })
    }

    fn matching(&self, pred: impl Fn(&DateValue) -> bool) -> Vec<&DateValue> {
        let mut dates: Vec<&DateValue> = self.dates.iter().filter(|v| pred(*v)).collect();
        dates.sort_by(|a, b| a.chronological_cmp(b));
        dates
    }
}

fn first_field<T>(
    value: &DateValue,
    field: impl Fn(&DatePart) -> Result<T>,
) -> Option<T> {
    value.first().and_then(|part| field(part).ok())
}

impl DateFieldHandler for DateCollector {
    fn on_date_field(&mut self, raw: &str) {
        match self.options.parse(raw) {
            Ok(value) => self.dates.push(value),
            Err(error) => {
                warn!(field = raw, %error, "rejecting date field");
                self.rejected.push(RejectedField {
                    raw: raw.to_string(),
                    error,
                });
            }
        }
    }
}
