//! Chronological ordering of dates
//!
//! This is not `Ord`: values that differ (`ABT 1900` and `1900`) may compare
//! equal, and the order ignores calendars.

use std::cmp::Ordering;

use super::part::DatePart;
use super::value::DateValue;

/// Compare one field; a missing field sorts after a present one
fn cmp_field<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl DatePart {
    /// Order by year, then month, then day.
    ///
    /// BC years count as negative. Phrase and nonstandard parts sort after
    /// calendar dates, and among themselves by text.
    pub fn chronological_cmp(&self, other: &DatePart) -> Ordering {
        match (self.fields(), other.fields()) {
            (Some(a), Some(b)) => cmp_field(self.signed_year(), other.signed_year())
                .then_with(|| cmp_field(a.month, b.month))
                .then_with(|| cmp_field(a.day, b.day)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.text().ok().cmp(&other.text().ok()),
        }
    }
}

impl DateValue {
    /// Order by the first date; ranges with the same start order by their end
    /// and after single dates. Values with no calendar date (status words,
    /// phrases, unparsed text) sort last, by their rendered text.
    pub fn chronological_cmp(&self, other: &DateValue) -> Ordering {
        match (self.dated_first(), other.dated_first()) {
            (Some(a), Some(b)) => a
                .chronological_cmp(b)
                .then_with(|| self.cmp_range_end(other)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.to_string().cmp(&other.to_string()),
        }
    }

    fn dated_first(&self) -> Option<&DatePart> {
        self.first.as_ref().filter(|part| part.fields().is_some())
    }

    fn cmp_range_end(&self, other: &DateValue) -> Ordering {
        match (self.is_range(), other.is_range()) {
            (true, true) => match (&self.second, &other.second) {
                (Some(a), Some(b)) => a.chronological_cmp(b),
                _ => Ordering::Equal,
            },
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => Ordering::Equal,
        }
    }
}
