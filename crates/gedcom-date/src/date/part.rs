//! A single calendar date, or the literal text standing in for one

use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarType, Epoch};
use crate::error::{DateField, FormatError, InvariantError, Result};

/// One concrete date, a parenthesized phrase, or raw text that failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDatePart")]
pub struct DatePart {
    pub(crate) calendar: CalendarType,
    pub(crate) body: PartBody,
}

/// Wire shape of [`DatePart`], checked before it becomes one
#[derive(Deserialize)]
struct RawDatePart {
    calendar: CalendarType,
    body: PartBody,
}

impl TryFrom<RawDatePart> for DatePart {
    type Error = InvariantError;

    fn try_from(raw: RawDatePart) -> std::result::Result<Self, Self::Error> {
        if let PartBody::Date(date) = &raw.body {
            date.check(raw.calendar)?;
        }
        Ok(Self {
            calendar: raw.calendar,
            body: raw.body,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum PartBody {
    Date(CalendarDate),
    /// Explicit parenthesized text
    Phrase(String),
    /// Raw input of a tolerant parse that failed
    Nonstandard(String),
}

/// Fields of a concrete date. Absent fields are `None`, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub(crate) struct CalendarDate {
    pub day: Option<u8>,
    pub month: Option<u8>,
    pub year: Option<u32>,
    /// Low two digits of the second year of a span ("1750/51")
    pub second_year: Option<u8>,
    pub epoch: Epoch,
}

impl CalendarDate {
    /// Reject field values the date-part parser never produces
    fn check(&self, calendar: CalendarType) -> std::result::Result<(), InvariantError> {
        if let Some(day) = self.day {
            if !(1..=31).contains(&day) {
                return Err(InvariantError::DayOutOfRange(day));
            }
        }
        if let Some(month) = self.month {
            if !(1..=calendar.month_count()).contains(&month) {
                return Err(InvariantError::MonthOutOfRange { month, calendar });
            }
        }
        if let Some(second) = self.second_year {
            if second > 99 {
                return Err(InvariantError::SecondYearOutOfRange(second));
            }
            if !calendar.is_gregorian() {
                return Err(InvariantError::SpanOutsideGregorian(calendar));
            }
        }
        if self.epoch == Epoch::Bc && !calendar.is_gregorian() {
            return Err(InvariantError::EpochOutsideGregorian(calendar));
        }
        Ok(())
    }
}

/// How a date part was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compliance {
    /// Parsed calendar date
    Standard,
    /// Parenthesized phrase
    Phrase,
    /// Unparseable input kept verbatim
    Nonstandard,
}

impl DatePart {
    pub(crate) fn date(calendar: CalendarType, date: CalendarDate) -> Self {
        Self {
            calendar,
            body: PartBody::Date(date),
        }
    }

    pub(crate) fn phrase_text(calendar: CalendarType, text: impl Into<String>) -> Self {
        Self {
            calendar,
            body: PartBody::Phrase(text.into()),
        }
    }

    pub(crate) fn nonstandard(calendar: CalendarType, text: impl Into<String>) -> Self {
        Self {
            calendar,
            body: PartBody::Nonstandard(text.into()),
        }
    }

    pub fn calendar(&self) -> CalendarType {
        self.calendar
    }

    pub fn compliance(&self) -> Compliance {
        match self.body {
            PartBody::Date(_) => Compliance::Standard,
            PartBody::Phrase(_) => Compliance::Phrase,
            PartBody::Nonstandard(_) => Compliance::Nonstandard,
        }
    }

    /// The concrete date fields, if this part has them
    pub(crate) fn fields(&self) -> Option<&CalendarDate> {
        match &self.body {
            PartBody::Date(date) => Some(date),
            PartBody::Phrase(_) | PartBody::Nonstandard(_) => None,
        }
    }

    fn concrete(&self) -> Result<&CalendarDate> {
        self.fields()
            .ok_or(FormatError::NotApplicable("date part is not a calendar date"))
    }

    pub fn has_day(&self) -> bool {
        self.fields().is_some_and(|d| d.day.is_some())
    }

    pub fn has_month(&self) -> bool {
        self.fields().is_some_and(|d| d.month.is_some())
    }

    pub fn has_year(&self) -> bool {
        self.fields().is_some_and(|d| d.year.is_some())
    }

    pub fn has_year_span(&self) -> bool {
        self.fields().is_some_and(|d| d.second_year.is_some())
    }

    pub fn day(&self) -> Result<u8> {
        self.concrete()?
            .day
            .ok_or(FormatError::MissingField(DateField::Day))
    }

    /// Month number within the part's calendar (Hebrew 1..=13 with 7 = Adar
    /// Sheni, French 13 = complementary days)
    pub fn month(&self) -> Result<u8> {
        self.concrete()?
            .month
            .ok_or(FormatError::MissingField(DateField::Month))
    }

    pub fn year(&self) -> Result<u32> {
        self.concrete()?
            .year
            .ok_or(FormatError::MissingField(DateField::Year))
    }

    /// The two-digit second year of a dual-dated span
    pub fn second_year(&self) -> Result<u8> {
        self.concrete()?
            .second_year
            .ok_or(FormatError::MissingField(DateField::YearSpan))
    }

    /// AD or BC. Only gregorian dates carry an epoch.
    pub fn epoch(&self) -> Result<Epoch> {
        let date = self.concrete()?;
        if !self.calendar.is_gregorian() {
            return Err(FormatError::NotApplicable(
                "epoch is only defined for gregorian dates",
            ));
        }
        Ok(date.epoch)
    }

    /// Text of a parenthesized phrase part
    pub fn phrase(&self) -> Result<&str> {
        match &self.body {
            PartBody::Phrase(text) => Ok(text),
            _ => Err(FormatError::NotApplicable("date part is not a phrase")),
        }
    }

    /// Verbatim text of a phrase or nonstandard part
    pub fn text(&self) -> Result<&str> {
        match &self.body {
            PartBody::Phrase(text) | PartBody::Nonstandard(text) => Ok(text),
            PartBody::Date(_) => Err(FormatError::NotApplicable(
                "date part is a calendar date",
            )),
        }
    }

    /// Year as a signed number, BC years negative
    pub(crate) fn signed_year(&self) -> Option<i64> {
        let date = self.fields()?;
        let year = i64::from(date.year?);
        match date.epoch {
            Epoch::Bc => Some(-year),
            Epoch::Ad => Some(year),
        }
    }
}
