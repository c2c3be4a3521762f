//! Canonical text of parsed dates
//!
//! Every word written here lexes back to the keyword it came from, so
//! rendering a parsed date and parsing the result again is stable.

use std::fmt;

use super::part::{CalendarDate, DatePart, PartBody};
use super::value::DateValue;
use crate::calendar::{CalendarType, Epoch};

const GREGORIAN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const HEBREW_MONTHS: [&str; 13] = [
    "Tishri",
    "Cheshvan",
    "Kislev",
    "Tevet",
    "Shevat",
    "Adar",
    "Adar Sheni",
    "Nisan",
    "Iyar",
    "Sivan",
    "Tammuz",
    "Av",
    "Elul",
];

const FRENCH_MONTHS: [&str; 13] = [
    "Vend", "Brum", "Frim", "Niv", "Pluv", "Vent", "Germ", "Flor", "Prair", "Mess", "Therm",
    "Fruct", "Jour Comp",
];

/// Name of a month number in `calendar`
pub fn month_name(calendar: CalendarType, month: u8) -> Option<&'static str> {
    let table: &[&str] = match calendar {
        CalendarType::Gregorian | CalendarType::Julian => &GREGORIAN_MONTHS,
        CalendarType::Hebrew => &HEBREW_MONTHS,
        CalendarType::French => &FRENCH_MONTHS,
        CalendarType::Future | CalendarType::Unknown => &[],
    };
    table.get(usize::from(month).checked_sub(1)?).copied()
}

fn write_date(
    f: &mut fmt::Formatter<'_>,
    calendar: CalendarType,
    date: &CalendarDate,
) -> fmt::Result {
    let mut words: Vec<String> = Vec::with_capacity(3);

    if let Some(day) = date.day {
        words.push(day.to_string());
    }
    if let Some(name) = date.month.and_then(|m| month_name(calendar, m)) {
        words.push(name.to_string());
    }
    if let Some(year) = date.year {
        match date.second_year {
            Some(second) => words.push(format!("{}-{:02}", year, second)),
            None => words.push(year.to_string()),
        }
    }

    write!(f, "{}", words.join(" "))?;
    if calendar.is_gregorian() && date.epoch == Epoch::Bc {
        write!(f, " BC")?;
    }
    Ok(())
}

impl fmt::Display for DatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            PartBody::Date(date) => write_date(f, self.calendar, date),
            PartBody::Phrase(text) | PartBody::Nonstandard(text) => write!(f, "{}", text),
        }
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(word) = self.kind.status_word() {
            return write!(f, "{}", word);
        }

        write!(f, "{}", self.kind.prefix())?;
        if let Some(first) = &self.first {
            match first.body {
                PartBody::Phrase(_) => write!(f, "({})", first)?,
                _ => write!(f, "{}", first)?,
            }
        }
        if let (Some(infix), Some(second)) = (self.kind.infix(), &self.second) {
            write!(f, "{}{}", infix, second)?;
        }
        if let Some(phrase) = &self.phrase {
            write!(f, " ({})", phrase)?;
        }
        Ok(())
    }
}
