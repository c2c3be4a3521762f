//! The parsed content of one date field

use serde::{Deserialize, Serialize};

use super::kind::DateKind;
use super::part::{Compliance, DatePart};
use super::parser::DateValueParser;
use crate::calendar::CalendarType;
use crate::error::{InvariantError, Result};

/// A date field: a kind plus zero, one or two date parts.
///
/// Ranges (`BET .. AND ..`, `FROM .. TO ..`) carry two parts, status
/// keywords carry none, everything else carries one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateValue")]
pub struct DateValue {
    pub(crate) kind: DateKind,
    pub(crate) first: Option<DatePart>,
    pub(crate) second: Option<DatePart>,
    /// Phrase attached to an interpreted date
    pub(crate) phrase: Option<String>,
}

/// Wire shape of [`DateValue`], checked against its kind before use
#[derive(Deserialize)]
struct RawDateValue {
    kind: DateKind,
    first: Option<DatePart>,
    second: Option<DatePart>,
    phrase: Option<String>,
}

impl TryFrom<RawDateValue> for DateValue {
    type Error = InvariantError;

    fn try_from(raw: RawDateValue) -> std::result::Result<Self, Self::Error> {
        let kind = raw.kind;
        if kind.is_status() {
            if raw.first.is_some() {
                return Err(InvariantError::StatusWithDate(kind));
            }
        } else if raw.first.is_none() {
            return Err(InvariantError::MissingFirst(kind));
        }
        match (kind.is_range(), raw.second.is_some()) {
            (true, false) => return Err(InvariantError::MissingSecond(kind)),
            (false, true) => return Err(InvariantError::UnexpectedSecond(kind)),
            _ => {}
        }
        if raw.phrase.is_some() && kind != DateKind::Interpreted {
            return Err(InvariantError::PhraseWithoutInterpreted(kind));
        }

        Ok(Self {
            kind,
            first: raw.first,
            second: raw.second,
            phrase: raw.phrase,
        })
    }
}

impl DateValue {
    /// Parse a date field strictly
    pub fn parse(text: &str, calendar: CalendarType) -> Result<Self> {
        DateValueParser::new(text, calendar).parse()
    }

    /// Parse a date field, keeping unparseable input as a nonstandard part
    pub fn parse_lenient(text: &str, calendar: CalendarType) -> Self {
        match Self::parse(text, calendar) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(input = text, error = %err, "keeping date as nonstandard text");
                Self::nonstandard(calendar, text)
            }
        }
    }

    pub(crate) fn nonstandard(calendar: CalendarType, text: &str) -> Self {
        Self {
            kind: DateKind::None,
            first: Some(DatePart::nonstandard(calendar, text)),
            second: None,
            phrase: None,
        }
    }

    pub fn kind(&self) -> DateKind {
        self.kind
    }

    /// The first (or only) date part; absent for status keywords
    pub fn first(&self) -> Option<&DatePart> {
        self.first.as_ref()
    }

    /// The end of a range
    pub fn second(&self) -> Option<&DatePart> {
        self.second.as_ref()
    }

    /// Text of an interpreted date's phrase
    pub fn phrase(&self) -> Option<&str> {
        self.phrase.as_deref()
    }

    /// True when the value holds an actual calendar date
    pub fn is_date(&self) -> bool {
        self.first
            .as_ref()
            .is_some_and(|part| part.compliance() == Compliance::Standard)
    }

    /// True only for `between` and `fromto`
    pub fn is_range(&self) -> bool {
        self.kind.is_range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_keeps_raw_text() {
        let value = DateValue::parse_lenient("sometime in spring", CalendarType::Gregorian);
        assert_eq!(value.kind(), DateKind::None);
        assert!(!value.is_date());
        let first = value.first().unwrap();
        assert_eq!(first.compliance(), Compliance::Nonstandard);
        assert_eq!(first.text(), Ok("sometime in spring"));
    }

    #[test]
    fn test_status_has_no_parts() {
        let value = DateValue::parse("STILLBORN", CalendarType::Gregorian).unwrap();
        assert_eq!(value.kind(), DateKind::Stillborn);
        assert!(value.first().is_none());
        assert!(!value.is_date());
        assert!(!value.is_range());
    }

    #[test]
    fn test_range_flags() {
        let value = DateValue::parse("BET 1900 AND 1910", CalendarType::Gregorian).unwrap();
        assert!(value.is_date());
        assert!(value.is_range());
        assert!(value.second().is_some());

        let value = DateValue::parse("BEF 1900", CalendarType::Gregorian).unwrap();
        assert!(!value.is_range());
        assert!(value.second().is_none());
    }

    fn from_json(value: serde_json::Value) -> std::result::Result<DateValue, String> {
        serde_json::from_value(value).map_err(|err| err.to_string())
    }

    #[test]
    fn test_deserialize_checks_parts_against_kind() {
        let year = serde_json::to_value(
            DateValue::parse("1900", CalendarType::Gregorian).unwrap().first,
        )
        .unwrap();

        let err = from_json(serde_json::json!({
            "kind": "between", "first": year, "second": null, "phrase": null
        }))
        .unwrap_err();
        assert!(err.contains("Between needs a second date"), "{}", err);

        let err = from_json(serde_json::json!({
            "kind": "before", "first": year, "second": year, "phrase": null
        }))
        .unwrap_err();
        assert!(err.contains("does not take a second date"), "{}", err);

        let err = from_json(serde_json::json!({
            "kind": "dead", "first": year, "second": null, "phrase": null
        }))
        .unwrap_err();
        assert!(err.contains("status Dead"), "{}", err);

        let err = from_json(serde_json::json!({
            "kind": "about", "first": null, "second": null, "phrase": null
        }))
        .unwrap_err();
        assert!(err.contains("About needs a date"), "{}", err);

        let err = from_json(serde_json::json!({
            "kind": "none", "first": year, "second": null, "phrase": "spring"
        }))
        .unwrap_err();
        assert!(err.contains("only interpreted dates"), "{}", err);
    }

    #[test]
    fn test_deserialize_accepts_parsed_values() {
        for input in ["INT 1900 (in the war)", "BET 1 JAN 1900 AND 1910", "DNSCAN", "(spring)"] {
            let value = DateValue::parse(input, CalendarType::Gregorian).unwrap();
            let json = serde_json::to_value(&value).unwrap();
            assert_eq!(from_json(json), Ok(value), "{}", input);
        }
    }
}
