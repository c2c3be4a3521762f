//! Token types for the date lexer

use std::fmt;

use super::kind::DateKind;
use crate::calendar::CalendarType;

/// A token produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// General class of the token
    pub class: TokenClass,
    /// Specific subtype within the class
    pub value: TokenValue,
    /// The raw text of the token (slice into original input)
    pub text: &'a str,
    /// Byte offset in the original input
    pub offset: usize,
}

impl<'a> Token<'a> {
    /// Create a new token
    pub fn new(class: TokenClass, value: TokenValue, text: &'a str, offset: usize) -> Self {
        Self {
            class,
            value,
            text,
            offset,
        }
    }

    pub fn eof(offset: usize) -> Self {
        Self::new(TokenClass::Eof, TokenValue::None, "", offset)
    }

    pub fn error(offset: usize) -> Self {
        Self::new(TokenClass::Error, TokenValue::None, "", offset)
    }

    /// The integer carried by a number token
    pub fn number(&self) -> Option<u32> {
        match self.value {
            TokenValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The month word carried by a month token
    pub fn month(&self) -> Option<MonthWord> {
        match self.value {
            TokenValue::Month(word) => Some(word),
            _ => None,
        }
    }

    /// The date kind carried by a qualifier or status token
    pub fn kind(&self) -> Option<DateKind> {
        match self.value {
            TokenValue::Kind(kind) => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// General class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// A run of digits
    Number,
    /// A month name of any calendar
    Month,
    /// ABOUT, CALCULATED, ESTIMATED
    Approximated,
    /// BEFORE, AFTER, BETWEEN
    Range,
    /// FROM
    Period,
    /// INTERPRETED
    Interpreted,
    LParen,
    RParen,
    Bc,
    And,
    To,
    /// "/" or "-" between the years of a span
    Slash,
    /// LDS ordinance status word
    Status,
    /// End of input
    Eof,
    /// Input the lexer could not classify
    Error,
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenClass::Number => write!(f, "number"),
            TokenClass::Month => write!(f, "month"),
            TokenClass::Approximated => write!(f, "approximation"),
            TokenClass::Range => write!(f, "range keyword"),
            TokenClass::Period => write!(f, "'from'"),
            TokenClass::Interpreted => write!(f, "'interpreted'"),
            TokenClass::LParen => write!(f, "'('"),
            TokenClass::RParen => write!(f, "')'"),
            TokenClass::Bc => write!(f, "'BC'"),
            TokenClass::And => write!(f, "'and'"),
            TokenClass::To => write!(f, "'to'"),
            TokenClass::Slash => write!(f, "year separator"),
            TokenClass::Status => write!(f, "status keyword"),
            TokenClass::Eof => write!(f, "end of input"),
            TokenClass::Error => write!(f, "unrecognized input"),
        }
    }
}

/// Specific subtype of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenValue {
    None,
    Number(u32),
    Month(MonthWord),
    Kind(DateKind),
}

/// Every month word the lexer knows, across all calendars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthWord {
    // Gregorian and Julian
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,

    // French Republican
    Vendemiaire,
    Brumaire,
    Frimaire,
    Nivose,
    Pluviose,
    Ventose,
    Germinal,
    Floreal,
    Prairial,
    Messidor,
    Thermidor,
    Fructidor,
    /// First half of "JOUR COMP"
    Jour,
    /// Complementary days
    Comp,

    // Hebrew
    Tishri,
    Cheshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    Nisan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
    /// Second half of "ADAR SHENI"
    Sheni,
}

impl MonthWord {
    /// Month number of this word in `calendar`, or None if the calendar does not have it.
    ///
    /// Words that only make sense with a follower (JOUR, SHENI) resolve to None;
    /// the date-part parser handles them with lookahead.
    pub fn number_in(self, calendar: CalendarType) -> Option<u8> {
        use MonthWord::*;

        match calendar {
            CalendarType::Gregorian | CalendarType::Julian => match self {
                January => Some(1),
                February => Some(2),
                March => Some(3),
                April => Some(4),
                May => Some(5),
                June => Some(6),
                July => Some(7),
                August => Some(8),
                September => Some(9),
                October => Some(10),
                November => Some(11),
                December => Some(12),
                _ => None,
            },
            CalendarType::Hebrew => match self {
                Tishri => Some(1),
                Cheshvan => Some(2),
                Kislev => Some(3),
                Tevet => Some(4),
                Shevat => Some(5),
                Adar => Some(6),
                // 7 is Adar Sheni
                Nisan => Some(8),
                Iyar => Some(9),
                Sivan => Some(10),
                Tammuz => Some(11),
                Av => Some(12),
                Elul => Some(13),
                _ => None,
            },
            CalendarType::French => match self {
                Vendemiaire => Some(1),
                Brumaire => Some(2),
                Frimaire => Some(3),
                Nivose => Some(4),
                Pluviose => Some(5),
                Ventose => Some(6),
                Germinal => Some(7),
                Floreal => Some(8),
                Prairial => Some(9),
                Messidor => Some(10),
                Thermidor => Some(11),
                Fructidor => Some(12),
                Comp => Some(FRENCH_COMPLEMENTARY),
                _ => None,
            },
            CalendarType::Future | CalendarType::Unknown => None,
        }
    }
}

/// Hebrew month number of Adar Sheni
pub const HEBREW_ADAR_SHENI: u8 = 7;

/// French pseudo-month holding the complementary days
pub const FRENCH_COMPLEMENTARY: u8 = 13;
