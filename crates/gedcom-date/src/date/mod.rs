//! GEDCOM date field parsing
//!
//! A date field such as `BET 1 APR 1750/51 AND ADAR SHENI 5771` goes through:
//!
//! 1. [`Lexer`] - keywords (with abbreviations), numbers and punctuation
//! 2. the date-value state machine - qualifiers, ranges, phrases, status words
//! 3. the date-part state machine - one calendar date at a time
//!
//! The result is a [`DateValue`] holding up to two [`DatePart`]s. Both render
//! back to canonical text through `Display` and order chronologically through
//! `chronological_cmp`.

mod compare;
mod keywords;
mod kind;
mod lexer;
mod parser;
mod part;
mod render;
mod token;
mod value;

pub use keywords::lookup_keyword;
pub use kind::DateKind;
pub use lexer::Lexer;
pub use part::{Compliance, DatePart};
pub use render::month_name;
pub use token::{MonthWord, Token, TokenClass, TokenValue, FRENCH_COMPLEMENTARY, HEBREW_ADAR_SHENI};
pub use value::DateValue;
