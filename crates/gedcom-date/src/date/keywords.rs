//! Keyword table for the date lexer
//!
//! Uses compile-time perfect hashing (phf) for exact lookup, plus a sorted
//! lexeme list the lexer walks to resolve abbreviations ("APR", "BEF", "INT").

use phf::phf_map;

use super::kind::DateKind;
use super::token::{MonthWord, TokenClass, TokenValue};

/// Static map of uppercase lexemes to their token class and subtype
static KEYWORDS: phf::Map<&'static str, (TokenClass, TokenValue)> = phf_map! {
    // Punctuation
    "(" => (TokenClass::LParen, TokenValue::None),
    ")" => (TokenClass::RParen, TokenValue::None),
    "-" => (TokenClass::Slash, TokenValue::None),
    "/" => (TokenClass::Slash, TokenValue::None),

    // Gregorian and Julian months
    "JANUARY" => (TokenClass::Month, TokenValue::Month(MonthWord::January)),
    "FEBRUARY" => (TokenClass::Month, TokenValue::Month(MonthWord::February)),
    "MARCH" => (TokenClass::Month, TokenValue::Month(MonthWord::March)),
    "APRIL" => (TokenClass::Month, TokenValue::Month(MonthWord::April)),
    "MAY" => (TokenClass::Month, TokenValue::Month(MonthWord::May)),
    "JUNE" => (TokenClass::Month, TokenValue::Month(MonthWord::June)),
    "JULY" => (TokenClass::Month, TokenValue::Month(MonthWord::July)),
    "AUGUST" => (TokenClass::Month, TokenValue::Month(MonthWord::August)),
    "SEPTEMBER" => (TokenClass::Month, TokenValue::Month(MonthWord::September)),
    "OCTOBER" => (TokenClass::Month, TokenValue::Month(MonthWord::October)),
    "NOVEMBER" => (TokenClass::Month, TokenValue::Month(MonthWord::November)),
    "DECEMBER" => (TokenClass::Month, TokenValue::Month(MonthWord::December)),

    // French Republican months
    "VENDEMIAIRE" => (TokenClass::Month, TokenValue::Month(MonthWord::Vendemiaire)),
    "BRUMAIRE" => (TokenClass::Month, TokenValue::Month(MonthWord::Brumaire)),
    "FRIMAIRE" => (TokenClass::Month, TokenValue::Month(MonthWord::Frimaire)),
    "NIVOSE" => (TokenClass::Month, TokenValue::Month(MonthWord::Nivose)),
    "PLUVIOSE" => (TokenClass::Month, TokenValue::Month(MonthWord::Pluviose)),
    "VENTOSE" => (TokenClass::Month, TokenValue::Month(MonthWord::Ventose)),
    "GERMINAL" => (TokenClass::Month, TokenValue::Month(MonthWord::Germinal)),
    "FLOREAL" => (TokenClass::Month, TokenValue::Month(MonthWord::Floreal)),
    "PRAIRIAL" => (TokenClass::Month, TokenValue::Month(MonthWord::Prairial)),
    "MESSIDOR" => (TokenClass::Month, TokenValue::Month(MonthWord::Messidor)),
    "THERMIDOR" => (TokenClass::Month, TokenValue::Month(MonthWord::Thermidor)),
    "FRUCTIDOR" => (TokenClass::Month, TokenValue::Month(MonthWord::Fructidor)),
    "JOUR" => (TokenClass::Month, TokenValue::Month(MonthWord::Jour)),
    "COMP" => (TokenClass::Month, TokenValue::Month(MonthWord::Comp)),
    "COMPLEMENTAIRES" => (TokenClass::Month, TokenValue::Month(MonthWord::Comp)),

    // Hebrew months, with their GEDCOM abbreviations
    "TISHRI" => (TokenClass::Month, TokenValue::Month(MonthWord::Tishri)),
    "TSH" => (TokenClass::Month, TokenValue::Month(MonthWord::Tishri)),
    "CHESHVAN" => (TokenClass::Month, TokenValue::Month(MonthWord::Cheshvan)),
    "CSH" => (TokenClass::Month, TokenValue::Month(MonthWord::Cheshvan)),
    "KISLEV" => (TokenClass::Month, TokenValue::Month(MonthWord::Kislev)),
    "KSL" => (TokenClass::Month, TokenValue::Month(MonthWord::Kislev)),
    "TEVET" => (TokenClass::Month, TokenValue::Month(MonthWord::Tevet)),
    "TVT" => (TokenClass::Month, TokenValue::Month(MonthWord::Tevet)),
    "SHEVAT" => (TokenClass::Month, TokenValue::Month(MonthWord::Shevat)),
    "SHV" => (TokenClass::Month, TokenValue::Month(MonthWord::Shevat)),
    "ADAR" => (TokenClass::Month, TokenValue::Month(MonthWord::Adar)),
    "ADR" => (TokenClass::Month, TokenValue::Month(MonthWord::Adar)),
    "SHENI" => (TokenClass::Month, TokenValue::Month(MonthWord::Sheni)),
    "NISAN" => (TokenClass::Month, TokenValue::Month(MonthWord::Nisan)),
    "NSN" => (TokenClass::Month, TokenValue::Month(MonthWord::Nisan)),
    "IYAR" => (TokenClass::Month, TokenValue::Month(MonthWord::Iyar)),
    "IYR" => (TokenClass::Month, TokenValue::Month(MonthWord::Iyar)),
    "SIVAN" => (TokenClass::Month, TokenValue::Month(MonthWord::Sivan)),
    "SVN" => (TokenClass::Month, TokenValue::Month(MonthWord::Sivan)),
    "TAMMUZ" => (TokenClass::Month, TokenValue::Month(MonthWord::Tammuz)),
    "TMZ" => (TokenClass::Month, TokenValue::Month(MonthWord::Tammuz)),
    "AV" => (TokenClass::Month, TokenValue::Month(MonthWord::Av)),
    "AAV" => (TokenClass::Month, TokenValue::Month(MonthWord::Av)),
    "ELUL" => (TokenClass::Month, TokenValue::Month(MonthWord::Elul)),
    "ELL" => (TokenClass::Month, TokenValue::Month(MonthWord::Elul)),

    // Qualifiers
    "ABOUT" => (TokenClass::Approximated, TokenValue::Kind(DateKind::About)),
    "ABT" => (TokenClass::Approximated, TokenValue::Kind(DateKind::About)),
    "CALCULATED" => (TokenClass::Approximated, TokenValue::Kind(DateKind::Calculated)),
    "ESTIMATED" => (TokenClass::Approximated, TokenValue::Kind(DateKind::Estimated)),
    "BEFORE" => (TokenClass::Range, TokenValue::Kind(DateKind::Before)),
    "AFTER" => (TokenClass::Range, TokenValue::Kind(DateKind::After)),
    "BETWEEN" => (TokenClass::Range, TokenValue::Kind(DateKind::Between)),
    "FROM" => (TokenClass::Period, TokenValue::Kind(DateKind::From)),
    "TO" => (TokenClass::To, TokenValue::None),
    "AND" => (TokenClass::And, TokenValue::None),
    "INTERPRETED" => (TokenClass::Interpreted, TokenValue::Kind(DateKind::Interpreted)),
    "BC" => (TokenClass::Bc, TokenValue::None),

    // LDS ordinance status
    "CHILD" => (TokenClass::Status, TokenValue::Kind(DateKind::Child)),
    "CLEARED" => (TokenClass::Status, TokenValue::Kind(DateKind::Cleared)),
    "COMPLETED" => (TokenClass::Status, TokenValue::Kind(DateKind::Completed)),
    "INFANT" => (TokenClass::Status, TokenValue::Kind(DateKind::Infant)),
    "PRE1970" => (TokenClass::Status, TokenValue::Kind(DateKind::Pre1970)),
    "QUALIFIED" => (TokenClass::Status, TokenValue::Kind(DateKind::Qualified)),
    "STILLBORN" => (TokenClass::Status, TokenValue::Kind(DateKind::Stillborn)),
    "SUBMITTED" => (TokenClass::Status, TokenValue::Kind(DateKind::Submitted)),
    "UNCLEARED" => (TokenClass::Status, TokenValue::Kind(DateKind::Uncleared)),
    "BIC" => (TokenClass::Status, TokenValue::Kind(DateKind::Bic)),
    "DNS" => (TokenClass::Status, TokenValue::Kind(DateKind::Dns)),
    "DNSCAN" => (TokenClass::Status, TokenValue::Kind(DateKind::DnsCan)),
    "DEAD" => (TokenClass::Status, TokenValue::Kind(DateKind::Dead)),
};

/// Every key of `KEYWORDS`, in ascending byte order.
///
/// Must stay sorted: the lexer advances a cursor through it as characters are read.
#[rustfmt::skip]
pub(crate) static LEXEMES: &[&str] = &[
    "(", ")", "-", "/",
    "AAV", "ABOUT", "ABT", "ADAR", "ADR", "AFTER", "AND", "APRIL", "AUGUST", "AV",
    "BC", "BEFORE", "BETWEEN", "BIC", "BRUMAIRE",
    "CALCULATED", "CHESHVAN", "CHILD", "CLEARED", "COMP", "COMPLEMENTAIRES", "COMPLETED", "CSH",
    "DEAD", "DECEMBER", "DNS", "DNSCAN",
    "ELL", "ELUL", "ESTIMATED",
    "FEBRUARY", "FLOREAL", "FRIMAIRE", "FROM", "FRUCTIDOR",
    "GERMINAL",
    "INFANT", "INTERPRETED", "IYAR", "IYR",
    "JANUARY", "JOUR", "JULY", "JUNE",
    "KISLEV", "KSL",
    "MARCH", "MAY", "MESSIDOR",
    "NISAN", "NIVOSE", "NOVEMBER", "NSN",
    "OCTOBER",
    "PLUVIOSE", "PRAIRIAL", "PRE1970",
    "QUALIFIED",
    "SEPTEMBER", "SHENI", "SHEVAT", "SHV", "SIVAN", "STILLBORN", "SUBMITTED", "SVN",
    "TAMMUZ", "TEVET", "THERMIDOR", "TISHRI", "TMZ", "TO", "TSH", "TVT",
    "UNCLEARED",
    "VENDEMIAIRE", "VENTOSE",
];

/// Look up a keyword by its full lexeme (case-insensitive)
#[inline]
pub fn lookup_keyword(word: &str) -> Option<(TokenClass, TokenValue)> {
    let upper = word.to_ascii_uppercase();
    KEYWORDS.get(upper.as_str()).copied()
}

/// Move `cursor` forward to the first lexeme not smaller than `prefix`, and
/// return that lexeme if it starts with `prefix`.
///
/// `prefix` must be uppercase. Lexemes starting with `prefix` form a
/// contiguous block in `LEXEMES`, so the first one at or after the cursor is
/// the alphabetically first keyword the typed text can abbreviate.
#[inline]
pub(crate) fn advance_cursor(cursor: &mut usize, prefix: &str) -> Option<&'static str> {
    let rest = LEXEMES.get(*cursor..).unwrap_or(&[]);
    *cursor += rest.partition_point(|entry| *entry < prefix);
    LEXEMES
        .get(*cursor)
        .copied()
        .filter(|entry| entry.starts_with(prefix))
}
