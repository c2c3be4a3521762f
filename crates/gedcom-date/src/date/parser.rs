//! State machines for GEDCOM date fields
//!
//! Two parsers share one lexer:
//!
//! - [`DatePartParser`] reads one calendar date (`1 APR 1750/51`, `44 BC`,
//!   `ADAR SHENI 5771`) and stops at the first token that cannot belong to it,
//!   handing that token back through the lexer's pushback slot.
//! - [`DateValueParser`] reads the qualifiers around the dates (`ABT`,
//!   `BET .. AND ..`, `FROM .. TO ..`, `INT .. (phrase)`, status words) and
//!   calls the date-part parser for each date it expects.

use tracing::trace;

use super::kind::DateKind;
use super::lexer::Lexer;
use super::part::{CalendarDate, DatePart};
use super::token::{MonthWord, Token, TokenClass, FRENCH_COMPLEMENTARY, HEBREW_ADAR_SHENI};
use super::value::DateValue;
use crate::calendar::{CalendarType, Epoch};
use crate::error::{DatePartFault, DateValueFault, FormatError, Result};

/// Date-part parser states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PartState {
    /// Nothing read yet
    Start,
    /// After a number (day, year or second year)
    Number,
    /// After a month name
    Month,
    /// After the separator of a year span
    Slash,
    /// After BC
    Bc,
    /// Date complete
    End,
}

/// Parser for a single calendar date
pub(crate) struct DatePartParser<'l, 'a> {
    lexer: &'l mut Lexer<'a>,
    calendar: CalendarType,
    state: PartState,
    date: CalendarDate,
    /// A number whose role (day or year) depends on what follows, with its offset
    pending: Option<(u32, usize)>,
}

impl<'l, 'a> DatePartParser<'l, 'a> {
    pub(crate) fn new(lexer: &'l mut Lexer<'a>, calendar: CalendarType) -> Self {
        Self {
            lexer,
            calendar,
            state: PartState::Start,
            date: CalendarDate::default(),
            pending: None,
        }
    }

    /// Run the state machine to completion
    pub(crate) fn parse(mut self) -> Result<DatePart> {
        while self.state != PartState::End {
            self.step()?;
        }

        trace!(calendar = %self.calendar, date = ?self.date, "date part parsed");
        Ok(DatePart::date(self.calendar, self.date))
    }

    /// Read the next token, treating anything a date cannot contain as the end
    /// of the date. That token is handed back for the enclosing parser.
    fn next_input(&mut self) -> Token<'a> {
        let token = self.lexer.next_token();
        match token.class {
            TokenClass::Number
            | TokenClass::Month
            | TokenClass::Slash
            | TokenClass::Bc
            | TokenClass::Eof
            | TokenClass::Error => token,
            _ => {
                self.lexer.push_back(token);
                Token::eof(token.offset)
            }
        }
    }

    fn fault(&self, fault: DatePartFault, offset: usize) -> FormatError {
        FormatError::DatePart {
            fault,
            remainder: self.lexer.remainder_from(offset).to_string(),
        }
    }

    /// Perform one step of the state machine
    fn step(&mut self) -> Result<()> {
        let token = self.next_input();
        if token.class == TokenClass::Error {
            return Err(FormatError::Token {
                remainder: self.lexer.remainder_from(token.offset).to_string(),
            });
        }

        self.state = match (self.state, token.class) {
            (PartState::Start, TokenClass::Number) | (PartState::Month, TokenClass::Number) => {
                self.pending = token.number().map(|n| (n, token.offset));
                PartState::Number
            }
            (PartState::Start, TokenClass::Month) | (PartState::Number, TokenClass::Month) => {
                self.set_month(token)?;
                PartState::Month
            }
            (PartState::Number, TokenClass::Slash) => {
                self.start_span(token)?;
                PartState::Slash
            }
            (PartState::Number, TokenClass::Bc) => {
                if !self.calendar.is_gregorian() {
                    return Err(self.fault(
                        DatePartFault::EpochOutsideGregorian(self.calendar),
                        token.offset,
                    ));
                }
                self.commit_year();
                self.date.epoch = Epoch::Bc;
                PartState::Bc
            }
            (PartState::Slash, TokenClass::Number) => {
                self.date.second_year = token.number().map(|n| (n % 100) as u8);
                PartState::Number
            }
            (PartState::Number, TokenClass::Eof) => {
                self.commit_year();
                PartState::End
            }
            (PartState::Month, TokenClass::Eof) | (PartState::Bc, TokenClass::Eof) => {
                PartState::End
            }
            (_, class) => {
                return Err(self.fault(DatePartFault::UnexpectedToken(class), token.offset));
            }
        };

        Ok(())
    }

    /// The buffered number, if any, is the year
    fn commit_year(&mut self) {
        if let Some((year, _)) = self.pending.take() {
            self.date.year = Some(year);
        }
    }

    /// Record the month; a buffered number before it is the day
    fn set_month(&mut self, token: Token<'a>) -> Result<()> {
        if self.date.month.is_some() {
            return Err(self.fault(DatePartFault::DuplicateMonth, token.offset));
        }
        if self.date.year.is_some() {
            return Err(self.fault(
                DatePartFault::UnexpectedToken(TokenClass::Month),
                token.offset,
            ));
        }

        let month = self.resolve_month(token)?;

        if let Some((day, offset)) = self.pending.take() {
            if !(1..=31).contains(&day) {
                return Err(self.fault(DatePartFault::DayOutOfRange(day), offset));
            }
            self.date.day = Some(day as u8);
        }
        self.date.month = Some(month);
        Ok(())
    }

    /// Month number of a month token in this calendar.
    ///
    /// ADAR may be followed by SHENI and JOUR must be followed by COMP; the
    /// follower is read ahead and pushed back when it does not match.
    fn resolve_month(&mut self, token: Token<'a>) -> Result<u8> {
        let Some(word) = token.month() else {
            return Err(self.invalid_month(token));
        };

        match (self.calendar, word) {
            (CalendarType::Hebrew, MonthWord::Adar) => {
                let next = self.lexer.next_token();
                if next.month() == Some(MonthWord::Sheni) {
                    return Ok(HEBREW_ADAR_SHENI);
                }
                self.lexer.push_back(next);
            }
            (CalendarType::French, MonthWord::Jour) => {
                let next = self.lexer.next_token();
                if next.month() == Some(MonthWord::Comp) {
                    return Ok(FRENCH_COMPLEMENTARY);
                }
                self.lexer.push_back(next);
            }
            _ => {}
        }

        word.number_in(self.calendar)
            .ok_or_else(|| self.invalid_month(token))
    }

    fn invalid_month(&self, token: Token<'a>) -> FormatError {
        self.fault(DatePartFault::InvalidMonth(self.calendar), token.offset)
    }

    /// Commit the buffered year and mark the year span
    fn start_span(&mut self, token: Token<'a>) -> Result<()> {
        if !self.calendar.is_gregorian() {
            return Err(self.fault(
                DatePartFault::SpanOutsideGregorian(self.calendar),
                token.offset,
            ));
        }
        if self.pending.is_none() || self.date.second_year.is_some() {
            return Err(self.fault(DatePartFault::DuplicateSlash, token.offset));
        }
        self.commit_year();
        Ok(())
    }
}

/// Date-value parser states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueState {
    /// Nothing read yet
    Start,
    /// After a complete date part
    Date,
    /// After ABT, CAL or EST
    DateApprox,
    /// After BEF, AFT or BET
    DateRange,
    /// After TO, at the start or following a FROM date
    To,
    /// After FROM
    DatePeriod,
    /// After INT
    DateInterp,
    /// After a parenthesized phrase
    DatePhrase,
    /// After the AND of a BET range
    And,
    /// After a status keyword
    Status,
    /// Field complete
    End,
}

/// Parser for a whole date field
pub(crate) struct DateValueParser<'a> {
    lexer: Lexer<'a>,
    calendar: CalendarType,
    state: ValueState,
    value: DateValue,
}

impl<'a> DateValueParser<'a> {
    pub(crate) fn new(input: &'a str, calendar: CalendarType) -> Self {
        Self {
            lexer: Lexer::new(input),
            calendar,
            state: ValueState::Start,
            value: DateValue {
                kind: DateKind::None,
                first: None,
                second: None,
                phrase: None,
            },
        }
    }

    /// Run the state machine to completion
    pub(crate) fn parse(mut self) -> Result<DateValue> {
        while self.state != ValueState::End {
            self.step()?;
        }

        trace!(kind = ?self.value.kind, input = self.lexer.input(), "date value parsed");
        Ok(self.value)
    }

    fn fault(&self, fault: DateValueFault, offset: usize) -> FormatError {
        FormatError::DateValue {
            fault,
            remainder: self.lexer.remainder_from(offset).to_string(),
        }
    }

    /// Perform one step of the state machine
    fn step(&mut self) -> Result<()> {
        let token = self.lexer.next_token();
        if token.class == TokenClass::Error {
            return Err(FormatError::Token {
                remainder: self.lexer.remainder_from(token.offset).to_string(),
            });
        }

        let kind = self.value.kind;
        self.state = match (self.state, token.class) {
            // Qualifiers
            (ValueState::Start, TokenClass::Approximated) => {
                self.qualify(token);
                ValueState::DateApprox
            }
            (ValueState::Start, TokenClass::Range) => {
                self.qualify(token);
                ValueState::DateRange
            }
            (ValueState::Start, TokenClass::Period) => {
                self.qualify(token);
                ValueState::DatePeriod
            }
            (ValueState::Start, TokenClass::To) => {
                self.value.kind = DateKind::To;
                ValueState::To
            }
            (ValueState::Start, TokenClass::Interpreted) => {
                self.qualify(token);
                ValueState::DateInterp
            }
            (ValueState::Start, TokenClass::Status) => {
                self.qualify(token);
                ValueState::Status
            }
            (ValueState::Start, TokenClass::LParen) => {
                let text = self.lexer.take_phrase();
                self.value.first = Some(DatePart::phrase_text(self.calendar, text));
                ValueState::DatePhrase
            }
            (ValueState::Start, TokenClass::Eof) => {
                return Err(self.fault(DateValueFault::Empty, token.offset));
            }

            // Dates
            (
                ValueState::Start
                | ValueState::DateApprox
                | ValueState::DateRange
                | ValueState::To
                | ValueState::DatePeriod
                | ValueState::DateInterp
                | ValueState::And,
                TokenClass::Number | TokenClass::Month,
            ) => {
                self.lexer.push_back(token);
                self.read_part()?;
                ValueState::Date
            }

            // After a date
            (ValueState::Date, TokenClass::LParen) => {
                if kind != DateKind::Interpreted {
                    return Err(self.fault(DateValueFault::PhraseWithoutInterpreted, token.offset));
                }
                self.value.phrase = Some(self.lexer.take_phrase().to_string());
                ValueState::DatePhrase
            }
            (ValueState::Date, TokenClass::And) => {
                if kind != DateKind::Between {
                    return Err(self.fault(DateValueFault::AndWithoutBetween, token.offset));
                }
                if self.value.second.is_some() {
                    return Err(self.fault(
                        DateValueFault::UnexpectedToken(TokenClass::And),
                        token.offset,
                    ));
                }
                ValueState::And
            }
            (ValueState::Date, TokenClass::To) => {
                match kind {
                    DateKind::From => self.value.kind = DateKind::FromTo,
                    DateKind::FromTo => {
                        return Err(self.fault(
                            DateValueFault::UnexpectedToken(TokenClass::To),
                            token.offset,
                        ));
                    }
                    _ => return Err(self.fault(DateValueFault::ToWithoutFrom, token.offset)),
                }
                ValueState::To
            }
            (ValueState::Date, TokenClass::Eof) => {
                if kind == DateKind::Between && self.value.second.is_none() {
                    return Err(self.fault(DateValueFault::MissingSecondDate, token.offset));
                }
                ValueState::End
            }
            (ValueState::And, TokenClass::Eof) => {
                return Err(self.fault(DateValueFault::MissingSecondDate, token.offset));
            }

            (ValueState::DatePhrase, TokenClass::Eof) | (ValueState::Status, TokenClass::Eof) => {
                ValueState::End
            }

            (_, class) => {
                return Err(self.fault(DateValueFault::UnexpectedToken(class), token.offset));
            }
        };

        Ok(())
    }

    /// Take the kind carried by a qualifier or status token
    fn qualify(&mut self, token: Token<'a>) {
        if let Some(kind) = token.kind() {
            self.value.kind = kind;
        }
    }

    /// Run the date-part parser for the first date, or the second once the first is read
    fn read_part(&mut self) -> Result<()> {
        let part = DatePartParser::new(&mut self.lexer, self.calendar).parse()?;
        if self.value.first.is_none() {
            self.value.first = Some(part);
        } else {
            self.value.second = Some(part);
        }
        Ok(())
    }
}
