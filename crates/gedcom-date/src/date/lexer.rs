//! Lexer for GEDCOM date fields
//!
//! Tokenizes a date string into numbers, month names, qualifiers, status
//! words and punctuation.
//!
//! # Features
//!
//! - Zero-copy tokenization (tokens reference the original input)
//! - Case-insensitive keywords, with abbreviations resolved through the
//!   sorted keyword list ("APR" reads as APRIL, "BEF" as BEFORE)
//! - One token of pushback, which the date parsers use for lookahead
//!
//! # Example
//!
//! ```rust
//! use gedcom_date::date::{Lexer, TokenClass};
//!
//! let classes: Vec<_> = Lexer::new("ABT 1 APR 1900").map(|t| t.class).collect();
//! assert_eq!(classes.len(), 5); // ABT, 1, APR, 1900, EOF
//! assert_eq!(classes[0], TokenClass::Approximated);
//! ```

use super::keywords::{advance_cursor, lookup_keyword};
use super::token::{Token, TokenClass, TokenValue};

/// A lexer for GEDCOM date fields
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input string being tokenized
    input: &'a str,
    /// Current byte position in the input
    position: usize,
    /// Token handed back by a parser, returned before reading further
    pushed: Option<Token<'a>>,
    /// Whether the iterator has yielded EOF
    eof_emitted: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            pushed: None,
            eof_emitted: false,
        }
    }

    /// The whole input
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Get the remaining (unread) input
    pub fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// The input from `offset` onwards, used as error context
    pub fn remainder_from(&self, offset: usize) -> &'a str {
        self.input.get(offset..).unwrap_or("")
    }

    /// Hand a token back; the next call to `next_token` returns it again.
    ///
    /// Only one token can be held at a time.
    pub fn push_back(&mut self, token: Token<'a>) {
        debug_assert!(self.pushed.is_none(), "lexer holds one pushed-back token");
        self.pushed = Some(token);
    }

    /// Consume everything left as phrase text.
    ///
    /// Trailing whitespace and a closing parenthesis are dropped.
    pub fn take_phrase(&mut self) -> &'a str {
        self.pushed = None;
        let rest = self.remaining().trim_end();
        self.position = self.input.len();
        rest.strip_suffix(')').unwrap_or(rest)
    }

    /// Peek at the next character without consuming it
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advance the position by n bytes
    fn advance(&mut self, n: usize) {
        self.position = (self.position + n).min(self.input.len());
    }

    /// Advance by one character
    fn advance_char(&mut self) {
        if let Some(c) = self.peek() {
            self.advance(c.len_utf8());
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance_char();
            } else {
                break;
            }
        }
    }

    /// Scan a maximal run of digits
    fn scan_number(&mut self) -> Token<'a> {
        let start = self.position;
        let len = self
            .remaining()
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let text = &self.input[start..start + len];

        match text.parse::<u32>() {
            Ok(n) => {
                self.advance(len);
                Token::new(TokenClass::Number, TokenValue::Number(n), text, start)
            }
            // Too many digits for any year
            Err(_) => Token::error(start),
        }
    }

    /// Scan a keyword by walking the sorted lexeme list one character at a time.
    ///
    /// An alphabetic keyword is accepted once the next input character is not
    /// alphanumeric; a symbolic one once all of its characters are consumed.
    /// On failure the position is rewound to the start of the token.
    fn scan_keyword(&mut self) -> Token<'a> {
        let start = self.position;
        let mut lexeme = String::new();
        let mut cursor = 0;

        while let Some(c) = self.peek() {
            lexeme.push(c.to_ascii_uppercase());
            self.advance_char();

            let Some(entry) = advance_cursor(&mut cursor, &lexeme) else {
                break;
            };

            let alphabetic = lexeme.starts_with(|c: char| c.is_ascii_alphabetic());
            let complete = if alphabetic {
                !self.peek().is_some_and(char::is_alphanumeric)
            } else {
                entry.len() == lexeme.len()
            };

            if complete {
                if let Some((class, value)) = lookup_keyword(entry) {
                    return Token::new(class, value, &self.input[start..self.position], start);
                }
                break;
            }
        }

        self.position = start;
        Token::error(start)
    }

    /// Get the next token, or the pushed-back one if there is one
    pub fn next_token(&mut self) -> Token<'a> {
        if let Some(token) = self.pushed.take() {
            return token;
        }

        self.skip_whitespace();

        match self.peek() {
            None => Token::eof(self.position),
            Some('0'..='9') => self.scan_number(),
            Some(_) => self.scan_keyword(),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields tokens up to and including EOF (or the first error)
    fn next(&mut self) -> Option<Self::Item> {
        if self.eof_emitted {
            return None;
        }

        let token = self.next_token();
        if matches!(token.class, TokenClass::Eof | TokenClass::Error) {
            self.eof_emitted = true;
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::super::kind::DateKind;
    use super::super::token::MonthWord;
    use super::*;

    fn token_classes(input: &str) -> Vec<TokenClass> {
        Lexer::new(input).map(|t| t.class).collect()
    }

    fn token_values(input: &str) -> Vec<TokenValue> {
        Lexer::new(input)
            .filter(|t| t.class != TokenClass::Eof)
            .map(|t| t.value)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(token_classes(""), vec![TokenClass::Eof]);
        assert_eq!(token_classes("   \t "), vec![TokenClass::Eof]);
    }

    #[test]
    fn test_simple_date() {
        assert_eq!(
            token_classes("1 APRIL 2008"),
            vec![
                TokenClass::Number,
                TokenClass::Month,
                TokenClass::Number,
                TokenClass::Eof,
            ]
        );
        assert_eq!(
            token_values("1 APRIL 2008"),
            vec![
                TokenValue::Number(1),
                TokenValue::Month(MonthWord::April),
                TokenValue::Number(2008),
            ]
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            token_values("april April aPrIl"),
            vec![TokenValue::Month(MonthWord::April); 3]
        );
    }

    #[test]
    fn test_abbreviations_resolve_to_first_match() {
        assert_eq!(
            token_values("Jan Jun Jul Mar May Dec"),
            vec![
                TokenValue::Month(MonthWord::January),
                TokenValue::Month(MonthWord::June),
                TokenValue::Month(MonthWord::July),
                TokenValue::Month(MonthWord::March),
                TokenValue::Month(MonthWord::May),
                TokenValue::Month(MonthWord::December),
            ]
        );
        assert_eq!(
            token_values("bef aft bet cal est int"),
            vec![
                TokenValue::Kind(DateKind::Before),
                TokenValue::Kind(DateKind::After),
                TokenValue::Kind(DateKind::Between),
                TokenValue::Kind(DateKind::Calculated),
                TokenValue::Kind(DateKind::Estimated),
                TokenValue::Kind(DateKind::Interpreted),
            ]
        );
    }

    #[test]
    fn test_prefix_entry_does_not_hide_longer_keyword() {
        assert_eq!(
            token_values("DNS DNSCAN COMP COMPLETED"),
            vec![
                TokenValue::Kind(DateKind::Dns),
                TokenValue::Kind(DateKind::DnsCan),
                TokenValue::Month(MonthWord::Comp),
                TokenValue::Kind(DateKind::Completed),
            ]
        );
    }

    #[test]
    fn test_slash_and_dash() {
        assert_eq!(
            token_classes("2007/08 2007-08"),
            vec![
                TokenClass::Number,
                TokenClass::Slash,
                TokenClass::Number,
                TokenClass::Number,
                TokenClass::Slash,
                TokenClass::Number,
                TokenClass::Eof,
            ]
        );
    }

    #[test]
    fn test_keyword_needs_boundary() {
        // "ABT1900" is not ABT followed by 1900
        assert_eq!(token_classes("ABT1900"), vec![TokenClass::Error]);
        // digits inside a keyword are fine
        assert_eq!(token_classes("PRE1970"), vec![TokenClass::Status, TokenClass::Eof]);
    }

    #[test]
    fn test_parens() {
        assert_eq!(
            token_classes("( )"),
            vec![TokenClass::LParen, TokenClass::RParen, TokenClass::Eof]
        );
    }

    #[test]
    fn test_error_rewinds() {
        let mut lexer = Lexer::new("1 GARBAGE");
        assert_eq!(lexer.next_token().class, TokenClass::Number);
        let token = lexer.next_token();
        assert_eq!(token.class, TokenClass::Error);
        assert_eq!(token.offset, 2);
        assert_eq!(lexer.remaining(), "GARBAGE");
        assert_eq!(lexer.remainder_from(token.offset), "GARBAGE");
    }

    #[test]
    fn test_number_overflow_is_error() {
        assert_eq!(token_classes("99999999999"), vec![TokenClass::Error]);
    }

    #[test]
    fn test_push_back() {
        let mut lexer = Lexer::new("ADAR 5770");
        let adar = lexer.next_token();
        let year = lexer.next_token();
        lexer.push_back(year);
        assert_eq!(lexer.next_token(), year);
        assert_eq!(adar.month(), Some(MonthWord::Adar));
        assert_eq!(lexer.next_token().class, TokenClass::Eof);
    }

    #[test]
    fn test_take_phrase() {
        let mut lexer = Lexer::new("INT 1900 (about the war)  ");
        lexer.next_token();
        lexer.next_token();
        assert_eq!(lexer.next_token().class, TokenClass::LParen);
        assert_eq!(lexer.take_phrase(), "about the war");
        assert_eq!(lexer.next_token().class, TokenClass::Eof);
    }

    #[test]
    fn test_take_phrase_unclosed() {
        let mut lexer = Lexer::new("(sometime");
        lexer.next_token();
        assert_eq!(lexer.take_phrase(), "sometime");
    }

    #[test]
    fn test_token_offsets() {
        let tokens: Vec<_> = Lexer::new("BET 1900 AND 1910").collect();
        assert_eq!(tokens[0].offset, 0);
        assert_eq!(tokens[1].offset, 4);
        assert_eq!(tokens[2].offset, 9);
        assert_eq!(tokens[2].text, "AND");
        assert_eq!(tokens[3].offset, 13);
    }

    #[test]
    fn test_non_ascii_is_error() {
        assert_eq!(token_classes("Décembre"), vec![TokenClass::Error]);
    }
}
