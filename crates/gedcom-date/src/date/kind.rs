//! The qualifier attached to a parsed date field

use serde::{Deserialize, Serialize};

/// What a date field says about its date(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateKind {
    /// A plain date, or a bare phrase
    #[default]
    None,

    // Approximated
    About,
    Calculated,
    Estimated,

    // Range
    Before,
    After,
    Between,

    // Period
    From,
    To,
    FromTo,

    Interpreted,

    // LDS ordinance status
    Child,
    Cleared,
    Completed,
    Infant,
    Pre1970,
    Qualified,
    Stillborn,
    Submitted,
    Uncleared,
    /// Born in the covenant
    Bic,
    /// Do not submit
    Dns,
    /// Do not submit, cancelled
    DnsCan,
    Dead,
}

impl DateKind {
    /// Status kinds replace the date entirely
    pub fn is_status(self) -> bool {
        matches!(
            self,
            DateKind::Child
                | DateKind::Cleared
                | DateKind::Completed
                | DateKind::Infant
                | DateKind::Pre1970
                | DateKind::Qualified
                | DateKind::Stillborn
                | DateKind::Submitted
                | DateKind::Uncleared
                | DateKind::Bic
                | DateKind::Dns
                | DateKind::DnsCan
                | DateKind::Dead
        )
    }

    /// Kinds that carry two dates
    pub fn is_range(self) -> bool {
        matches!(self, DateKind::Between | DateKind::FromTo)
    }

    /// Text written before the first date
    pub(crate) fn prefix(self) -> &'static str {
        match self {
            DateKind::About => "abt ",
            DateKind::Calculated => "cal ",
            DateKind::Estimated => "est ",
            DateKind::Before => "bef ",
            DateKind::After => "aft ",
            DateKind::Between => "bet ",
            DateKind::From | DateKind::FromTo => "from ",
            DateKind::To => "to ",
            DateKind::Interpreted => "int ",
            _ => "",
        }
    }

    /// Text written between the two dates of a range
    pub(crate) fn infix(self) -> Option<&'static str> {
        match self {
            DateKind::Between => Some(" and "),
            DateKind::FromTo => Some(" to "),
            _ => None,
        }
    }

    /// The single word a status kind renders as
    pub(crate) fn status_word(self) -> Option<&'static str> {
        let word = match self {
            DateKind::Child => "child",
            DateKind::Cleared => "cleared",
            DateKind::Completed => "completed",
            DateKind::Infant => "infant",
            DateKind::Pre1970 => "pre1970",
            DateKind::Qualified => "qualified",
            DateKind::Stillborn => "stillborn",
            DateKind::Submitted => "submitted",
            DateKind::Uncleared => "uncleared",
            DateKind::Bic => "BIC",
            DateKind::Dns => "DNS",
            DateKind::DnsCan => "DNSCAN",
            DateKind::Dead => "dead",
            _ => return None,
        };
        Some(word)
    }
}
