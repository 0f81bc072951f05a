//! Token content, quantity and spacing kinds.
//!
//! Each kind maps 1:1 to a character of the token grammar; `from_*` returns
//! `None` for anything the grammar does not define.

use crate::grammar::{
    ANY, MISC, NUMBER, OPTIONAL_LINE, QUANTITY_ONE_OR_MORE, QUANTITY_SINGLE, SPACE_OPTIONAL,
    SPACE_OPTIONAL_RX, SPACE_PROHIBITED, SPACE_REQUIRED_RX, STRING,
};

/// What a token matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Arbitrary span, may include whitespace.
    Any,
    /// Literal text.
    String,
    /// Numeric literal.
    Number,
    /// Single opaque non-whitespace run.
    Misc,
    /// Marks the whole line as optional.
    OptionalLine,
}

impl ContentKind {
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            ANY => Some(Self::Any),
            STRING => Some(Self::String),
            NUMBER => Some(Self::Number),
            MISC => Some(Self::Misc),
            OPTIONAL_LINE => Some(Self::OptionalLine),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Self::Any => ANY,
            Self::String => STRING,
            Self::Number => NUMBER,
            Self::Misc => MISC,
            Self::OptionalLine => OPTIONAL_LINE,
        }
    }

    /// Whether tokens of this kind accept space/capture/quantity flags.
    pub fn takes_flags(self) -> bool {
        matches!(self, Self::String | Self::Number | Self::Misc)
    }
}

/// How many occurrences a token matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Quantity {
    #[default]
    Single,
    /// Whitespace-separated run; captured as one span, re-split on whitespace.
    OneOrMore,
}

impl Quantity {
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            QUANTITY_SINGLE => Some(Self::Single),
            QUANTITY_ONE_OR_MORE => Some(Self::OneOrMore),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Single => QUANTITY_SINGLE,
            Self::OneOrMore => QUANTITY_ONE_OR_MORE,
        }
    }

    pub fn is_repeated(self) -> bool {
        self == Self::OneOrMore
    }
}

/// What the line compiler inserts between a token and the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpaceAfter {
    #[default]
    Required,
    Optional,
    Prohibited,
}

impl SpaceAfter {
    /// Decode an explicit flag. `Required` has no flag character.
    pub fn from_flag(c: char) -> Option<Self> {
        match c {
            SPACE_OPTIONAL => Some(Self::Optional),
            SPACE_PROHIBITED => Some(Self::Prohibited),
            _ => None,
        }
    }

    pub fn flag(self) -> Option<char> {
        match self {
            Self::Required => None,
            Self::Optional => Some(SPACE_OPTIONAL),
            Self::Prohibited => Some(SPACE_PROHIBITED),
        }
    }

    /// Regex separator placed after a token that is not last on its line.
    pub fn separator(self) -> &'static str {
        match self {
            Self::Required => SPACE_REQUIRED_RX,
            Self::Optional => SPACE_OPTIONAL_RX,
            Self::Prohibited => "",
        }
    }
}
