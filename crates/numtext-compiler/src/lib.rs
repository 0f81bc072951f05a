//! numtext compiler: mini-language text to regex.
//!
//! This crate provides the compilation pipeline for numtext parsers:
//! - `lexer` - shell-style splitting of a line into token strings
//! - `token` - token grammar and per-token regex fragments
//! - `line` - line regexes, spacing, word boundaries and group numbering
//! - `parser` - head/body/tail composition and full-pattern assembly
//! - `diagnostics` - error rendering against the offending line

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod lexer;
pub mod line;
pub mod parser;
pub mod token;

#[cfg(test)]
mod lexer_tests;

use std::ops::Range;

pub use diagnostics::ErrorPrinter;
pub use line::{CaptureSlot, CompiledLine, CompiledLines, compile_line, compile_lines};
pub use parser::{Parser, ParserBuilder, Section, SectionPattern};
pub use token::{GroupCounter, Token};

/// Where in a line an error was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// The full line text as written in the parser description.
    pub line: String,
    /// Byte range of the offending part within `line`.
    pub span: Range<usize>,
}

impl Location {
    pub fn new(line: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            line: line.into(),
            span,
        }
    }
}

/// Errors from compiling or running a numtext parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Token text does not satisfy the token grammar.
    #[error("invalid token `{token}`")]
    Token {
        token: String,
        location: Option<Location>,
    },

    /// A line is malformed as a whole.
    #[error("invalid line: {reason}")]
    Line { reason: String, location: Location },

    /// A section is missing or unusable.
    #[error("invalid section: {0}")]
    Section(String),

    /// The regex engine rejected an assembled pattern.
    #[error("regex engine rejected pattern: {message}")]
    Regex { pattern: String, message: String },

    /// The regex engine gave up while matching.
    #[error("matching failed: {0}")]
    Match(String),

    /// Key access into a capture list that does not hold exactly one element.
    #[error("cannot pass key `{key}` through a capture list of length {len}")]
    ThruList { key: String, len: usize },
}

impl Error {
    /// Location inside the offending line, if the error has one.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Error::Token { location, .. } => location.as_ref(),
            Error::Line { location, .. } => Some(location),
            _ => None,
        }
    }
}

/// Result type for compile and capture operations.
pub type Result<T> = std::result::Result<T, Error>;
