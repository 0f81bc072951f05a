//! numtext: extract numerical text with a compact pattern mini-language.
//!
//! A [`Parser`] describes a report block as head, body and tail lines of
//! mini-language tokens. It compiles to one regex, and the capture engine
//! walks the matches back into nested [`Value`]s.
//!
//! # Example
//!
//! ```
//! use numtext::{CaptureExt, Parser, Section};
//!
//! let parser = Parser::new("@.$data", "#.+i #!+.f", Section::Absent)?;
//! let text = "$data\n1  0.5 1.5\n2  2.5 3.5\n";
//!
//! let body = parser.capture_body(text)?;
//! assert_eq!(body[0].as_array().map(|rows| rows.len()), Some(2));
//! # Ok::<(), numtext::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(test)]
mod scenarios_tests;

pub use numtext_compiler::{
    CaptureSlot, CompiledLine, CompiledLines, Error, ErrorPrinter, GroupCounter, Location, Parser,
    ParserBuilder, Result, Section, SectionPattern, Token, compile_line, compile_lines,
};
pub use numtext_core::{
    ContentKind, NumberKind, Quantity, SectionField, Sign, SpaceAfter, number_pattern,
    std_wordify, word_close, word_open, wordify,
};
pub use numtext_engine::{
    CaptureExt, CaptureList, Extractor, MatchLimits, SCAN_STEPS_PER_BYTE, Value, column_stack_2d,
};

/// Grammar constants and regex vocabulary.
pub mod grammar {
    pub use numtext_core::grammar::*;
}
