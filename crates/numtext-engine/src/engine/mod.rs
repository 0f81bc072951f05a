//! Capture engine for compiled numtext parsers.
//!
//! Runs a parser's full pattern against a document and walks the matches
//! back into nested [`Value`] trees.

mod extractor;
mod limits;
mod list;
mod stack;
mod value;

#[cfg(test)]
mod extractor_tests;
#[cfg(test)]
mod value_tests;

pub use extractor::{CaptureExt, Extractor};
pub use limits::{MatchLimits, SCAN_STEPS_PER_BYTE};
pub use list::CaptureList;
pub use stack::column_stack_2d;
pub use value::Value;
