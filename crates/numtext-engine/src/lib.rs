//! Structured capture engine for numtext.
//!
//! This crate runs compiled parsers against plain-text documents and
//! returns the captured values as nested lists and head/body/tail records.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    CaptureExt, CaptureList, Extractor, MatchLimits, SCAN_STEPS_PER_BYTE, Value, column_stack_2d,
};
