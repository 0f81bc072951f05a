#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core vocabulary of the numtext mini-language.
//!
//! Three layers, all free of any regex engine:
//! - **Grammar**: reserved marker characters and the shared regex pieces
//! - **Kinds**: content, quantity and spacing enums decoded from token flags
//! - **Patterns**: the number-pattern table and the word-boundary wrapper

pub mod boundary;
pub mod grammar;
pub mod kinds;
pub mod number;


pub use boundary::{std_wordify, word_close, word_open, wordify};
pub use grammar::SectionField;
pub use kinds::{ContentKind, Quantity, SpaceAfter};
pub use number::{NumberKind, Sign, number_pattern};
