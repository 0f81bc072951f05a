//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so both subcommands describe the
//! parser the same way.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Head line (--head, repeatable).
pub fn head_arg() -> Arg {
    Arg::new("head")
        .long("head")
        .value_name("LINE")
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .help("Head line; repeat for a line sequence")
}

/// Body line (--body, repeatable).
pub fn body_arg() -> Arg {
    Arg::new("body")
        .long("body")
        .value_name("LINE")
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .required_unless_present("spec")
        .help("Body line; repeat for a line sequence")
}

/// Tail line (--tail, repeatable).
pub fn tail_arg() -> Arg {
    Arg::new("tail")
        .long("tail")
        .value_name("LINE")
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .help("Tail line; repeat for a line sequence")
}

/// JSON parser description (--spec).
pub fn spec_arg() -> Arg {
    Arg::new("spec")
        .long("spec")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with_all(["head", "body", "tail"])
        .help("Load the parser from a JSON description")
}

/// Omit section groups (--bare).
pub fn bare_arg() -> Arg {
    Arg::new("bare")
        .long("bare")
        .action(ArgAction::SetTrue)
        .help("Print the pattern without named head/body/tail groups")
}

/// Document to capture from (positional, `-` for stdin).
pub fn document_arg() -> Arg {
    Arg::new("document")
        .value_name("DOCUMENT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Document to read, or - for stdin")
}

/// Structured output (--struct).
pub fn struct_arg() -> Arg {
    Arg::new("struct")
        .long("struct")
        .action(ArgAction::SetTrue)
        .help("Capture head/body/tail records instead of body rows")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}

/// Regex backtracking budget (--backtrack-limit).
pub fn backtrack_limit_arg() -> Arg {
    Arg::new("backtrack_limit")
        .long("backtrack-limit")
        .value_name("N")
        .default_value("1000000")
        .value_parser(value_parser!(usize))
        .help("Backtracking steps allowed per match attempt")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}
