//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::capture::CaptureArgs;
use crate::commands::loader::ParserArgs;
use crate::commands::pattern::PatternArgs;

pub struct PatternParams {
    pub parser: ParserArgs,
    pub bare: bool,
    pub color: ColorChoice,
}

impl PatternParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            parser: parser_args(m),
            bare: m.get_flag("bare"),
            color: parse_color(m),
        }
    }
}

impl From<PatternParams> for PatternArgs {
    fn from(p: PatternParams) -> Self {
        Self {
            parser: p.parser,
            bare: p.bare,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CaptureParams {
    pub parser: ParserArgs,
    pub document: PathBuf,
    pub structured: bool,
    pub compact: bool,
    pub backtrack_limit: usize,
    pub color: ColorChoice,
}

impl CaptureParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            parser: parser_args(m),
            document: m
                .get_one::<PathBuf>("document")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            structured: m.get_flag("struct"),
            compact: m.get_flag("compact"),
            backtrack_limit: m
                .get_one::<usize>("backtrack_limit")
                .copied()
                .unwrap_or(1_000_000),
            color: parse_color(m),
        }
    }
}

impl From<CaptureParams> for CaptureArgs {
    fn from(p: CaptureParams) -> Self {
        Self {
            parser: p.parser,
            document: p.document,
            structured: p.structured,
            pretty: !p.compact,
            backtrack_limit: p.backtrack_limit,
            color: p.color.should_colorize(),
        }
    }
}

fn parser_args(m: &ArgMatches) -> ParserArgs {
    ParserArgs {
        head: lines(m, "head"),
        body: lines(m, "body"),
        tail: lines(m, "tail"),
        spec: m.get_one::<PathBuf>("spec").cloned(),
    }
}

fn lines(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
