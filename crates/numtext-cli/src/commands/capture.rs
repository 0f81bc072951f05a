use std::path::PathBuf;

use numtext::{Extractor, MatchLimits};

use super::loader::{CliError, ParserArgs, load_parser, read_document};

pub struct CaptureArgs {
    pub parser: ParserArgs,
    pub document: PathBuf,
    pub structured: bool,
    pub pretty: bool,
    pub backtrack_limit: usize,
    pub color: bool,
}

pub fn run(args: CaptureArgs) {
    match capture(&args) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{}", e.render(args.color));
            std::process::exit(1);
        }
    }
}

/// Captured result as JSON text.
pub fn capture(args: &CaptureArgs) -> Result<String, CliError> {
    let parser = load_parser(&args.parser)?;
    let text = read_document(&args.document)?;

    let limits = MatchLimits::new().backtrack_limit(args.backtrack_limit);
    let extractor = Extractor::with_limits(&parser, limits)?;
    let result = if args.structured {
        extractor.capture_struct(&text)?
    } else {
        extractor.capture_body(&text)?
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    output.map_err(CliError::Output)
}
