//! Parser and document loading shared by the subcommands.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use numtext::{Parser, Section};
use serde::Deserialize;
use thiserror::Error;

/// Parser description as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserArgs {
    pub head: Vec<String>,
    pub body: Vec<String>,
    pub tail: Vec<String>,
    pub spec: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read `{path}`: {source}")]
    Read { path: String, source: io::Error },

    #[error("invalid parser description `{path}`: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("{source}")]
    Numtext {
        path: Option<String>,
        source: numtext::Error,
    },

    #[error("cannot serialize result: {0}")]
    Output(serde_json::Error),
}

impl CliError {
    /// Description errors get a snippet; everything else is one line.
    pub fn render(&self, colored: bool) -> String {
        match self {
            CliError::Numtext { path, source } => {
                let mut printer = source.printer().colored(colored);
                if let Some(path) = path {
                    printer = printer.path(path);
                }
                printer.render()
            }
            other => format!("error: {other}"),
        }
    }
}

impl From<numtext::Error> for CliError {
    fn from(source: numtext::Error) -> Self {
        CliError::Numtext { path: None, source }
    }
}

/// Top-level sections of a JSON description.
///
/// Built by hand so errors in top-level lines keep their location.
#[derive(Debug, Deserialize)]
struct Description {
    #[serde(default)]
    head: Section,
    #[serde(default)]
    body: Section,
    #[serde(default)]
    tail: Section,
}

pub fn load_parser(args: &ParserArgs) -> Result<Parser, CliError> {
    let parser = match &args.spec {
        Some(path) => load_spec(path)?,
        None => Parser::new(
            lines_section(&args.head),
            lines_section(&args.body),
            lines_section(&args.tail),
        )?,
    };
    log::debug!("loaded parser: {}", parser.pattern(true)?);
    Ok(parser)
}

fn load_spec(path: &Path) -> Result<Parser, CliError> {
    let shown = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: shown.clone(),
        source,
    })?;
    let desc: Description = serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: shown.clone(),
        source,
    })?;
    Parser::new(desc.head, desc.body, desc.tail).map_err(|source| CliError::Numtext {
        path: Some(shown),
        source,
    })
}

fn lines_section(lines: &[String]) -> Section {
    match lines {
        [] => Section::Absent,
        [line] => Section::Line(line.clone()),
        _ => Section::Lines(lines.to_vec()),
    }
}

/// Read a document; `-` reads stdin.
pub fn read_document(path: &Path) -> Result<String, CliError> {
    let shown = path.display().to_string();
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: shown,
                source,
            })?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: shown,
        source,
    })
}
