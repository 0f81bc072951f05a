//! Section/parser compiler.
//!
//! A [`Parser`] is a static head/body/tail description. Each section is
//! absent, one line, a line sequence, or a nested parser. The full pattern is
//!
//! ```text
//! (?P<head>H)\n?  (?P<body>B(?:\n?B)*)  \n?(?P<tail>T)
//! ```
//!
//! with non-capturing wrappers for nested parsers. Line captures are never
//! present in the full pattern; the engine re-matches section spans with
//! captures enabled.

use serde::{Deserialize, Serialize};

use numtext_core::SectionField;
use numtext_core::grammar::LINE_BREAK_RX;

use crate::line::{CompiledLines, compile_line, compile_lines};
use crate::{Error, Result};

/// One head/body/tail slot of a [`Parser`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section {
    #[default]
    Absent,
    Line(String),
    Lines(Vec<String>),
    Parser(Box<Parser>),
}

/// A section lowered to regex text, or the nested parser to recurse into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionPattern<'p> {
    Absent,
    Lines(CompiledLines),
    Parser(&'p Parser),
}

impl Section {
    pub fn is_absent(&self) -> bool {
        matches!(self, Section::Absent)
    }

    /// Compile the section's own lines. Group numbering starts at 0.
    pub fn compile(&self, allow_capture: bool) -> Result<SectionPattern<'_>> {
        match self {
            Section::Absent => Ok(SectionPattern::Absent),
            Section::Line(line) => Ok(SectionPattern::Lines(
                compile_line(line, allow_capture, 0)?.into(),
            )),
            Section::Lines(lines) => Ok(SectionPattern::Lines(compile_lines(
                lines,
                allow_capture,
                0,
            )?)),
            Section::Parser(parser) => Ok(SectionPattern::Parser(parser)),
        }
    }
}

impl SectionPattern<'_> {
    /// Regex for the section inside an enclosing pattern, and whether the
    /// section may be skipped entirely.
    fn outline(&self) -> Result<Option<(String, bool)>> {
        match self {
            SectionPattern::Absent => Ok(None),
            SectionPattern::Lines(lines) => Ok(Some((lines.regex.clone(), lines.all_optional))),
            SectionPattern::Parser(parser) => Ok(Some((parser.pattern(false)?, false))),
        }
    }
}

impl From<&str> for Section {
    fn from(line: &str) -> Self {
        Section::Line(line.to_string())
    }
}

impl From<String> for Section {
    fn from(line: String) -> Self {
        Section::Line(line)
    }
}

impl From<Vec<String>> for Section {
    fn from(lines: Vec<String>) -> Self {
        Section::Lines(lines)
    }
}

impl From<Vec<&str>> for Section {
    fn from(lines: Vec<&str>) -> Self {
        Section::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Section {
    fn from(lines: &[&str]) -> Self {
        Section::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Section {
    fn from(lines: [&str; N]) -> Self {
        Section::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

impl From<Parser> for Section {
    fn from(parser: Parser) -> Self {
        Section::Parser(Box::new(parser))
    }
}

impl<S: Into<Section>> From<Option<S>> for Section {
    fn from(section: Option<S>) -> Self {
        section.map_or(Section::Absent, Into::into)
    }
}

/// A validated head/body/tail description.
///
/// Construction compiles the full pattern once and fails on any error, so
/// a `Parser` value always describes a usable pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ParserDesc", into = "ParserDesc")]
pub struct Parser {
    head: Section,
    body: Section,
    tail: Section,
}

/// Unvalidated serde shape of a [`Parser`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ParserDesc {
    #[serde(default)]
    head: Section,
    #[serde(default)]
    body: Section,
    #[serde(default)]
    tail: Section,
}

impl TryFrom<ParserDesc> for Parser {
    type Error = Error;

    fn try_from(desc: ParserDesc) -> Result<Self> {
        Parser::new(desc.head, desc.body, desc.tail)
    }
}

impl From<Parser> for ParserDesc {
    fn from(parser: Parser) -> Self {
        ParserDesc {
            head: parser.head,
            body: parser.body,
            tail: parser.tail,
        }
    }
}

impl Parser {
    pub fn new(
        head: impl Into<Section>,
        body: impl Into<Section>,
        tail: impl Into<Section>,
    ) -> Result<Self> {
        let parser = Self {
            head: head.into(),
            body: body.into(),
            tail: tail.into(),
        };
        parser.validate()?;
        Ok(parser)
    }

    pub fn builder() -> ParserBuilder {
        ParserBuilder::default()
    }

    pub fn head(&self) -> &Section {
        &self.head
    }

    pub fn body(&self) -> &Section {
        &self.body
    }

    pub fn tail(&self) -> &Section {
        &self.tail
    }

    pub fn section(&self, field: SectionField) -> &Section {
        match field {
            SectionField::Head => &self.head,
            SectionField::Body => &self.body,
            SectionField::Tail => &self.tail,
        }
    }

    /// Replace the body and re-validate.
    ///
    /// On failure the previous body is restored and the error returned.
    pub fn set_body(&mut self, body: impl Into<Section>) -> Result<()> {
        let previous = std::mem::replace(&mut self.body, body.into());
        if let Err(err) = self.validate() {
            self.body = previous;
            return Err(err);
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let pattern = self.pattern(true)?;
        log::trace!("parser validated: {pattern}");
        Ok(())
    }

    /// Assemble the full regex.
    ///
    /// With `capture_sections` the head, body and tail regions are named
    /// groups; otherwise they are plain non-capturing groups, which is how
    /// nested parsers are embedded.
    pub fn pattern(&self, capture_sections: bool) -> Result<String> {
        let wrap = |field: SectionField, inner: &str, optional: bool| {
            let open = if capture_sections {
                format!("(?P<{}>", field.name())
            } else {
                "(?:".to_string()
            };
            let skip = if optional { "?" } else { "" };
            format!("{open}{inner}){skip}")
        };

        let mut pattern = String::new();

        if let Some((head, optional)) = self.head.compile(false)?.outline()? {
            pattern.push_str(&wrap(SectionField::Head, &head, optional));
            pattern.push_str(LINE_BREAK_RX);
        }

        let Some((body, _)) = self.body.compile(false)?.outline()? else {
            return Err(Error::Section("body is required".to_string()));
        };
        let blocks = format!("{body}(?:{LINE_BREAK_RX}{body})*");
        pattern.push_str(&wrap(SectionField::Body, &blocks, false));

        if let Some((tail, optional)) = self.tail.compile(false)?.outline()? {
            pattern.push_str(LINE_BREAK_RX);
            pattern.push_str(&wrap(SectionField::Tail, &tail, optional));
        }

        Ok(pattern)
    }
}

/// Builder for [`Parser`]; sections default to absent.
#[derive(Debug, Clone, Default)]
pub struct ParserBuilder {
    head: Section,
    body: Section,
    tail: Section,
}

impl ParserBuilder {
    pub fn with_head(mut self, head: impl Into<Section>) -> Self {
        self.head = head.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<Section>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_tail(mut self, tail: impl Into<Section>) -> Self {
        self.tail = tail.into();
        self
    }

    pub fn build(self) -> Result<Parser> {
        Parser::new(self.head, self.body, self.tail)
    }
}
