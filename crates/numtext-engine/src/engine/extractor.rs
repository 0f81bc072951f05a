//! Structured capture.
//!
//! An [`Extractor`] holds every regex a parser needs, compiled once: the
//! full pattern with named head/body/tail groups, plus a capturing matcher
//! per section (or a nested extractor for parser sections). Capturing runs
//! the full pattern over the document, then re-matches each section span
//! with the section's own matcher.
//!
//! Search budgets scale with the searched span (see [`MatchLimits`]), so a
//! long document never runs out of budget by scanning alone.

use fancy_regex::{Captures, Regex, RegexBuilder};

use numtext_compiler::{CaptureSlot, Error, Parser, Result, Section, SectionPattern};
use numtext_core::SectionField;

use super::limits::MatchLimits;
use super::list::CaptureList;
use super::value::Value;

/// Compiled matcher for one parser.
#[derive(Debug)]
pub struct Extractor {
    regex: Searcher,
    head: SectionMatcher,
    body: SectionMatcher,
    tail: SectionMatcher,
    limits: MatchLimits,
}

#[derive(Debug)]
enum SectionMatcher {
    Absent,
    Lines(LineMatcher),
    Parser(Box<Extractor>),
}

/// Line or line-sequence regex with its capture slots.
#[derive(Debug)]
struct LineMatcher {
    regex: Searcher,
    slots: Vec<CaptureSlot>,
}

/// Spans up to this length reuse the regex compiled with the extractor.
const PREBUILT_SPAN: usize = 64 * 1024;

/// A regex plus the limits to rebuild it with for longer spans.
#[derive(Debug)]
struct Searcher {
    regex: Regex,
    limits: MatchLimits,
}

impl Extractor {
    pub fn new(parser: &Parser) -> Result<Self> {
        Self::with_limits(parser, MatchLimits::default())
    }

    pub fn with_limits(parser: &Parser, limits: MatchLimits) -> Result<Self> {
        let pattern = parser.pattern(true)?;
        Ok(Self {
            regex: Searcher::new(&pattern, limits)?,
            head: SectionMatcher::compile(parser.head(), limits)?,
            body: SectionMatcher::compile(parser.body(), limits)?,
            tail: SectionMatcher::compile(parser.tail(), limits)?,
            limits,
        })
    }

    /// The full pattern, with named section groups.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn limits(&self) -> MatchLimits {
        self.limits
    }

    /// Body captures, one entry per top-level match.
    ///
    /// A line body yields an array of rows; a nested-parser body yields the
    /// nested parser's own body entries for the span.
    pub fn capture_body(&self, text: &str) -> Result<CaptureList> {
        let mut entries = Vec::new();
        for caps in self.blocks(text)? {
            entries.push(self.body.capture_body(section_span(&caps, SectionField::Body))?);
        }
        log::debug!("captured {} body block(s)", entries.len());
        Ok(CaptureList::new(entries))
    }

    /// Head/body/tail records, one per top-level match.
    ///
    /// Absent or unmatched sections are `Null`.
    pub fn capture_struct(&self, text: &str) -> Result<CaptureList> {
        let mut entries = Vec::new();
        for caps in self.blocks(text)? {
            let mut fields = Vec::with_capacity(SectionField::ALL.len());
            for field in SectionField::ALL {
                let value = self
                    .section(field)
                    .capture_struct(section_span(&caps, field))?;
                fields.push((field.name().to_string(), value));
            }
            entries.push(Value::Object(fields));
        }
        log::debug!("captured {} structured block(s)", entries.len());
        Ok(CaptureList::new(entries))
    }

    /// Same as [`capture_struct`](Self::capture_struct).
    pub fn capture_parser(&self, text: &str) -> Result<CaptureList> {
        self.capture_struct(text)
    }

    fn section(&self, field: SectionField) -> &SectionMatcher {
        match field {
            SectionField::Head => &self.head,
            SectionField::Body => &self.body,
            SectionField::Tail => &self.tail,
        }
    }

    /// Non-empty matches of the full pattern, in document order.
    fn blocks<'t>(&self, text: &'t str) -> Result<Vec<Captures<'t>>> {
        let blocks = self.regex.captures(text)?;
        for caps in &blocks {
            if let Some(whole) = caps.get(0) {
                log::trace!("block at {}..{}", whole.start(), whole.end());
            }
        }
        Ok(blocks)
    }
}

impl Searcher {
    fn new(pattern: &str, limits: MatchLimits) -> Result<Self> {
        Ok(Self {
            regex: build_regex(pattern, limits.budget_for(PREBUILT_SPAN))?,
            limits,
        })
    }

    fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Non-empty matches in `text`, in order.
    fn captures<'t>(&self, text: &'t str) -> Result<Vec<Captures<'t>>> {
        let scaled;
        let regex = if text.len() <= PREBUILT_SPAN {
            &self.regex
        } else {
            log::debug!("rebuilding matcher for a {} byte span", text.len());
            scaled = build_regex(self.regex.as_str(), self.limits.budget_for(text.len()))?;
            &scaled
        };

        let mut matches = Vec::new();
        for caps in regex.captures_iter(text) {
            let caps = caps.map_err(match_error)?;
            if caps.get(0).is_some_and(|m| m.start() < m.end()) {
                matches.push(caps);
            }
        }
        Ok(matches)
    }
}

impl SectionMatcher {
    fn compile(section: &Section, limits: MatchLimits) -> Result<Self> {
        match section.compile(true)? {
            SectionPattern::Absent => Ok(SectionMatcher::Absent),
            SectionPattern::Lines(lines) => Ok(SectionMatcher::Lines(LineMatcher {
                regex: Searcher::new(&lines.regex, limits)?,
                slots: lines.slots,
            })),
            SectionPattern::Parser(parser) => Ok(SectionMatcher::Parser(Box::new(
                Extractor::with_limits(parser, limits)?,
            ))),
        }
    }

    fn capture_body(&self, span: Option<&str>) -> Result<Value> {
        let Some(span) = span.filter(|s| !s.is_empty()) else {
            return Ok(Value::Null);
        };
        match self {
            SectionMatcher::Absent => Ok(Value::Null),
            SectionMatcher::Lines(lines) => lines.rows(span),
            SectionMatcher::Parser(inner) => Ok(inner.capture_body(span)?.into_value()),
        }
    }

    fn capture_struct(&self, span: Option<&str>) -> Result<Value> {
        let Some(span) = span.filter(|s| !s.is_empty()) else {
            return Ok(Value::Null);
        };
        match self {
            SectionMatcher::Absent => Ok(Value::Null),
            SectionMatcher::Lines(lines) => lines.rows(span),
            SectionMatcher::Parser(inner) => Ok(inner.capture_struct(span)?.into_value()),
        }
    }
}

impl LineMatcher {
    /// One row per non-empty match, one entry per captured group.
    ///
    /// Repeated captures expand into their whitespace-separated values;
    /// groups that did not participate are `Null`.
    fn rows(&self, text: &str) -> Result<Value> {
        let mut rows = Vec::new();
        for caps in self.regex.captures(text)? {
            let mut row = Vec::with_capacity(self.slots.len());
            for slot in &self.slots {
                match caps.name(&slot.name) {
                    None => row.push(Value::Null),
                    Some(m) if slot.quantity.is_repeated() => {
                        row.extend(m.as_str().split_whitespace().map(Value::from));
                    }
                    Some(m) => row.push(Value::from(m.as_str())),
                }
            }
            rows.push(Value::Array(row));
        }
        Ok(Value::Array(rows))
    }
}

fn section_span<'t>(caps: &Captures<'t>, field: SectionField) -> Option<&'t str> {
    caps.name(field.name()).map(|m| m.as_str())
}

fn build_regex(pattern: &str, budget: usize) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .backtrack_limit(budget)
        .build()
        .map_err(|err| Error::Regex {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })
}

fn match_error(err: fancy_regex::Error) -> Error {
    Error::Match(err.to_string())
}

/// Capture methods directly on [`Parser`].
///
/// Each call compiles a fresh [`Extractor`]; build one explicitly to reuse
/// it across documents.
pub trait CaptureExt {
    fn capture_body(&self, text: &str) -> Result<CaptureList>;

    fn capture_struct(&self, text: &str) -> Result<CaptureList>;

    fn capture_parser(&self, text: &str) -> Result<CaptureList> {
        self.capture_struct(text)
    }
}

impl CaptureExt for Parser {
    fn capture_body(&self, text: &str) -> Result<CaptureList> {
        Extractor::new(self)?.capture_body(text)
    }

    fn capture_struct(&self, text: &str) -> Result<CaptureList> {
        Extractor::new(self)?.capture_struct(text)
    }
}
