//! Error rendering.
//!
//! Errors that carry a [`Location`](crate::Location) are drawn against the
//! offending line of the parser description; the rest print as one line.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::Error;

/// Builder for rendering an [`Error`].
pub struct ErrorPrinter<'e> {
    error: &'e Error,
    path: Option<&'e str>,
    colored: bool,
}

impl<'e> ErrorPrinter<'e> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            path: None,
            colored: false,
        }
    }

    /// Name shown for the source, e.g. the description file.
    pub fn path(mut self, path: &'e str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(location) = self.error.location() else {
            return write!(w, "error: {}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let title = self.error.to_string();
        let label = label(self.error);
        let source = location.line.as_str();

        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(location.span.clone(), source.len()))
                .label(&label),
        );
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report = vec![Level::ERROR.primary_title(&title).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

fn label(error: &Error) -> String {
    match error {
        Error::Token { .. } => "not a valid token".to_string(),
        Error::Line { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}

fn adjust_range(range: Range<usize>, limit: usize) -> Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range
}

impl Error {
    pub fn printer(&self) -> ErrorPrinter<'_> {
        ErrorPrinter::new(self)
    }
}
