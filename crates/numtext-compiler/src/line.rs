//! Line compiler.
//!
//! A line regex always spans one whole physical line:
//!
//! ```text
//! LINE_START [ \t]* tok (sep tok)* [ \t]* LINE_END
//! ```
//!
//! Optional lines wrap all of it, boundary assertions included, in `(?:...)?`.
//! Capture groups are numbered from a caller-supplied start so consecutive
//! lines of a section never collide.

use numtext_core::grammar::{
    LINE_BREAK_RX, LINE_END, LINE_START, SPACE_OPTIONAL_RX, WORD_CHARS, group_name,
};
use numtext_core::{ContentKind, Quantity, word_close, word_open};

use crate::lexer::split_line;
use crate::token::{GroupCounter, Token};
use crate::{Error, Location, Result};

/// One capture group of a compiled line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSlot {
    /// Group name in the regex (`g{index}`).
    pub name: String,
    pub index: usize,
    pub content: ContentKind,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledLine {
    pub regex: String,
    /// First group index not used by this line.
    pub next_group: usize,
    pub optional: bool,
    pub slots: Vec<CaptureSlot>,
}

/// A sequence of lines compiled with one running group counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledLines {
    pub regex: String,
    pub next_group: usize,
    /// Every line is optional, so the sequence may match nothing at all.
    pub all_optional: bool,
    pub slots: Vec<CaptureSlot>,
}

impl From<CompiledLine> for CompiledLines {
    fn from(line: CompiledLine) -> Self {
        Self {
            regex: line.regex,
            next_group: line.next_group,
            all_optional: line.optional,
            slots: line.slots,
        }
    }
}

/// Compile one line of mini-language tokens.
pub fn compile_line(text: &str, allow_capture: bool, start_group: usize) -> Result<CompiledLine> {
    let pieces = split_line(text)?;

    let mut tokens = Vec::with_capacity(pieces.len());
    for piece in &pieces {
        let token = Token::compile(&piece.text, allow_capture).map_err(|err| match err {
            Error::Token { token, .. } => Error::Token {
                token,
                location: Some(Location::new(text, piece.span.clone())),
            },
            other => other,
        })?;
        tokens.push(token);
    }

    let optional = tokens.first().is_some_and(Token::is_optional_line);
    let skip = usize::from(optional);
    let body = &tokens[skip..];

    if let Some(pos) = body.iter().position(Token::is_optional_line) {
        return Err(Error::Line {
            reason: "optional-line marker `?` must be the first token".to_string(),
            location: Location::new(text, pieces[pos + skip].span.clone()),
        });
    }

    let mut groups = GroupCounter::starting_at(start_group);
    let mut slots = Vec::new();
    let mut regex = String::from(LINE_START);
    regex.push_str(SPACE_OPTIONAL_RX);

    let mut prev: Option<&Token> = None;
    for (i, token) in body.iter().enumerate() {
        let bounded = token.is_word_bounded();
        if bounded && !prev.is_some_and(Token::joins_next) {
            regex.push_str(&word_open(WORD_CHARS));
        }

        let (fragment, index) = token.emit(&mut groups);
        regex.push_str(&fragment);
        if let Some(index) = index {
            slots.push(CaptureSlot {
                name: group_name(index),
                index,
                content: token.content(),
                quantity: token.quantity(),
            });
        }

        if bounded && !token.joins_next() {
            regex.push_str(&word_close(WORD_CHARS));
        }
        if i + 1 < body.len() {
            regex.push_str(token.space_after().separator());
        }
        prev = Some(token);
    }

    if !body.is_empty() {
        regex.push_str(SPACE_OPTIONAL_RX);
    }
    regex.push_str(LINE_END);

    if optional {
        regex = format!("(?:{regex})?");
    }

    log::trace!("line {text:?} compiled to {regex}");

    Ok(CompiledLine {
        regex,
        next_group: groups.peek(),
        optional,
        slots,
    })
}

/// Compile a sequence of lines, joined by optional line breaks.
pub fn compile_lines<S: AsRef<str>>(
    lines: &[S],
    allow_capture: bool,
    start_group: usize,
) -> Result<CompiledLines> {
    if lines.is_empty() {
        return Err(Error::Section("line sequence is empty".to_string()));
    }

    let mut next_group = start_group;
    let mut regexes = Vec::with_capacity(lines.len());
    let mut slots = Vec::new();
    let mut all_optional = true;

    for line in lines {
        let compiled = compile_line(line.as_ref(), allow_capture, next_group)?;
        next_group = compiled.next_group;
        all_optional &= compiled.optional;
        slots.extend(compiled.slots);
        regexes.push(compiled.regex);
    }

    Ok(CompiledLines {
        regex: regexes.join(LINE_BREAK_RX),
        next_group,
        all_optional,
        slots,
    })
}
