//! Token compiler.
//!
//! One token string (already unquoted by the lexer) becomes a typed [`Token`]
//! plus the regex fragment it stands for. Capture groups are assigned in a
//! second step: the line compiler hands a [`GroupCounter`] to [`Token::emit`],
//! which numbers and wraps the fragment. Tokens never see their position.
//!
//! Grammar, per token:
//! - `?` optional-line marker
//! - `~` or `~!` any content
//! - `@` space? `!`? quantity literal-text
//! - `&` space? `!`? quantity
//! - `#` space? `!`? quantity sign kind

use numtext_core::grammar::{
    ANY_RX, CAPTURE, MISC_RX, SPACE_REQUIRED_RX, escape_literal, group_name,
};
use numtext_core::{ContentKind, NumberKind, Quantity, Sign, SpaceAfter, number_pattern};

use crate::{Error, Result};

/// Running capture-group index shared by the tokens of a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupCounter {
    next: usize,
}

impl GroupCounter {
    pub fn starting_at(next: usize) -> Self {
        Self { next }
    }

    /// Index the next assigned group will get.
    pub fn peek(&self) -> usize {
        self.next
    }

    /// Take the next index.
    pub fn assign(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }
}

/// A compiled mini-language token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    content: ContentKind,
    capture: bool,
    quantity: Quantity,
    space_after: SpaceAfter,
    number: Option<(NumberKind, Sign)>,
    literal: Option<String>,
    fragment: String,
    needs_group: bool,
}

/// Decoded token fields, before any regex is built.
struct Fields {
    content: ContentKind,
    capture: bool,
    quantity: Quantity,
    space_after: SpaceAfter,
    number: Option<(NumberKind, Sign)>,
    literal: Option<String>,
}

impl Token {
    /// Parse `text` and build its fragment.
    ///
    /// With `allow_capture == false` a `!` flag is accepted but ignored; the
    /// token then never asks for a group.
    pub fn compile(text: &str, allow_capture: bool) -> Result<Self> {
        let fields = decode(text).ok_or_else(|| Error::Token {
            token: text.to_string(),
            location: None,
        })?;

        let fragment = build_fragment(&fields);
        Ok(Self {
            text: text.to_string(),
            content: fields.content,
            capture: fields.capture,
            quantity: fields.quantity,
            space_after: fields.space_after,
            number: fields.number,
            literal: fields.literal,
            fragment,
            needs_group: fields.capture && allow_capture,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn content(&self) -> ContentKind {
        self.content
    }

    /// Whether the token text carries the capture flag.
    pub fn is_capture(&self) -> bool {
        self.capture
    }

    /// Whether [`emit`](Self::emit) will wrap the fragment in a group.
    pub fn needs_group(&self) -> bool {
        self.needs_group
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn space_after(&self) -> SpaceAfter {
        self.space_after
    }

    pub fn number(&self) -> Option<NumberKind> {
        self.number.map(|(kind, _)| kind)
    }

    pub fn sign(&self) -> Option<Sign> {
        self.number.map(|(_, sign)| sign)
    }

    /// Literal text of a string token, unescaped.
    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    /// Regex fragment without any group wrapping.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn is_optional_line(&self) -> bool {
        self.content == ContentKind::OptionalLine
    }

    /// Number tokens get word-boundary assertions from the line compiler.
    pub fn is_word_bounded(&self) -> bool {
        self.content == ContentKind::Number
    }

    /// Whether the token is glued to whatever follows it.
    ///
    /// Only value tokens count; `~` reports `Prohibited` spacing but never
    /// suppresses a neighbour's boundary.
    pub fn joins_next(&self) -> bool {
        self.content.takes_flags() && self.space_after == SpaceAfter::Prohibited
    }

    /// Final regex text, assigning a group index from `groups` if needed.
    pub fn emit(&self, groups: &mut GroupCounter) -> (String, Option<usize>) {
        if !self.needs_group {
            return (self.fragment.clone(), None);
        }
        let index = groups.assign();
        let regex = format!("(?P<{}>{})", group_name(index), self.fragment);
        (regex, Some(index))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

fn decode(text: &str) -> Option<Fields> {
    let mut chars = text.chars();
    let content = ContentKind::from_marker(chars.next()?)?;
    let rest = chars.as_str();

    match content {
        ContentKind::OptionalLine => rest.is_empty().then_some(Fields {
            content,
            capture: false,
            quantity: Quantity::Single,
            space_after: SpaceAfter::Prohibited,
            number: None,
            literal: None,
        }),
        ContentKind::Any => {
            let capture = match rest {
                "" => false,
                r if r.len() == 1 && r.starts_with(CAPTURE) => true,
                _ => return None,
            };
            Some(Fields {
                content,
                capture,
                quantity: Quantity::Single,
                space_after: SpaceAfter::Prohibited,
                number: None,
                literal: None,
            })
        }
        ContentKind::String | ContentKind::Misc | ContentKind::Number => {
            decode_value(content, rest)
        }
    }
}

fn decode_value(content: ContentKind, mut rest: &str) -> Option<Fields> {
    let mut space_after = SpaceAfter::default();
    if let Some(c) = rest.chars().next()
        && let Some(flag) = SpaceAfter::from_flag(c)
    {
        space_after = flag;
        rest = &rest[c.len_utf8()..];
    }

    let capture = match rest.strip_prefix(CAPTURE) {
        Some(after) => {
            rest = after;
            true
        }
        None => false,
    };

    let code = rest.chars().next()?;
    let quantity = Quantity::from_code(code)?;
    rest = &rest[code.len_utf8()..];

    let mut fields = Fields {
        content,
        capture,
        quantity,
        space_after,
        number: None,
        literal: None,
    };

    match content {
        ContentKind::String => {
            if rest.is_empty() {
                return None;
            }
            fields.literal = Some(rest.to_string());
        }
        ContentKind::Misc => {
            if !rest.is_empty() {
                return None;
            }
        }
        ContentKind::Number => {
            let mut codes = rest.chars();
            let sign = Sign::from_code(codes.next()?)?;
            let kind = NumberKind::from_code(codes.next()?)?;
            if codes.next().is_some() {
                return None;
            }
            fields.number = Some((kind, sign));
        }
        ContentKind::Any | ContentKind::OptionalLine => return None,
    }

    Some(fields)
}

fn build_fragment(fields: &Fields) -> String {
    let repeated = fields.quantity.is_repeated();
    match fields.content {
        ContentKind::OptionalLine => String::new(),
        ContentKind::Any => ANY_RX.to_string(),
        ContentKind::String => {
            let literal = escape_literal(fields.literal.as_deref().unwrap_or_default());
            if repeated {
                format!("({literal})+")
            } else {
                literal
            }
        }
        ContentKind::Misc => {
            if repeated {
                format!("({MISC_RX})+")
            } else {
                MISC_RX.to_string()
            }
        }
        ContentKind::Number => {
            let Some((kind, sign)) = fields.number else {
                return String::new();
            };
            let single = number_pattern(kind, sign);
            if repeated {
                format!("{single}({SPACE_REQUIRED_RX}{single})*")
            } else {
                single.to_string()
            }
        }
    }
}
