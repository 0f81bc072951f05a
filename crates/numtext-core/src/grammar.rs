//! Reserved characters and regex vocabulary of the mini-language.
//!
//! Every literal the compilers emit or recognize lives here, so the token
//! grammar and the regex shapes have a single owner.

/// Optional-line marker; legal only as the first token of a line.
pub const OPTIONAL_LINE: char = '?';
/// Arbitrary-content marker.
pub const ANY: char = '~';
/// Literal-string marker.
pub const STRING: char = '@';
/// Misc (single non-whitespace run) marker.
pub const MISC: char = '&';
/// Number marker.
pub const NUMBER: char = '#';

/// Capture flag.
pub const CAPTURE: char = '!';
/// Space-after flag: whitespace after the token is optional.
pub const SPACE_OPTIONAL: char = 'o';
/// Space-after flag: no whitespace may follow the token.
pub const SPACE_PROHIBITED: char = 'x';
/// Quantity code: exactly one occurrence.
pub const QUANTITY_SINGLE: char = '.';
/// Quantity code: a whitespace-separated run of one or more occurrences.
pub const QUANTITY_ONE_OR_MORE: char = '+';

/// Name prefix of per-token capture groups (`g0`, `g1`, ...).
pub const GROUP_PREFIX: &str = "g";

/// Exponent markers accepted in scientific notation.
pub const SCINOT_MARKERS: &str = "deDE";

/// Standard word characters for boundary assertions. `-` must stay last.
pub const WORD_CHARS: &str = "a-zA-Z0-9deDE+.-";

/// Zero-width start of a line (or of the text).
pub const LINE_START: &str = r"(?:^|(?<=\n))";
/// Zero-width end of a line (or of the text).
pub const LINE_END: &str = r"(?:$|(?=\n))";
/// Horizontal whitespace, at least one character.
pub const SPACE_REQUIRED_RX: &str = r"[ \t]+";
/// Horizontal whitespace, possibly none.
pub const SPACE_OPTIONAL_RX: &str = r"[ \t]*";
/// Separator between consecutive lines of a section.
pub const LINE_BREAK_RX: &str = r"\n?";
/// Lazy arbitrary span within a line.
pub const ANY_RX: &str = ".*?";
/// Lazy single non-whitespace run.
pub const MISC_RX: &str = r"[^ \t\n]+?";

/// Characters escaped when a literal string is embedded in a pattern.
pub const REGEX_META: &str = r"\.+*?()|[]{}^$";

/// Backslash-escape every regex metacharacter in `text`.
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if REGEX_META.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Name of the capture group holding token capture `index`.
pub fn group_name(index: usize) -> String {
    format!("{GROUP_PREFIX}{index}")
}

/// The three structural roles of a parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionField {
    Head,
    Body,
    Tail,
}

impl SectionField {
    pub const ALL: [Self; 3] = [Self::Head, Self::Body, Self::Tail];

    /// Group name in the assembled pattern, and key in structured results.
    pub fn name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Body => "body",
            Self::Tail => "tail",
        }
    }
}

impl std::fmt::Display for SectionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
