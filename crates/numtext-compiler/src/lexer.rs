//! Shell-style line splitting.
//!
//! A line of the mini-language is split on blanks, with POSIX-shell quoting:
//! single quotes are fully literal, double quotes honor `\"` and `\\`, and a
//! backslash outside quotes escapes the next character. Adjacent fragments
//! with no blank between them join into one token, so `@."two words"` and
//! `"@.two words"` both yield `@.two words`.

use logos::Logos;
use std::ops::Range;

use crate::{Error, Location, Result};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    #[regex(r"[ \t\r\n]+")]
    Blank,

    #[regex(r#"[^ \t\r\n"'\\]+"#, allow_greedy = true)]
    Bare,

    #[regex(r"\\.")]
    Escaped,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    DoubleQuoted,

    #[regex(r"'[^']*'", allow_greedy = true)]
    SingleQuoted,
}

/// One token string after quote removal, with its span in the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineToken {
    pub text: String,
    pub span: Range<usize>,
}

/// Splits `line` into unquoted token strings.
pub fn split_line(line: &str) -> Result<Vec<LineToken>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(line);
    let mut current: Option<LineToken> = None;

    while let Some(next) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();

        let piece = match next {
            Ok(Lexeme::Blank) => {
                tokens.extend(current.take());
                continue;
            }
            Ok(Lexeme::Bare) => slice.to_string(),
            Ok(Lexeme::Escaped) => slice[1..].to_string(),
            Ok(Lexeme::DoubleQuoted) => unescape_double(&slice[1..slice.len() - 1]),
            Ok(Lexeme::SingleQuoted) => slice[1..slice.len() - 1].to_string(),
            Err(()) => return Err(lex_error(line, span)),
        };

        match current.as_mut() {
            Some(token) => {
                token.text.push_str(&piece);
                token.span.end = span.end;
            }
            None => current = Some(LineToken { text: piece, span }),
        }
    }

    tokens.extend(current);
    Ok(tokens)
}

fn unescape_double(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&escaped @ ('"' | '\\')) = chars.peek()
        {
            out.push(escaped);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}

fn lex_error(line: &str, span: Range<usize>) -> Error {
    let reason = match line[span.start..].chars().next() {
        Some('"') | Some('\'') => "unterminated quote",
        Some('\\') => "dangling escape",
        _ => "unexpected character",
    };
    Error::Line {
        reason: reason.to_string(),
        location: Location::new(line, span.start..line.len()),
    }
}
