//! Number-pattern table.
//!
//! Maps every `(NumberKind, Sign)` pair to the regex fragment matching that
//! literal form. Fragments carry no boundary assertions; callers add those
//! (see [`crate::boundary`]).

use once_cell::sync::Lazy;

use crate::grammar::SCINOT_MARKERS;

/// Numeric literal forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// No decimal point, no exponent.
    Integer,
    /// Decimal point required, no exponent.
    Float,
    /// Exponent required.
    SciNot,
    /// `Float` or `SciNot`.
    Decimal,
    /// `Integer`, `Float` or `SciNot`.
    General,
}

impl NumberKind {
    pub const ALL: [Self; 5] = [
        Self::Integer,
        Self::Float,
        Self::SciNot,
        Self::Decimal,
        Self::General,
    ];

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'i' => Some(Self::Integer),
            'f' => Some(Self::Float),
            's' => Some(Self::SciNot),
            'd' => Some(Self::Decimal),
            'g' => Some(Self::General),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Integer => 'i',
            Self::Float => 'f',
            Self::SciNot => 's',
            Self::Decimal => 'd',
            Self::General => 'g',
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Accepted signs of a numeric literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Leading `+` optional; includes zero.
    Positive,
    /// Leading `-` required.
    Negative,
    /// Either sign, or none.
    Any,
}

impl Sign {
    pub const ALL: [Self; 3] = [Self::Positive, Self::Negative, Self::Any];

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Positive),
            '-' => Some(Self::Negative),
            '.' => Some(Self::Any),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Positive => '+',
            Self::Negative => '-',
            Self::Any => '.',
        }
    }

    /// Regex prefix placed before the digits.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Positive => "[+]?",
            Self::Negative => "-",
            Self::Any => "[+-]?",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

fn kind_pattern(kind: NumberKind) -> String {
    let int = r"\d+".to_string();
    let float = r"(\d+\.\d*|\d*\.\d+)".to_string();
    let sci = format!(
        r"(\d+\.?\d*[{m}][+-]?\d+|\d*\.\d+[{m}][+-]?\d+)",
        m = SCINOT_MARKERS
    );

    // Exponent forms first: a bare float alternative would otherwise win
    // on the mantissa and leave the exponent unmatched.
    match kind {
        NumberKind::Integer => int,
        NumberKind::Float => float,
        NumberKind::SciNot => sci,
        NumberKind::Decimal => format!("({sci}|{float})"),
        NumberKind::General => format!("({sci}|{float}|{int})"),
    }
}

static NUMBER_PATTERNS: Lazy<[[String; 3]; 5]> = Lazy::new(|| {
    NumberKind::ALL.map(|kind| {
        let body = kind_pattern(kind);
        Sign::ALL.map(|sign| format!("{}{}", sign.prefix(), body))
    })
});

/// Regex fragment matching a literal of `kind` with `sign`.
pub fn number_pattern(kind: NumberKind, sign: Sign) -> &'static str {
    &NUMBER_PATTERNS[kind.index()][sign.index()]
}
