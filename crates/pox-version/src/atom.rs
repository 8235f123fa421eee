//! The smallest ordered unit of a version

use std::cmp::Ordering;
use std::fmt;

/// Padding used when a segment runs out of atoms.
pub(crate) static EMPTY_ATOM: Atom = Atom {
    numeral: 0,
    literal: String::new(),
};

/// Priority class of an atom literal, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LiteralKind {
    /// `*`
    Wildcard,
    /// `dev`
    Dev,
    /// `_`, left over from a trailing underscore
    Underscore,
    /// Any other literal, ordered byte-wise among themselves
    Regular,
    /// No literal at all
    Empty,
    /// `post`
    Post,
}

impl LiteralKind {
    /// Classify a lower-cased literal
    pub fn classify(literal: &str) -> Self {
        match literal {
            "*" => LiteralKind::Wildcard,
            "dev" => LiteralKind::Dev,
            "_" => LiteralKind::Underscore,
            "" => LiteralKind::Empty,
            "post" => LiteralKind::Post,
            _ => LiteralKind::Regular,
        }
    }

    pub fn priority(&self) -> i8 {
        match self {
            LiteralKind::Wildcard => -3,
            LiteralKind::Dev => -2,
            LiteralKind::Underscore => -1,
            LiteralKind::Regular => 0,
            LiteralKind::Empty => 1,
            LiteralKind::Post => 2,
        }
    }
}

/// A numeral followed by a (possibly empty) lower-cased literal, e.g. `3rc`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Atom {
    numeral: u64,
    literal: String,
}

impl Atom {
    /// Create an atom, lower-casing the literal in place
    pub fn new(numeral: u64, literal: impl Into<String>) -> Self {
        let mut literal = literal.into();
        literal.make_ascii_lowercase();
        Atom { numeral, literal }
    }

    /// Create an atom with an empty literal
    pub fn from_numeral(numeral: u64) -> Self {
        Atom {
            numeral,
            literal: String::new(),
        }
    }

    pub fn numeral(&self) -> u64 {
        self.numeral
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn into_literal(self) -> String {
        self.literal
    }

    pub fn kind(&self) -> LiteralKind {
        LiteralKind::classify(&self.literal)
    }

    /// True for `0` with no literal, which pads shorter segments
    pub fn is_empty(&self) -> bool {
        self.numeral == 0 && self.literal.is_empty()
    }

    /// Compare against an atom of a prefix version.
    ///
    /// A bare numeral in the prefix matches the same numeral with any literal.
    pub(crate) fn cmp_prefix(&self, prefix: &Atom) -> Ordering {
        if self.numeral == prefix.numeral && prefix.literal.is_empty() {
            return Ordering::Equal;
        }
        self.cmp(prefix)
    }
}

fn compare_literals(a: &str, b: &str) -> Ordering {
    match (LiteralKind::classify(a), LiteralKind::classify(b)) {
        (LiteralKind::Regular, LiteralKind::Regular) => a.as_bytes().cmp(b.as_bytes()),
        (kind_a, kind_b) => kind_a.cmp(&kind_b),
    }
}

impl Ord for Atom {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeral
            .cmp(&other.numeral)
            .then_with(|| compare_literals(&self.literal, &other.literal))
    }
}

impl PartialOrd for Atom {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for Atom {
    fn from(numeral: u64) -> Self {
        Atom::from_numeral(numeral)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.numeral, self.literal)
    }
}
