//! Segments and component sequences
//!
//! A [`Segment`] is one delimited chunk of a version (`2rc1` in `1.2rc1`), a
//! [`Components`] is the whole dotted sequence of segments.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::atom::{Atom, EMPTY_ATOM};
use crate::compare::{compare_trailing, Padding};

/// Padding used when a component sequence runs out of segments.
pub(crate) static EMPTY_SEGMENT: Segment = Segment(Vec::new());

/// An ordered run of atoms, e.g. `[1, rc, 2]` for `1rc2`
#[derive(Debug, Clone, Default)]
pub struct Segment(Vec<Atom>);

impl Segment {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Segment(atoms)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.0
    }

    /// Atoms without the trailing empty ones, which never affect ordering
    fn significant(&self) -> &[Atom] {
        let len = self.0.iter().rposition(|atom| !atom.is_empty()).map_or(0, |pos| pos + 1);
        &self.0[..len]
    }

    fn is_insignificant(&self) -> bool {
        self.significant().is_empty()
    }

    pub(crate) fn cmp_prefix(&self, prefix: &Segment) -> Ordering {
        compare_trailing(
            &self.0,
            &prefix.0,
            Padding::With(&EMPTY_ATOM),
            Padding::Anything,
            Atom::cmp_prefix,
        )
        .0
    }
}

impl Deref for Segment {
    type Target = [Atom];

    fn deref(&self) -> &[Atom] {
        &self.0
    }
}

impl From<Vec<Atom>> for Segment {
    fn from(atoms: Vec<Atom>) -> Self {
        Segment(atoms)
    }
}

impl FromIterator<Atom> for Segment {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        Segment(iter.into_iter().collect())
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_trailing(
            &self.0,
            &other.0,
            Padding::With(&EMPTY_ATOM),
            Padding::With(&EMPTY_ATOM),
            Atom::cmp,
        )
        .0
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for atom in &self.0 {
            write!(f, "{}", atom)?;
        }
        Ok(())
    }
}

/// The segments of a main or local version, e.g. `[1, 2rc1]` for `1.2rc1`
#[derive(Debug, Clone, Default)]
pub struct Components(Vec<Segment>);

impl Components {
    pub fn new(segments: Vec<Segment>) -> Self {
        Components(segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    fn significant(&self) -> &[Segment] {
        let len = self
            .0
            .iter()
            .rposition(|segment| !segment.is_insignificant())
            .map_or(0, |pos| pos + 1);
        &self.0[..len]
    }

    /// Compare and report the index of the first differing segment
    pub(crate) fn compare_indexed(&self, other: &Components) -> (Ordering, usize) {
        compare_trailing(
            &self.0,
            &other.0,
            Padding::With(&EMPTY_SEGMENT),
            Padding::With(&EMPTY_SEGMENT),
            Segment::cmp,
        )
    }

    pub(crate) fn cmp_prefix(&self, prefix: &Components) -> Ordering {
        compare_trailing(
            &self.0,
            &prefix.0,
            Padding::With(&EMPTY_SEGMENT),
            Padding::Anything,
            Segment::cmp_prefix,
        )
        .0
    }
}

impl Deref for Components {
    type Target = [Segment];

    fn deref(&self) -> &[Segment] {
        &self.0
    }
}

impl From<Vec<Segment>> for Components {
    fn from(segments: Vec<Segment>) -> Self {
        Components(segments)
    }
}

impl FromIterator<Segment> for Components {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Components(iter.into_iter().collect())
    }
}

impl Ord for Components {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_indexed(other).0
    }
}

impl PartialOrd for Components {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Components {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Components {}

impl Hash for Components {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
