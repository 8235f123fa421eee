//! The version type and its comparison operations

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ParseVersionError;
use crate::parser;
use crate::segment::Components;

/// A parsed package version: `epoch!version+local`
///
/// Versions are totally ordered by epoch, then main version, then local
/// version. Missing trailing segments compare as zero, so `1.2 == 1.2.0`.
#[derive(Debug, Clone, Default)]
pub struct Version {
    epoch: u64,
    version: Components,
    local: Components,
}

impl Version {
    pub const EPOCH_DELIM: char = '!';
    pub const LOCAL_DELIM: char = '+';
    pub const PART_DELIM: char = '.';
    pub const PART_DELIM_ALT: char = '-';
    pub const PART_DELIM_SPECIAL: char = '_';

    pub fn new(epoch: u64, version: Components, local: Components) -> Self {
        Version { epoch, version, local }
    }

    /// Parse a version string, ignoring surrounding whitespace
    pub fn parse(input: &str) -> Result<Self, ParseVersionError> {
        parser::parse_version(input)
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn version(&self) -> &Components {
        &self.version
    }

    pub fn local(&self) -> &Components {
        &self.local
    }

    /// Check if this version matches `prefix` the way `1.2.*` would.
    ///
    /// Only the main version is matched as a prefix; epochs and local
    /// versions must be equal.
    pub fn starts_with(&self, prefix: &Version) -> bool {
        self.epoch == prefix.epoch
            && self.version.cmp_prefix(&prefix.version) == Ordering::Equal
            && self.local == prefix.local
    }

    /// Check if this version is a compatible release of `older`.
    ///
    /// The first `level` segments must be equal and the version may only be
    /// greater after them, e.g. `1.4.5` is compatible with `1.4.2` at level 2
    /// but `1.5.0` is not.
    pub fn compatible_with(&self, older: &Version, level: usize) -> bool {
        self.epoch == older.epoch
            && components_compatible(&self.version, &older.version, level)
            && components_compatible(&self.local, &older.local, level)
    }
}

fn components_compatible(newer: &Components, older: &Components, level: usize) -> bool {
    match newer.compare_indexed(older) {
        (Ordering::Equal, _) => true,
        (Ordering::Greater, idx) => idx >= level,
        (Ordering::Less, _) => false,
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| self.local.cmp(&other.local))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.epoch.hash(state);
        self.version.hash(state);
        self.local.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}{}", self.epoch, Version::EPOCH_DELIM)?;
        }
        write!(f, "{}", self.version)?;
        if !self.local.is_empty() {
            write!(f, "{}{}", Version::LOCAL_DELIM, self.local)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseVersionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Version::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
