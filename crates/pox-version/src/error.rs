//! Error types for version parsing

use thiserror::Error;

/// The grammar rule a version string violated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("Empty epoch delimited by '!'.")]
    EmptyEpoch,
    #[error("Epoch should be a number, got '{0}'.")]
    InvalidEpoch(String),
    #[error("Empty local version delimited by '+'.")]
    EmptyLocal,
    #[error("Empty version.")]
    EmptyVersion,
    #[error("Version contains invalid character '{character}' in '{version}'.")]
    InvalidCharacters { version: String, character: String },
    #[error("Cannot use both '-' and '_' delimiters in '{0}'.")]
    MixedDelimiters(String),
    #[error("Empty part in '{0}'.")]
    EmptyPart(String),
    #[error("Number '{0}' is too large.")]
    NumeralTooLarge(String),
}

/// Error returned when a version string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error parsing version '{input}'. {kind}")]
pub struct ParseVersionError {
    input: String,
    kind: ParseErrorKind,
}

impl ParseVersionError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        ParseVersionError {
            input: input.to_string(),
            kind,
        }
    }

    /// The input that failed to parse, with surrounding whitespace removed
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The rule that was violated
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}
