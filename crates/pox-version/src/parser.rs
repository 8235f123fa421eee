//! Version string parsing
//!
//! Each step takes the remaining text and hands back what it consumed
//! together with the rest, so every grammar rule can be tested on its own.

use lazy_static::lazy_static;
use regex::Regex;

use crate::atom::Atom;
use crate::error::{ParseErrorKind, ParseVersionError};
use crate::segment::{Components, Segment};
use crate::version::Version;

lazy_static! {
    // Anything that is not alphanumeric, `*` or a part delimiter.
    // `*` is not part of any scheme but shows up in real package indexes.
    static ref INVALID_CHAR_RE: Regex = Regex::new(r"[^0-9A-Za-z*._-]").unwrap();
}

const PART_DELIMS: [char; 3] = [
    Version::PART_DELIM,
    Version::PART_DELIM_ALT,
    Version::PART_DELIM_SPECIAL,
];

pub(crate) fn parse_version(input: &str) -> Result<Version, ParseVersionError> {
    let input = input.trim();
    match parse_trimmed(input) {
        Ok(version) => {
            log::trace!("Parsed version '{}' as {}", input, version);
            Ok(version)
        }
        Err(kind) => {
            let err = ParseVersionError::new(input, kind);
            log::debug!("{}", err);
            Err(err)
        }
    }
}

fn parse_trimmed(input: &str) -> Result<Version, ParseErrorKind> {
    let (epoch, rest) = parse_leading_epoch(input)?;
    let (body, local) = parse_trailing_local(rest)?;
    let version = parse_main(body)?;
    Ok(Version::new(epoch, version, local))
}

fn parse_leading_epoch(s: &str) -> Result<(u64, &str), ParseErrorKind> {
    let (epoch, rest) = match s.split_once(Version::EPOCH_DELIM) {
        None => return Ok((0, s)),
        Some(("", _)) => return Err(ParseErrorKind::EmptyEpoch),
        Some(parts) => parts,
    };

    if !epoch.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseErrorKind::InvalidEpoch(epoch.to_string()));
    }
    let value = epoch
        .parse::<u64>()
        .map_err(|_| ParseErrorKind::InvalidEpoch(epoch.to_string()))?;
    Ok((value, rest))
}

fn parse_trailing_local(s: &str) -> Result<(&str, Components), ParseErrorKind> {
    match s.rsplit_once(Version::LOCAL_DELIM) {
        None => Ok((s, Components::default())),
        Some((_, "")) => Err(ParseErrorKind::EmptyLocal),
        Some((body, local)) => Ok((body, parse_components(local)?)),
    }
}

fn parse_main(s: &str) -> Result<Components, ParseErrorKind> {
    if s.is_empty() {
        return Err(ParseErrorKind::EmptyVersion);
    }
    parse_components(s)
}

/// Reject mixed `-`/`_` delimiters and characters outside the grammar.
///
/// A single `_` at the very end is a literal, not a delimiter.
fn check_components(s: &str) -> Result<(), ParseErrorKind> {
    let uses_alt = s.contains(Version::PART_DELIM_ALT);
    let uses_special = s
        .find(Version::PART_DELIM_SPECIAL)
        .is_some_and(|pos| pos + 1 < s.len());
    if uses_alt && uses_special {
        return Err(ParseErrorKind::MixedDelimiters(s.to_string()));
    }

    if let Some(m) = INVALID_CHAR_RE.find(s) {
        return Err(ParseErrorKind::InvalidCharacters {
            version: s.to_string(),
            character: m.as_str().to_string(),
        });
    }
    Ok(())
}

fn parse_components(s: &str) -> Result<Components, ParseErrorKind> {
    check_components(s)?;

    let mut segments = Vec::new();
    let mut tail = s;
    loop {
        let mut delim = tail.find(&PART_DELIMS[..]);
        if tail.ends_with(Version::PART_DELIM_SPECIAL) && delim == Some(tail.len() - 1) {
            delim = None;
        }
        match delim {
            None => {
                segments.push(parse_segment(tail)?);
                break;
            }
            Some(pos) if pos == 0 || pos + 1 == tail.len() => {
                return Err(ParseErrorKind::EmptyPart(s.to_string()));
            }
            Some(pos) => {
                segments.push(parse_segment(&tail[..pos])?);
                tail = &tail[pos + 1..];
            }
        }
    }
    Ok(Components::new(segments))
}

fn parse_segment(s: &str) -> Result<Segment, ParseErrorKind> {
    let mut atoms = Vec::new();
    let mut tail = s;
    while !tail.is_empty() {
        let (atom, rest) = parse_leading_atom(tail)?;
        atoms.push(atom);
        tail = rest;
    }
    Ok(Segment::new(atoms))
}

fn parse_leading_atom(s: &str) -> Result<(Atom, &str), ParseErrorKind> {
    let (digits, rest) = split_leading(s, |c| c.is_ascii_digit());
    let numeral = if digits.is_empty() {
        0
    } else {
        digits
            .parse::<u64>()
            .map_err(|_| ParseErrorKind::NumeralTooLarge(digits.to_string()))?
    };
    let (literal, rest) = split_leading(rest, |c| !c.is_ascii_digit());
    Ok((Atom::new(numeral, literal), rest))
}

fn split_leading(s: &str, pred: impl Fn(char) -> bool) -> (&str, &str) {
    let end = s.find(|c: char| !pred(c)).unwrap_or(s.len());
    s.split_at(end)
}
