//! Package version parsing and ordering
//!
//! This crate parses PEP 440-like version strings (`1!2.3.0a1+build.5`) into a
//! structured [`Version`] and totally orders them, including prefix matching
//! (`1.2.*`) and compatible-release matching (`~=1.4.2`).

mod atom;
mod compare;
mod error;
mod parser;
mod segment;
mod version;

pub use atom::{Atom, LiteralKind};
pub use error::{ParseErrorKind, ParseVersionError};
pub use segment::{Components, Segment};
pub use version::Version;
