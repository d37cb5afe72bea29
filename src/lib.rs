//! A library for parsing and comparing loosely-formatted version numbers.
//!
//! Plenty of software claims to follow Semantic Versioning, and then tags a
//! release as `v2.0.0b1`, or `1.2`, or `0.3.0b`. Strict semver parsers reject
//! these outright. This library accepts them, extracts a `MAJOR.MINOR.PATCH`
//! triple and an optional pre-release tail, and gives them a total order.
//!
//! # Usage
//!
//! Parse with [`Version::new`], then compare with the usual operators.
//!
//! ```
//! use loose_versions::Version;
//!
//! let old = Version::new("0.3.0b").unwrap();
//! let new = Version::new("1.2.42").unwrap();
//!
//! assert!(old < new);
//! assert_eq!(Version::new("1").unwrap(), Version::new("1.0.0").unwrap());
//! ```
//!
//! # Pre-releases
//!
//! A pre-release has lower precedence than its plain release, and its
//! sections are compared one at a time. Note that any section containing a
//! digit sorts *before* a section without one.
//!
//! ```
//! use loose_versions::Version;
//!
//! let vs = ["1.0.0-1", "1.0.0-alpha", "1.0.0-alpha.1", "1.0.0-beta", "1.0.0"];
//!
//! for (a, b) in vs.iter().zip(&vs[1..]) {
//!     assert!(Version::new(a).unwrap() < Version::new(b).unwrap());
//! }
//! ```
//!
//! # Features
//!
//! - `serde`: [`Version`] (de)serializes as its raw string.
//! - `tracing`: emit `tracing` events while parsing.

#![warn(missing_docs)]

mod parsers;
mod release;
mod version;

pub use release::{Ident, Release};
pub use version::Version;

/// Errors unique to the parsing of version numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The numeric portion of some string didn't yield three unsigned
    /// integers. Carries that portion.
    InvalidVersionFormat(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidVersionFormat(s) => write!(f, "Invalid version format: {s}"),
        }
    }
}
