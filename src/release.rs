//! Types and logic for handling pre-release tails.

use crate::parsers;
use itertools::EitherOrBoth::{Both, Left, Right};
use itertools::Itertools;
use num_bigint::BigUint;
use std::cmp::Ordering;
use std::cmp::Ordering::{Equal, Greater, Less};
use std::hash::{Hash, Hasher};

/// A single dot-separated section of a [`Release`].
///
/// Any section containing a digit is considered [`Ident::Numeric`], and its
/// value is taken from the first run of digits found within it. So `rc12` has
/// the value `12` and `b1c2` has the value `1`. Values have no upper bound.
/// The original text is retained for display.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    /// A section with at least one digit in it.
    Numeric(BigUint, String),
    /// A section with no digits at all.
    Textual(String),
}

impl Ident {
    /// Classify a single section of a pre-release tail. This never fails, as
    /// any text at all is a legal [`Ident::Textual`].
    pub fn new(s: &str) -> Ident {
        match parsers::first_digits(s) {
            Ok((_, n)) => Ident::Numeric(n, s.to_string()),
            Err(_) => Ident::Textual(s.to_string()),
        }
    }

    /// Extract the original `String`, no matter which variant it parsed into.
    pub fn text(&self) -> &str {
        match self {
            Ident::Numeric(_, s) => s,
            Ident::Textual(s) => s,
        }
    }

    /// Numeric sections always sort before textual ones, regardless of their
    /// contents. Numeric ties are *not* broken by the original text.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Ident::Numeric(a, _), Ident::Numeric(b, _)) => a.cmp(b),
            (Ident::Numeric(_, _), Ident::Textual(_)) => Less,
            (Ident::Textual(_), Ident::Numeric(_, _)) => Greater,
            (Ident::Textual(a), Ident::Textual(b)) => a.cmp(b),
        }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// The pre-release tail of a [`crate::Version`], like the `alpha.1` of
/// `1.0.0-alpha.1` or the `b1` of `2.0.0b1`.
///
/// Equality is decided by the raw text alone, while ordering goes through the
/// parsed [`Ident`]s. See [`Release::cmp_precedence`].
#[derive(Debug, Clone)]
pub struct Release {
    text: String,
    idents: Vec<Ident>,
}

impl Release {
    /// Split a pre-release tail on its periods. Never fails.
    ///
    /// ```
    /// use loose_versions::{Ident, Release};
    /// use num_bigint::BigUint;
    ///
    /// let r = Release::new("alpha.1");
    /// assert_eq!("alpha.1", r.as_str());
    /// assert_eq!(
    ///     &[
    ///         Ident::Textual("alpha".to_string()),
    ///         Ident::Numeric(BigUint::from(1u32), "1".to_string())
    ///     ],
    ///     r.identifiers()
    /// );
    /// ```
    pub fn new(s: &str) -> Release {
        Release {
            text: s.to_string(),
            idents: s.split('.').map(Ident::new).collect(),
        }
    }

    /// The raw tail, exactly as it appeared in the input.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed sections of the tail, from most to least significant.
    pub fn identifiers(&self) -> &[Ident] {
        &self.idents
    }

    /// Compare two tails section-by-section. The first non-tied section
    /// decides. If one tail runs out first while all previous sections tied,
    /// the shorter tail is lesser.
    ///
    /// Two tails can tie here while having different spellings, as in
    /// `rc1` and `rc01`.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.idents
            .iter()
            .zip_longest(&other.idents)
            .find_map(|eob| match eob {
                Both(a, b) => match a.cmp_precedence(b) {
                    Equal => None,
                    ord => Some(ord),
                },
                Left(_) => Some(Greater),
                Right(_) => Some(Less),
            })
            .unwrap_or(Equal)
    }
}

impl PartialEq for Release {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Release {}

/// Hashed on the raw text, since that is what `PartialEq` looks at.
impl Hash for Release {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Release {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Precedence first. Tails that tie on precedence but are spelled differently
/// fall back to their raw text, so that `Ord` agrees with `Eq`.
impl Ord for Release {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl std::fmt::Display for Release {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
