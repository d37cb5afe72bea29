//! Types and logic for handling loose [`Version`]s.

use crate::{Error, Ident, Release, parsers};
use num_bigint::BigUint;
use std::cmp::Ordering;
use std::cmp::Ordering::{Equal, Greater, Less};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

/// A version number that is *almost* a Semantic Version.
///
/// Legal versions are of the form `vMAJOR.MINOR.PATCH-PREREL`, but nearly
/// every part is optional:
///
/// - The leading `v` may be omitted.
/// - Missing `MINOR` and `PATCH` values default to `0`, so `1` is `1.0.0`.
/// - The `-` before a pre-release may be omitted when all three numbers are
///   present and the pre-release starts with a letter, as in `2.0.0b1`.
///
/// The original input is kept verbatim, and is what [`std::fmt::Display`]
/// gives back.
///
/// # Precedence
///
/// 1. `MAJOR`, `MINOR`, then `PATCH` are compared numerically.
/// 2. A pre-release has *lower* precedence than the plain release.
/// 3. Pre-releases are compared section-by-section. Sections with digits in
///    them are lesser than sections without, and are compared by the value of
///    their first run of digits. Other sections are compared as strings.
/// 4. If all shared sections tie, the pre-release with fewer sections is
///    lesser.
///
/// Numbers of any size are accepted and compared exactly.
///
/// Pre-releases can tie on precedence while being spelled differently, like
/// `1.0.0-rc1` and `1.0.0-rc01`. These aren't equal, so the `<` family of
/// operators orders them by their raw text. Use [`Version::cmp_precedence`]
/// for the plain precedence, under which neither is less than the other.
///
/// # Examples
///
/// ```
/// use loose_versions::Version;
///
/// let beta = Version::new("v2.0.0b1").unwrap();
/// let full = Version::new("2").unwrap();
///
/// assert!(beta < full);
/// assert_eq!("v2.0.0b1", beta.to_string());
/// assert_eq!(Version::new("2.0.0").unwrap(), full);
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    major: BigUint,
    minor: BigUint,
    patch: BigUint,
    pre_rel: Option<Release>,
}

impl Version {
    /// Parse a `Version` from some input.
    ///
    /// Fails only when the numeric portion doesn't yield three unsigned
    /// integers.
    ///
    /// ```
    /// use loose_versions::{Error, Version};
    ///
    /// assert!(Version::new("1.2").is_ok());
    /// assert_eq!(
    ///     Err(Error::InvalidVersionFormat("abc.def.ghi".to_string())),
    ///     Version::new("abc.def.ghi")
    /// );
    /// ```
    pub fn new<S>(s: S) -> Result<Version, Error>
    where
        S: AsRef<str>,
    {
        let raw = s.as_ref();
        let (core, tail) = Version::split(raw);

        #[cfg(feature = "tracing")]
        tracing::trace!(raw, core, tail, "split version");

        let (major, minor, patch) = Version::core(core).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(raw, core, "rejected version with a malformed core");

            Error::InvalidVersionFormat(core.to_string())
        })?;

        let v = Version {
            raw: raw.to_string(),
            major,
            minor,
            patch,
            pre_rel: tail.map(Release::new),
        };

        Ok(v)
    }

    /// Separate the numeric core from the pre-release tail, if there is one.
    ///
    /// The first rule that applies wins:
    ///
    /// 1. Split at the first `-`. Later hyphens belong to the tail.
    /// 2. Split after `X.Y.Z` when a letter follows it directly.
    /// 3. Otherwise there is no tail.
    fn split(s: &str) -> (&str, Option<&str>) {
        let s = s.strip_prefix('v').unwrap_or(s);

        match s.split_once('-') {
            Some((core, tail)) => (core, Some(tail)),
            None => match parsers::lettered_core(s) {
                Ok((tail, core)) => (core, Some(tail)),
                Err(_) => (s, None),
            },
        }
    }

    /// Missing trailing positions are `0`. Anything past the third position
    /// is ignored.
    fn core(s: &str) -> Option<(BigUint, BigUint, BigUint)> {
        let mut parts = s.split('.').map(Version::component);
        let mut next = || parts.next().unwrap_or_else(|| Some(BigUint::default()));
        let major = next()?;
        let minor = next()?;
        let patch = next()?;

        Some((major, minor, patch))
    }

    fn component(s: &str) -> Option<BigUint> {
        match parsers::unsigned(s) {
            Ok(("", n)) => Some(n),
            _ => None,
        }
    }

    /// The major version.
    pub fn major(&self) -> &BigUint {
        &self.major
    }

    /// The minor version. `0` if the input didn't have one.
    pub fn minor(&self) -> &BigUint {
        &self.minor
    }

    /// The patch version. `0` if the input didn't have one.
    pub fn patch(&self) -> &BigUint {
        &self.patch
    }

    /// The pre-release tail, if any.
    pub fn pre_release(&self) -> Option<&Release> {
        self.pre_rel.as_ref()
    }

    /// The raw pre-release text, if any.
    ///
    /// ```
    /// use loose_versions::Version;
    ///
    /// assert_eq!(Some("b1"), Version::new("2.0.0b1").unwrap().pre_release_text());
    /// assert_eq!(Some("rc-1"), Version::new("1.0-rc-1").unwrap().pre_release_text());
    /// assert_eq!(None, Version::new("1.0").unwrap().pre_release_text());
    /// ```
    pub fn pre_release_text(&self) -> Option<&str> {
        self.pre_rel.as_ref().map(Release::as_str)
    }

    /// The parsed pre-release sections, if any.
    pub fn identifiers(&self) -> Option<&[Ident]> {
        self.pre_rel.as_ref().map(Release::identifiers)
    }

    /// Is this a pre-release of some `MAJOR.MINOR.PATCH`?
    pub fn is_pre_release(&self) -> bool {
        self.pre_rel.is_some()
    }

    /// The original input, verbatim.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Compare by precedence alone.
    ///
    /// Unlike [`Ord::cmp`], pre-releases whose sections tie are considered
    /// `Equal` here even when they're spelled differently.
    ///
    /// ```
    /// use loose_versions::Version;
    /// use std::cmp::Ordering;
    ///
    /// let a = Version::new("1.0.0-rc1").unwrap();
    /// let b = Version::new("1.0.0-rc01").unwrap();
    ///
    /// assert_eq!(Ordering::Equal, a.cmp_precedence(&b));
    /// assert_ne!(a, b);
    /// ```
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.cmp_by(other, Release::cmp_precedence)
    }

    fn cmp_by<F>(&self, other: &Self, f: F) -> Ordering
    where
        F: Fn(&Release, &Release) -> Ordering,
    {
        let a = (&self.major, &self.minor, &self.patch);
        let b = (&other.major, &other.minor, &other.patch);
        match a.cmp(&b) {
            Less => Less,
            Greater => Greater,
            Equal => match (&self.pre_rel, &other.pre_rel) {
                (None, None) => Equal,
                (None, _) => Greater,
                (_, None) => Less,
                (Some(ap), Some(bp)) => f(ap, bp),
            },
        }
    }
}

/// Two versions are equal if their numbers match and their pre-release tails
/// are spelled identically. The raw input otherwise doesn't matter, so `1.0`
/// equals `v1.0.0`.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_rel == other.pre_rel
    }
}

impl Eq for Version {}

/// Hand-implemented, since `PartialEq` also is.
impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_rel.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Precedence, as described on [`Version`]. Pre-releases that tie on
/// precedence are finally ordered by their raw text.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_by(other, Release::cmp)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::new(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = Error;

    /// ```
    /// use loose_versions::Version;
    ///
    /// let orig = "1.0.1b";
    /// let prsd: Version = orig.try_into().unwrap();
    /// assert_eq!(orig, prsd.to_string());
    /// ```
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::new(value)
    }
}

/// Serialized as the original input string.
#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

/// Deserialized from a raw version string like `1.2.3-rc.1`.
///
/// ```
/// use loose_versions::Version;
///
/// let v: Version = serde_json::from_str(r#""2.0.0b1""#).unwrap();
/// assert_eq!(Version::new("2.0.0b1").unwrap(), v);
/// ```
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Version, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;

        Version::new(&s).map_err(D::Error::custom)
    }
}
