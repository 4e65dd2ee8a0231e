//! Version values
//!
//! A [`Version`] is either a dotted [`SemanticVersion`] or an opaque
//! [`HashedVersion`] such as a commit identifier. Both expose the same set of
//! capabilities through the [`VersionNumber`] trait.

mod hashed;
mod semantic;

pub use hashed::HashedVersion;
pub use semantic::SemanticVersion;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{VersionError, VersionParser};

/// The leading component of a version
///
/// Semantic versions carry a number here, hashed versions carry their token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Major<'a> {
    Number(u64),
    Token(&'a str),
}

impl Major<'_> {
    /// The numeric major version, if this is one
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Major::Number(n) => Some(*n),
            Major::Token(_) => None,
        }
    }
}

impl fmt::Display for Major<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Major::Number(n) => write!(f, "{}", n),
            Major::Token(t) => write!(f, "{}", t),
        }
    }
}

/// Field-by-field view of a version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionParts<'a> {
    pub major: Major<'a>,
    pub minor: Option<u64>,
    pub patch_level: Option<u64>,
    pub pre_release: Option<&'a str>,
    pub build: Option<&'a str>,
}

/// Capabilities shared by every kind of version
pub trait VersionNumber: fmt::Display {
    fn major(&self) -> Major<'_>;

    fn minor(&self) -> Option<u64>;

    fn patch_level(&self) -> Option<u64>;

    fn has_patch_level(&self) -> bool {
        self.patch_level().is_some()
    }

    fn pre_release(&self) -> Option<&str>;

    fn has_pre_release(&self) -> bool {
        self.pre_release().is_some()
    }

    fn build(&self) -> Option<&str>;

    fn has_build(&self) -> bool {
        self.build().is_some()
    }

    /// The first version no longer matched by `~self`
    ///
    /// `None` when no representable version lies past the range.
    fn approximate_upper_boundary(&self) -> Option<Self>
    where
        Self: Sized;

    /// The first version no longer matched by `^self`
    fn compatible_upper_boundary(&self) -> Option<Self>
    where
        Self: Sized;

    fn to_parts(&self) -> VersionParts<'_> {
        VersionParts {
            major: self.major(),
            minor: self.minor(),
            patch_level: self.patch_level(),
            pre_release: self.pre_release(),
            build: self.build(),
        }
    }
}

/// A parsed version of either kind
#[derive(Debug, Clone)]
pub enum Version {
    Semantic(SemanticVersion),
    Hashed(HashedVersion),
}

impl Version {
    /// Parse a version, trying the semantic grammar before the hashed one
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        VersionParser::new().parse(input)
    }

    /// Short name of the variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Version::Semantic(_) => "semantic",
            Version::Hashed(_) => "hashed",
        }
    }

    pub fn as_semantic(&self) -> Option<&SemanticVersion> {
        match self {
            Version::Semantic(v) => Some(v),
            Version::Hashed(_) => None,
        }
    }

    pub fn as_hashed(&self) -> Option<&HashedVersion> {
        match self {
            Version::Semantic(_) => None,
            Version::Hashed(v) => Some(v),
        }
    }

    pub fn is_hashed(&self) -> bool {
        matches!(self, Version::Hashed(_))
    }
}

impl VersionNumber for Version {
    fn major(&self) -> Major<'_> {
        match self {
            Version::Semantic(v) => v.major(),
            Version::Hashed(v) => v.major(),
        }
    }

    fn minor(&self) -> Option<u64> {
        match self {
            Version::Semantic(v) => v.minor(),
            Version::Hashed(v) => v.minor(),
        }
    }

    fn patch_level(&self) -> Option<u64> {
        match self {
            Version::Semantic(v) => v.patch_level(),
            Version::Hashed(v) => v.patch_level(),
        }
    }

    fn pre_release(&self) -> Option<&str> {
        match self {
            Version::Semantic(v) => v.pre_release(),
            Version::Hashed(v) => v.pre_release(),
        }
    }

    fn build(&self) -> Option<&str> {
        match self {
            Version::Semantic(v) => v.build(),
            Version::Hashed(v) => v.build(),
        }
    }

    fn approximate_upper_boundary(&self) -> Option<Self> {
        match self {
            Version::Semantic(v) => v.approximate_upper_boundary().map(Version::Semantic),
            Version::Hashed(v) => v.approximate_upper_boundary().map(Version::Hashed),
        }
    }

    fn compatible_upper_boundary(&self) -> Option<Self> {
        match self {
            Version::Semantic(v) => v.compatible_upper_boundary().map(Version::Semantic),
            Version::Hashed(v) => v.compatible_upper_boundary().map(Version::Hashed),
        }
    }
}

impl From<SemanticVersion> for Version {
    fn from(v: SemanticVersion) -> Self {
        Version::Semantic(v)
    }
}

impl From<HashedVersion> for Version {
    fn from(v: HashedVersion) -> Self {
        Version::Hashed(v)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

/// Semantic versions are totally ordered among themselves. Hashed versions
/// are only equal to an identical token, and the two kinds never compare.
impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        crate::comparator::Comparator::try_compare(self, other).ok().flatten()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Semantic(v) => fmt::Display::fmt(v, f),
            Version::Hashed(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(serde::de::Error::custom)
    }
}
