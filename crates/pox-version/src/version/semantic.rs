//! Dotted `major.minor[.patch][-pre][+build]` versions

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::{Major, VersionNumber};
use crate::version_parser::{is_build_metadata, is_pre_release};
use crate::{VersionError, VersionParser};

/// A semantic version
///
/// Equality, ordering and hashing follow version precedence: build metadata
/// is ignored and a missing patch level counts as `0`.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch_level: Option<u64>,
    pub(crate) pre_release: Option<String>,
    pub(crate) build: Option<String>,
}

impl SemanticVersion {
    /// Create a release version without pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch_level: Option<u64>) -> Self {
        SemanticVersion {
            major,
            minor,
            patch_level,
            pre_release: None,
            build: None,
        }
    }

    /// Create a version from all five fields, validating the identifier lists
    pub fn from_parts(
        major: u64,
        minor: u64,
        patch_level: Option<u64>,
        pre_release: Option<&str>,
        build: Option<&str>,
    ) -> Result<Self, VersionError> {
        let mut version = SemanticVersion::new(major, minor, patch_level);

        if let Some(pre) = pre_release {
            if !is_pre_release(pre) {
                return Err(VersionError::BadVersionString(format!("{}-{}", version, pre)));
            }
            version.pre_release = Some(pre.to_string());
        }

        if let Some(meta) = build {
            if !is_build_metadata(meta) {
                return Err(VersionError::BadVersionString(format!("{}+{}", version, meta)));
            }
            version.build = Some(meta.to_string());
        }

        Ok(version)
    }

    /// Parse a semantic version string
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        VersionParser::new().parse_semantic(input)
    }

    /// Patch level with an absent value read as `0`
    pub fn patch_or_zero(&self) -> u64 {
        self.patch_level.unwrap_or(0)
    }

    /// Whether this version is a pre-release
    pub fn is_prerelease(&self) -> bool {
        self.pre_release.is_some()
    }
}

impl VersionNumber for SemanticVersion {
    fn major(&self) -> Major<'_> {
        Major::Number(self.major)
    }

    fn minor(&self) -> Option<u64> {
        Some(self.minor)
    }

    fn patch_level(&self) -> Option<u64> {
        self.patch_level
    }

    fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// `X.(Y+1).0` when a patch level is given, `(X+1).0` otherwise
    fn approximate_upper_boundary(&self) -> Option<Self> {
        if self.patch_level.is_some() {
            if let Some(minor) = self.minor.checked_add(1) {
                return Some(SemanticVersion::new(self.major, minor, Some(0)));
            }
            // Nothing sorts between X.(Y+1).0 and (X+1).0 once Y is the last minor
        }
        self.compatible_upper_boundary()
    }

    /// `(X+1).0`, or `None` past the last major version
    fn compatible_upper_boundary(&self) -> Option<Self> {
        self.major
            .checked_add(1)
            .map(|major| SemanticVersion::new(major, 0, None))
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        crate::comparator::compare(self, other)
    }
}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch_or_zero().hash(state);
        self.pre_release.hash(state);
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(patch) = self.patch_level {
            write!(f, ".{}", patch)?;
        }
        if let Some(ref pre) = self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(ref build) = self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemanticVersion::parse(s)
    }
}
