//! Version comparison utilities

use std::cmp::Ordering;

use crate::version::{HashedVersion, SemanticVersion, Version, VersionNumber};
use crate::VersionError;

/// Compare two semantic versions by precedence
///
/// `major.minor.patch` are compared numerically, with a missing patch level
/// read as `0`. A pre-release sorts below its release, and two pre-releases
/// are compared identifier by identifier. Build metadata is ignored.
pub fn compare(a: &SemanticVersion, b: &SemanticVersion) -> Ordering {
    (a.major, a.minor, a.patch_or_zero())
        .cmp(&(b.major, b.minor, b.patch_or_zero()))
        .then_with(|| compare_pre_release(a.pre_release.as_deref(), b.pre_release.as_deref()))
}

fn compare_pre_release(a: Option<&str>, b: Option<&str>) -> Ordering {
    let (a, b) = match (a, b) {
        (None, None) => return Ordering::Equal,
        (Some(_), None) => return Ordering::Less,
        (None, Some(_)) => return Ordering::Greater,
        (Some(a), Some(b)) => (a, b),
    };

    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let cmp = compare_identifier(l, r);
                if cmp != Ordering::Equal {
                    return cmp;
                }
            }
        }
    }
}

fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        // Numeric identifiers have no leading zeros, so the longer one is
        // larger and equal lengths compare digit by digit. This avoids any
        // overflow on identifiers wider than u64.
        (true, true) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.as_bytes().cmp(b.as_bytes()),
    }
}

/// Two versions of the same kind
enum Pair<'a> {
    Semantic(&'a SemanticVersion, &'a SemanticVersion),
    Hashed(&'a HashedVersion, &'a HashedVersion),
}

impl<'a> Pair<'a> {
    fn of(a: &'a Version, b: &'a Version) -> Result<Self, VersionError> {
        match (a, b) {
            (Version::Semantic(a), Version::Semantic(b)) => Ok(Pair::Semantic(a, b)),
            (Version::Hashed(a), Version::Hashed(b)) => Ok(Pair::Hashed(a, b)),
            _ => Err(VersionError::IncompatibleVersionKind {
                left: a.kind(),
                right: b.kind(),
            }),
        }
    }
}

/// Predicates between two versions of the same kind
///
/// Hashed versions have no order: the ordering predicates `>` and `<` are
/// always false for them, while `>=`, `<=`, `~` and `^` reduce to equality.
/// Mixing a semantic and a hashed version is an error.
pub struct Comparator;

impl Comparator {
    /// Three-way comparison, `None` when the versions are unordered hashes
    pub fn try_compare(a: &Version, b: &Version) -> Result<Option<Ordering>, VersionError> {
        Ok(match Pair::of(a, b)? {
            Pair::Semantic(a, b) => Some(compare(a, b)),
            Pair::Hashed(a, b) if a == b => Some(Ordering::Equal),
            Pair::Hashed(..) => None,
        })
    }

    /// Check if a == b
    pub fn equals(a: &Version, b: &Version) -> Result<bool, VersionError> {
        Ok(match Pair::of(a, b)? {
            Pair::Semantic(a, b) => compare(a, b) == Ordering::Equal,
            Pair::Hashed(a, b) => a == b,
        })
    }

    /// Check if a > b
    pub fn greater_than(a: &Version, b: &Version) -> Result<bool, VersionError> {
        Ok(match Pair::of(a, b)? {
            Pair::Semantic(a, b) => compare(a, b) == Ordering::Greater,
            Pair::Hashed(..) => false,
        })
    }

    /// Check if a >= b
    pub fn greater_or_equal(a: &Version, b: &Version) -> Result<bool, VersionError> {
        Ok(match Pair::of(a, b)? {
            Pair::Semantic(a, b) => compare(a, b) != Ordering::Less,
            Pair::Hashed(a, b) => a == b,
        })
    }

    /// Check if a < b
    pub fn less_than(a: &Version, b: &Version) -> Result<bool, VersionError> {
        Ok(match Pair::of(a, b)? {
            Pair::Semantic(a, b) => compare(a, b) == Ordering::Less,
            Pair::Hashed(..) => false,
        })
    }

    /// Check if a <= b
    pub fn less_or_equal(a: &Version, b: &Version) -> Result<bool, VersionError> {
        Ok(match Pair::of(a, b)? {
            Pair::Semantic(a, b) => compare(a, b) != Ordering::Greater,
            Pair::Hashed(a, b) => a == b,
        })
    }

    /// Check if a is within `~b`
    pub fn approximately(a: &Version, b: &Version) -> Result<bool, VersionError> {
        Ok(match Pair::of(a, b)? {
            Pair::Semantic(a, b) => {
                let below_upper = match b.approximate_upper_boundary() {
                    Some(upper) => {
                        // A pre-release of the boundary itself is not in range
                        let unstable_boundary =
                            a.is_prerelease() && a.major == upper.major && a.minor == upper.minor;
                        compare(a, &upper) == Ordering::Less && !unstable_boundary
                    }
                    None => true,
                };

                compare(a, b) != Ordering::Less && below_upper
            }
            Pair::Hashed(a, b) => a == b,
        })
    }

    /// Check if a is within `^b`
    pub fn compatible(a: &Version, b: &Version) -> Result<bool, VersionError> {
        Ok(match Pair::of(a, b)? {
            Pair::Semantic(a, b) => {
                let below_upper = match b.compatible_upper_boundary() {
                    Some(upper) => {
                        let unstable_boundary = a.is_prerelease() && a.major == upper.major;
                        compare(a, &upper) == Ordering::Less && !unstable_boundary
                    }
                    None => true,
                };

                compare(a, b) != Ordering::Less && below_upper
            }
            Pair::Hashed(a, b) => a == b,
        })
    }

    /// Check if a is anything but b
    pub fn not_blacklisted(a: &Version, b: &Version) -> Result<bool, VersionError> {
        Self::equals(a, b).map(|equal| !equal)
    }
}
