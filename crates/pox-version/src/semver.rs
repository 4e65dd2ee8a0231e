//! Semver facade providing high-level version operations

use std::cmp::Ordering;

use crate::constraint::VersionRange;
use crate::version::{SemanticVersion, Version};
use crate::{VersionError, VersionParser};

/// Parse a version of either kind
pub fn parse_version(version: &str) -> Result<Version, VersionError> {
    VersionParser::new().parse(version)
}

/// Parse a comma separated range expression
pub fn parse_range(range: &str) -> Result<VersionRange, VersionError> {
    VersionParser::new().parse_range(range)
}

/// Check a version against a parsed range
pub fn range_matches(range: &VersionRange, version: &Version) -> bool {
    range.matches(version)
}

/// Main facade for string level version operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a range
    ///
    /// Unparsable input never satisfies anything.
    pub fn satisfies(version: &str, range: &str) -> bool {
        let parser = VersionParser::new();

        let version = match parser.parse(version) {
            Ok(v) => v,
            Err(_) => return false,
        };

        let range = match parser.parse_range(range) {
            Ok(r) => r,
            Err(_) => return false,
        };

        range.matches(&version)
    }

    /// Return all versions that satisfy the given range, in input order
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let parser = VersionParser::new();
        let range = match parser.parse_range(range) {
            Ok(r) => r,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter(|v| parser.parse(v).is_ok_and(|parsed| range.matches(&parsed)))
            .map(|v| v.to_string())
            .collect()
    }

    /// Return the highest semantic version that satisfies the given range
    pub fn max_satisfying(versions: &[&str], range: &str) -> Option<String> {
        let parser = VersionParser::new();
        let range = parser.parse_range(range).ok()?;

        versions
            .iter()
            .filter_map(|v| {
                let semantic = parser.parse_semantic(v).ok()?;
                range
                    .matches(&Version::Semantic(semantic.clone()))
                    .then_some((semantic, *v))
            })
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, v)| v.to_string())
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let parser = VersionParser::new();

        // Hashed versions have no order and are left out
        let mut parsed: Vec<(SemanticVersion, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((parser.parse_semantic(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp: Ordering = a.cmp(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
