//! Conjunctive version ranges

use std::fmt;
use std::str::FromStr;

use super::ComparisonExpression;
use crate::version::Version;
use crate::{VersionError, VersionParser};

/// A conjunction of comparison expressions, e.g. `>=1.0.0,<2.0.0,!1.5.6`
///
/// A version satisfies the range when it satisfies every expression. An
/// empty range matches every version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRange {
    expressions: Vec<ComparisonExpression>,
}

impl VersionRange {
    /// Create a range from expressions, kept in the given order
    pub fn new(expressions: Vec<ComparisonExpression>) -> Self {
        VersionRange { expressions }
    }

    /// Parse a comma separated range expression
    pub fn parse(range: &str) -> Result<Self, VersionError> {
        VersionParser::new().parse_range(range)
    }

    /// Get the expressions in source order
    pub fn expressions(&self) -> &[ComparisonExpression] {
        &self.expressions
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Check a version against every expression, failing if any expression
    /// holds a version of a different kind
    pub fn try_matches(&self, version: &Version) -> Result<bool, VersionError> {
        for expression in &self.expressions {
            if !expression.try_matches(version)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Check if a version satisfies every expression
    pub fn matches(&self, version: &Version) -> bool {
        self.expressions.iter().all(|expression| expression.matches(version))
    }
}

impl FromIterator<ComparisonExpression> for VersionRange {
    fn from_iter<I: IntoIterator<Item = ComparisonExpression>>(iter: I) -> Self {
        VersionRange::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a VersionRange {
    type Item = &'a ComparisonExpression;
    type IntoIter = std::slice::Iter<'a, ComparisonExpression>;

    fn into_iter(self) -> Self::IntoIter {
        self.expressions.iter()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.expressions.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

impl FromStr for VersionRange {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionRange::parse(s)
    }
}
