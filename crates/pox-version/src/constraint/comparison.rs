//! A single `<operator><version>` clause

use std::fmt;
use std::str::FromStr;

use super::Operator;
use crate::input::VersionInput;
use crate::version::Version;
use crate::{VersionError, VersionParser};

/// One operator applied to one version, e.g. `>=1.0.0`
#[derive(Debug, Clone)]
pub struct ComparisonExpression {
    operator: Operator,
    version: Version,
}

impl ComparisonExpression {
    /// Create a new comparison expression
    pub fn new(operator: Operator, version: Version) -> Self {
        ComparisonExpression { operator, version }
    }

    /// Create a comparison expression from an operator symbol and a raw or
    /// already parsed version
    pub fn from_symbol(symbol: &str, version: impl Into<VersionInput>) -> Result<Self, VersionError> {
        let operator = Operator::from_symbol(symbol)?;
        let version = version.into().resolve()?;
        Ok(Self::new(operator, version))
    }

    /// Parse a clause such as `~1.4`
    pub fn parse(clause: &str) -> Result<Self, VersionError> {
        VersionParser::new().parse_comparison(clause)
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Evaluate the expression against a candidate version
    pub fn try_matches(&self, candidate: &Version) -> Result<bool, VersionError> {
        self.operator.evaluate(candidate, &self.version)
    }

    /// Evaluate the expression, treating incomparable kinds as a mismatch
    pub fn matches(&self, candidate: &Version) -> bool {
        self.try_matches(candidate).unwrap_or_else(|err| {
            log::debug!("{} does not match {}: {}", candidate, self, err);
            false
        })
    }
}

/// Expressions are equal when their operators match and their versions agree
/// field by field. Build metadata is ignored, an absent patch level is not:
/// `~1.4` and `~1.4.0` have different boundaries.
impl PartialEq for ComparisonExpression {
    fn eq(&self, other: &Self) -> bool {
        self.operator == other.operator && same_version(&self.version, &other.version)
    }
}

impl Eq for ComparisonExpression {}

fn same_version(a: &Version, b: &Version) -> bool {
    match (a, b) {
        (Version::Semantic(a), Version::Semantic(b)) => {
            (a.major, a.minor, a.patch_level, &a.pre_release) == (b.major, b.minor, b.patch_level, &b.pre_release)
        }
        (Version::Hashed(a), Version::Hashed(b)) => a == b,
        _ => false,
    }
}

impl fmt::Display for ComparisonExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

impl FromStr for ComparisonExpression {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComparisonExpression::parse(s)
    }
}
