//! Operator types for comparison expressions

use std::fmt;
use std::str::FromStr;

use crate::comparator::Comparator;
use crate::version::Version;
use crate::VersionError;

/// Comparison operators usable in a range expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equals,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessOrEqual,
    /// Approximately (~), up to the next minor or major version
    Approximately,
    /// Compatible (^), up to the next major version
    Compatible,
    /// Not blacklisted (!), anything but the given version
    NotBlacklisted,
}

impl Operator {
    /// Every operator, ordered so that no symbol is shadowed by a shorter
    /// prefix of itself when matched in order
    pub const ALL: [Operator; 8] = [
        Operator::GreaterOrEqual,
        Operator::LessOrEqual,
        Operator::Equals,
        Operator::Approximately,
        Operator::Compatible,
        Operator::NotBlacklisted,
        Operator::GreaterThan,
        Operator::LessThan,
    ];

    /// Parse operator from its symbol
    pub fn from_symbol(s: &str) -> Result<Self, VersionError> {
        match s {
            "=" => Ok(Operator::Equals),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterOrEqual),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessOrEqual),
            "~" => Ok(Operator::Approximately),
            "^" => Ok(Operator::Compatible),
            "!" => Ok(Operator::NotBlacklisted),
            _ => Err(VersionError::UnknownOperator(s.to_string())),
        }
    }

    /// Get the symbol of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::GreaterThan => ">",
            Operator::GreaterOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessOrEqual => "<=",
            Operator::Approximately => "~",
            Operator::Compatible => "^",
            Operator::NotBlacklisted => "!",
        }
    }

    /// Human readable name of the operator
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::GreaterThan => "greater-than",
            Operator::GreaterOrEqual => "greater-or-equal",
            Operator::LessThan => "less-than",
            Operator::LessOrEqual => "less-or-equal",
            Operator::Approximately => "approximately",
            Operator::Compatible => "compatible",
            Operator::NotBlacklisted => "not-blacklisted",
        }
    }

    /// Get all supported operator symbols
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", ">", ">=", "<", "<=", "~", "^", "!"]
    }

    /// Split the longest leading operator symbol off `input`
    pub fn split_leading(input: &str) -> Option<(Operator, &str)> {
        Self::ALL
            .iter()
            .find_map(|op| input.strip_prefix(op.as_str()).map(|rest| (*op, rest)))
    }

    /// Evaluate `candidate <op> version`
    pub fn evaluate(&self, candidate: &Version, version: &Version) -> Result<bool, VersionError> {
        let result = match self {
            Operator::Equals => Comparator::equals(candidate, version),
            Operator::GreaterThan => Comparator::greater_than(candidate, version),
            Operator::GreaterOrEqual => Comparator::greater_or_equal(candidate, version),
            Operator::LessThan => Comparator::less_than(candidate, version),
            Operator::LessOrEqual => Comparator::less_or_equal(candidate, version),
            Operator::Approximately => Comparator::approximately(candidate, version),
            Operator::Compatible => Comparator::compatible(candidate, version),
            Operator::NotBlacklisted => Comparator::not_blacklisted(candidate, version),
        }?;

        log::trace!("{} {}{} => {}", candidate, self, version, result);
        Ok(result)
    }
}

impl FromStr for Operator {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_symbol(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol_round_trip() {
        for symbol in Operator::supported_operators() {
            assert_eq!(Operator::from_symbol(symbol).unwrap().as_str(), *symbol);
        }
    }

    #[test]
    fn test_unknown_operator() {
        for symbol in ["==", "!=", "<>", "~>", "", "=>"] {
            assert_eq!(
                Operator::from_symbol(symbol).unwrap_err(),
                VersionError::UnknownOperator(symbol.to_string())
            );
        }
        assert!("^".parse::<Operator>().is_ok());
    }

    #[test]
    fn test_split_leading_prefers_longest() {
        assert_eq!(Operator::split_leading(">=1.0"), Some((Operator::GreaterOrEqual, "1.0")));
        assert_eq!(Operator::split_leading("<=1.0"), Some((Operator::LessOrEqual, "1.0")));
        assert_eq!(Operator::split_leading(">1.0"), Some((Operator::GreaterThan, "1.0")));
        assert_eq!(Operator::split_leading("=>1.0"), Some((Operator::Equals, ">1.0")));
        assert_eq!(Operator::split_leading("! 1.0"), Some((Operator::NotBlacklisted, " 1.0")));
        assert_eq!(Operator::split_leading("1.0"), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Operator::Approximately.name(), "approximately");
        assert_eq!(Operator::NotBlacklisted.name(), "not-blacklisted");
        assert_eq!(Operator::GreaterOrEqual.to_string(), ">=");
    }

    #[test]
    fn test_evaluate() {
        let candidate = Version::parse("1.2.9").unwrap();
        let version = Version::parse("1.2.3").unwrap();

        assert!(Operator::Approximately.evaluate(&candidate, &version).unwrap());
        assert!(Operator::Compatible.evaluate(&candidate, &version).unwrap());
        assert!(Operator::GreaterThan.evaluate(&candidate, &version).unwrap());
        assert!(!Operator::Equals.evaluate(&candidate, &version).unwrap());

        let hashed = Version::parse("5114f85").unwrap();
        assert!(Operator::Equals.evaluate(&candidate, &hashed).is_err());
    }
}
