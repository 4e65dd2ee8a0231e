//! Opaque versions identified by a token, such as a commit hash

use std::fmt;
use std::str::FromStr;

use super::{Major, VersionNumber};
use crate::version_parser::is_hash_token;
use crate::{VersionError, VersionParser};

/// A version identified only by an alphanumeric token
///
/// Hashed versions have no internal ordering: two of them are either the
/// same token or unrelated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashedVersion {
    token: String,
}

impl HashedVersion {
    /// Create a hashed version from a bare token (no `v` prefix handling)
    pub fn new(token: impl Into<String>) -> Result<Self, VersionError> {
        let token = token.into();
        if !is_hash_token(&token) {
            return Err(VersionError::BadVersionString(token));
        }
        Ok(HashedVersion { token })
    }

    pub fn parse(input: &str) -> Result<Self, VersionError> {
        VersionParser::new().parse_hashed(input)
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl VersionNumber for HashedVersion {
    fn major(&self) -> Major<'_> {
        Major::Token(&self.token)
    }

    fn minor(&self) -> Option<u64> {
        None
    }

    fn patch_level(&self) -> Option<u64> {
        None
    }

    fn pre_release(&self) -> Option<&str> {
        None
    }

    fn build(&self) -> Option<&str> {
        None
    }

    fn approximate_upper_boundary(&self) -> Option<Self> {
        Some(self.clone())
    }

    fn compatible_upper_boundary(&self) -> Option<Self> {
        Some(self.clone())
    }
}

impl fmt::Display for HashedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}

impl FromStr for HashedVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashedVersion::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_token() {
        assert_eq!(HashedVersion::new("5114f85").unwrap().token(), "5114f85");
        assert!(HashedVersion::new("abc").is_err());
        assert!(HashedVersion::new("ab-cd").is_err());
        assert!(HashedVersion::new("").is_err());
    }

    #[test]
    fn test_boundaries_are_identity() {
        let v = HashedVersion::new("deadbeef").unwrap();
        assert_eq!(v.approximate_upper_boundary(), Some(v.clone()));
        assert_eq!(v.compatible_upper_boundary(), Some(v.clone()));
    }
}
