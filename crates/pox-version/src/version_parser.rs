//! Version and range parsing

use lazy_static::lazy_static;
use regex::Regex;

use crate::constraint::{ComparisonExpression, Operator, VersionRange};
use crate::version::{HashedVersion, SemanticVersion, Version};
use crate::VersionError;

lazy_static! {
    // Numeric components never carry leading zeros
    static ref NUMBER_REGEX: &'static str = r"0|[1-9][0-9]*";

    static ref PRE_RELEASE_IDENT_REGEX: &'static str = r"(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*)";

    static ref BUILD_IDENT_REGEX: &'static str = r"[0-9A-Za-z-]+";

    static ref SEMANTIC_VERSION_RE: Regex = Regex::new(&format!(
        r"^v?({num})\.({num})(?:\.({num}))?(?:-({pre}(?:\.{pre})*))?(?:\+({build}(?:\.{build})*))?$",
        num = *NUMBER_REGEX,
        pre = *PRE_RELEASE_IDENT_REGEX,
        build = *BUILD_IDENT_REGEX,
    )).unwrap();

    static ref PRE_RELEASE_RE: Regex = Regex::new(&format!(
        r"^{pre}(?:\.{pre})*$",
        pre = *PRE_RELEASE_IDENT_REGEX,
    )).unwrap();

    static ref BUILD_METADATA_RE: Regex = Regex::new(&format!(
        r"^{build}(?:\.{build})*$",
        build = *BUILD_IDENT_REGEX,
    )).unwrap();

    static ref HASHED_VERSION_RE: Regex = Regex::new(r"^v?([A-Za-z0-9]{4,})$").unwrap();

    static ref HASH_TOKEN_RE: Regex = Regex::new(r"^[A-Za-z0-9]{4,}$").unwrap();
}

pub(crate) fn is_pre_release(s: &str) -> bool {
    PRE_RELEASE_RE.is_match(s)
}

pub(crate) fn is_build_metadata(s: &str) -> bool {
    BUILD_METADATA_RE.is_match(s)
}

pub(crate) fn is_hash_token(s: &str) -> bool {
    HASH_TOKEN_RE.is_match(s)
}

fn parse_number(input: &str, digits: &str) -> Result<u64, VersionError> {
    digits
        .parse::<u64>()
        .map_err(|_| VersionError::BadVersionString(input.to_string()))
}

/// Parser for version strings and range expressions
///
/// The parser is stateless; [`VersionParser::new`] exists so call sites read
/// the same whether or not an instance is kept around.
#[derive(Debug, Clone, Copy)]
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a string parses as a version of either kind
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse a version of either kind
    ///
    /// The semantic grammar is tried first; input that is not a semantic
    /// version is accepted as a hashed version when it is a plain
    /// alphanumeric token of at least four characters.
    pub fn parse(&self, version: &str) -> Result<Version, VersionError> {
        if let Ok(semantic) = self.parse_semantic(version) {
            return Ok(Version::Semantic(semantic));
        }

        match self.parse_hashed(version) {
            Ok(hashed) => Ok(Version::Hashed(hashed)),
            Err(_) => {
                log::debug!("Rejected version string \"{}\"", version);
                Err(VersionError::BadVersionString(version.to_string()))
            }
        }
    }

    /// Parse a `major.minor[.patch][-pre][+build]` version
    pub fn parse_semantic(&self, version: &str) -> Result<SemanticVersion, VersionError> {
        let trimmed = version.trim();
        let caps = SEMANTIC_VERSION_RE
            .captures(trimmed)
            .ok_or_else(|| VersionError::BadVersionString(version.to_string()))?;

        let major = parse_number(version, &caps[1])?;
        let minor = parse_number(version, &caps[2])?;
        let patch_level = caps
            .get(3)
            .map(|m| parse_number(version, m.as_str()))
            .transpose()?;

        Ok(SemanticVersion {
            major,
            minor,
            patch_level,
            pre_release: caps.get(4).map(|m| m.as_str().to_string()),
            build: caps.get(5).map(|m| m.as_str().to_string()),
        })
    }

    /// Parse an opaque hashed version such as a commit identifier
    pub fn parse_hashed(&self, version: &str) -> Result<HashedVersion, VersionError> {
        let trimmed = version.trim();
        let caps = HASHED_VERSION_RE
            .captures(trimmed)
            .ok_or_else(|| VersionError::BadVersionString(version.to_string()))?;

        HashedVersion::new(&caps[1])
    }

    /// Parse a comma separated range expression such as `>=1.0.0,<2.0.0`
    ///
    /// Blank input yields an empty range, which matches every version.
    pub fn parse_range(&self, range: &str) -> Result<VersionRange, VersionError> {
        let trimmed = range.trim();
        if trimmed.is_empty() {
            return Ok(VersionRange::new(Vec::new()));
        }

        let expressions = trimmed
            .split(',')
            .map(|clause| self.parse_comparison(clause))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(VersionRange::new(expressions))
    }

    /// Parse a single `<operator><version>` clause
    pub fn parse_comparison(&self, clause: &str) -> Result<ComparisonExpression, VersionError> {
        let clause = clause.trim();

        let Some((operator, rest)) = Operator::split_leading(clause) else {
            log::debug!("No operator found in range clause \"{}\"", clause);
            return Err(VersionError::UnsupportedComparisonExpression {
                expression: clause.to_string(),
                source: None,
            });
        };

        let version = self.parse(rest).map_err(|err| {
            log::debug!("Invalid version in range clause \"{}\": {}", clause, err);
            VersionError::UnsupportedComparisonExpression {
                expression: clause.to_string(),
                source: Some(Box::new(err)),
            }
        })?;

        Ok(ComparisonExpression::new(operator, version))
    }
}

impl Default for VersionParser {
    fn default() -> Self {
        Self::new()
    }
}
