//! Version parsing, comparison and range matching
//!
//! This crate parses semantic versions (`1.2.3-rc.1+build.5`) and opaque
//! hashed versions (commit identifiers), orders semantic versions by
//! semver.org precedence and evaluates comma separated range expressions
//! such as `>=1.0.0,<2.0.0,!1.5.6`.

pub mod constraint;
mod comparator;
mod error;
mod input;
mod semver;
pub mod version;
mod version_parser;

pub use comparator::{compare, Comparator};
pub use constraint::{ComparisonExpression, Operator, VersionRange};
pub use error::VersionError;
pub use input::VersionInput;
pub use semver::{parse_range, parse_version, range_matches, Semver};
pub use version::{HashedVersion, Major, SemanticVersion, Version, VersionNumber, VersionParts};
pub use version_parser::VersionParser;
