//! Error type shared by the parser, comparator and range evaluator

use thiserror::Error;

/// Errors raised while parsing or comparing versions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The input was not string-typed (e.g. a JSON `null` or number)
    #[error("Expected a version string, got {kind}")]
    NotAVersionString { kind: String },

    /// The input was a string but does not follow the version grammar
    #[error("Invalid version string \"{0}\"")]
    BadVersionString(String),

    #[error("Unknown operator \"{0}\", expected one of: =, >, >=, <, <=, ~, ^, !")]
    UnknownOperator(String),

    /// A range clause has no leading operator, or its version part is malformed
    #[error("Unsupported comparison expression \"{expression}\"")]
    UnsupportedComparisonExpression {
        expression: String,
        #[source]
        source: Option<Box<VersionError>>,
    },

    #[error("Cannot compare a {left} version with a {right} version")]
    IncompatibleVersionKind {
        left: &'static str,
        right: &'static str,
    },
}
