//! Raw-or-parsed version arguments

use serde_json::Value;

use crate::version::Version;
use crate::{VersionError, VersionParser};

/// A version argument as handed over by a caller
///
/// Call sites that accept either a string or an already parsed [`Version`]
/// take `impl Into<VersionInput>` and resolve it once.
#[derive(Debug, Clone)]
pub enum VersionInput {
    Text(String),
    Parsed(Version),
    /// A value that is not a string at all, named by its type
    NonString(String),
}

impl VersionInput {
    /// Turn the input into a version, parsing it if needed
    pub fn resolve(self) -> Result<Version, VersionError> {
        match self {
            VersionInput::Text(text) => VersionParser::new().parse(&text),
            VersionInput::Parsed(version) => Ok(version),
            VersionInput::NonString(kind) => Err(VersionError::NotAVersionString { kind }),
        }
    }
}

impl From<&str> for VersionInput {
    fn from(s: &str) -> Self {
        VersionInput::Text(s.to_string())
    }
}

impl From<String> for VersionInput {
    fn from(s: String) -> Self {
        VersionInput::Text(s)
    }
}

impl From<&String> for VersionInput {
    fn from(s: &String) -> Self {
        VersionInput::Text(s.clone())
    }
}

impl From<Version> for VersionInput {
    fn from(v: Version) -> Self {
        VersionInput::Parsed(v)
    }
}

impl From<&Version> for VersionInput {
    fn from(v: &Version) -> Self {
        VersionInput::Parsed(v.clone())
    }
}

impl<T: Into<VersionInput>> From<Option<T>> for VersionInput {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => VersionInput::NonString("null".to_string()),
        }
    }
}

/// JSON documents (manifests, lock files) may hold anything where a version
/// is expected.
impl From<Value> for VersionInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => VersionInput::Text(s),
            Value::Null => VersionInput::NonString("null".to_string()),
            Value::Bool(_) => VersionInput::NonString("boolean".to_string()),
            Value::Number(_) => VersionInput::NonString("number".to_string()),
            Value::Array(_) => VersionInput::NonString("array".to_string()),
            Value::Object(_) => VersionInput::NonString("object".to_string()),
        }
    }
}
