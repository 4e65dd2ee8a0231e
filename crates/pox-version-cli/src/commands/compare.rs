//! Compare command - order two versions.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;
use std::cmp::Ordering;

use pox_version::{Comparator, Version};

use crate::config::OutputFormat;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    pub left: String,

    /// Right-hand version
    pub right: String,
}

/// Symbol for a comparison result; distinct hashes are unordered
fn ordering_symbol(ordering: Option<Ordering>) -> &'static str {
    match ordering {
        Some(Ordering::Less) => "<",
        Some(Ordering::Equal) => "=",
        Some(Ordering::Greater) => ">",
        None => "!=",
    }
}

/// Parse both sides and compare them; a semantic and a hashed version fail
fn compare_versions(left: &str, right: &str) -> Result<(Version, Version, &'static str)> {
    let left_version = Version::parse(left).with_context(|| format!("Could not parse \"{}\"", left))?;
    let right_version = Version::parse(right).with_context(|| format!("Could not parse \"{}\"", right))?;

    let ordering = Comparator::try_compare(&left_version, &right_version)
        .with_context(|| format!("Cannot compare \"{}\" with \"{}\"", left, right))?;

    Ok((left_version, right_version, ordering_symbol(ordering)))
}

pub fn execute(args: CompareArgs, format: OutputFormat) -> Result<u8> {
    let (left, right, symbol) = compare_versions(&args.left, &args.right)?;

    match format {
        OutputFormat::Json => {
            let out = json!({
                "left": left.to_string(),
                "right": right.to_string(),
                "result": symbol,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => println!("{} {} {}", left, symbol, right),
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_symbol() {
        let a = Version::parse("1.0.0-rc.1").unwrap();
        let b = Version::parse("1.0.0").unwrap();
        let h = Version::parse("5114f85").unwrap();
        let g = Version::parse("a94a8fe").unwrap();

        assert_eq!(ordering_symbol(Comparator::try_compare(&a, &b).unwrap()), "<");
        assert_eq!(ordering_symbol(Comparator::try_compare(&b, &a).unwrap()), ">");
        assert_eq!(ordering_symbol(Comparator::try_compare(&h, &h).unwrap()), "=");
        assert_eq!(ordering_symbol(Comparator::try_compare(&h, &g).unwrap()), "!=");
    }

    #[test]
    fn test_compare_versions() {
        let (left, right, symbol) = compare_versions("v2.0", "1.9.9").unwrap();
        assert_eq!((left.to_string().as_str(), right.to_string().as_str(), symbol), ("2.0", "1.9.9", ">"));

        let err = compare_versions("1.0.0", "5114f85").unwrap_err();
        assert_eq!(err.to_string(), "Cannot compare \"1.0.0\" with \"5114f85\"");
        assert!(matches!(
            err.downcast_ref::<pox_version::VersionError>(),
            Some(pox_version::VersionError::IncompatibleVersionKind { .. })
        ));

        assert!(compare_versions("1.0.0", "hello world!").is_err());
    }
}
