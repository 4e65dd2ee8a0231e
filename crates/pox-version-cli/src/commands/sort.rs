//! Sort command - order versions by precedence.

use anyhow::{bail, Result};
use clap::Args;

use pox_version::SemanticVersion;

use crate::config::OutputFormat;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,

    /// Fail on versions that cannot be sorted, overrides pox-version.toml
    #[arg(long)]
    pub strict: bool,
}

/// Sort semantic versions, keeping equal versions in input order
fn sort_versions<'a>(versions: &'a [String], reverse: bool, skip_invalid: bool) -> Result<Vec<&'a str>> {
    let mut parsed = Vec::with_capacity(versions.len());
    for raw in versions {
        match SemanticVersion::parse(raw) {
            Ok(version) => parsed.push((version, raw.as_str())),
            Err(e) if skip_invalid => log::warn!("Skipping \"{}\": {}", raw, e),
            Err(e) => bail!("Cannot sort \"{}\": {}", raw, e),
        }
    }

    parsed.sort_by(|(a, _), (b, _)| if reverse { b.cmp(a) } else { a.cmp(b) });

    Ok(parsed.into_iter().map(|(_, raw)| raw).collect())
}

pub fn execute(args: SortArgs, format: OutputFormat, skip_invalid: bool) -> Result<u8> {
    let sorted = sort_versions(&args.versions, args.reverse, skip_invalid && !args.strict)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sorted)?),
        OutputFormat::Text => {
            for version in &sorted {
                println!("{}", version);
            }
        }
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sort_versions() {
        let versions = strings(&["1.0.0", "1.0.0-rc.1", "0.9", "1.0.0-beta.11", "1.0.0-beta.2"]);
        assert_eq!(
            sort_versions(&versions, false, true).unwrap(),
            vec!["0.9", "1.0.0-beta.2", "1.0.0-beta.11", "1.0.0-rc.1", "1.0.0"]
        );
        assert_eq!(
            sort_versions(&versions, true, true).unwrap(),
            vec!["1.0.0", "1.0.0-rc.1", "1.0.0-beta.11", "1.0.0-beta.2", "0.9"]
        );
    }

    #[test]
    fn test_sort_invalid_versions() {
        let versions = strings(&["2.0", "5114f85", "1.0"]);
        assert_eq!(sort_versions(&versions, false, true).unwrap(), vec!["1.0", "2.0"]);
        assert!(sort_versions(&versions, false, false).is_err());
    }
}
