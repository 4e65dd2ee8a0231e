//! Satisfies command - filter versions through a range.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use pox_version::{Semver, Version, VersionRange};

use crate::config::OutputFormat;

#[derive(Args, Debug)]
pub struct SatisfiesArgs {
    /// Range expression, e.g. ">=1.0.0,<2.0.0"
    pub range: String,

    /// Candidate versions
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Only print the highest satisfying version
    #[arg(long)]
    pub max: bool,
}

/// Candidates satisfying the range, in input order
fn matching<'a>(range: &VersionRange, versions: &'a [String]) -> Vec<&'a str> {
    versions
        .iter()
        .filter(|raw| match Version::parse(raw) {
            Ok(version) => range.matches(&version),
            Err(e) => {
                log::warn!("Skipping \"{}\": {}", raw, e);
                false
            }
        })
        .map(String::as_str)
        .collect()
}

pub fn execute(args: SatisfiesArgs, format: OutputFormat) -> Result<u8> {
    let range = VersionRange::parse(&args.range).with_context(|| format!("Invalid range \"{}\"", args.range))?;
    log::debug!("Parsed range {} ({} expressions)", range, range.len());

    let mut found = matching(&range, &args.versions);
    if args.max {
        found = Semver::max_satisfying(&found, &args.range)
            .and_then(|max| found.iter().copied().find(|v| *v == max))
            .into_iter()
            .collect();
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&found)?),
        OutputFormat::Text => {
            for version in &found {
                println!("{}", version.green());
            }
        }
    }

    Ok(if found.is_empty() { 1 } else { 0 })
}
