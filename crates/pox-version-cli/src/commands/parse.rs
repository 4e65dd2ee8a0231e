//! Parse command - show the parts of versions.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use pox_version::{Version, VersionNumber, VersionParser, VersionParts};

use crate::config::OutputFormat;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Versions to parse
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Reject hashed versions
    #[arg(long)]
    pub semantic: bool,
}

#[derive(Serialize)]
struct ParsedVersion<'a> {
    input: &'a str,
    version: String,
    kind: &'static str,
    #[serde(flatten)]
    parts: VersionParts<'a>,
}

/// Parse every input, failing on the first invalid one
fn parse_versions(versions: &[String], semantic_only: bool) -> Result<Vec<(&str, Version)>> {
    let parser = VersionParser::new();

    versions
        .iter()
        .map(|raw| {
            let version = if semantic_only {
                parser.parse_semantic(raw).map(Version::Semantic)
            } else {
                parser.parse(raw)
            };
            version
                .map(|version| (raw.as_str(), version))
                .with_context(|| format!("Could not parse \"{}\"", raw))
        })
        .collect()
}

fn rows<'a>(parsed: &'a [(&'a str, Version)]) -> Vec<ParsedVersion<'a>> {
    parsed
        .iter()
        .map(|(input, version)| ParsedVersion {
            input: *input,
            version: version.to_string(),
            kind: version.kind(),
            parts: version.to_parts(),
        })
        .collect()
}

pub fn execute(args: ParseArgs, format: OutputFormat) -> Result<u8> {
    let parsed = parse_versions(&args.versions, args.semantic)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows(&parsed))?),
        OutputFormat::Text => {
            for (_, version) in &parsed {
                println!("{} ({})", version.to_string().bold(), version.kind());
                println!("  major:       {}", version.major());
                if let Some(minor) = version.minor() {
                    println!("  minor:       {}", minor);
                }
                if let Some(patch) = version.patch_level() {
                    println!("  patch:       {}", patch);
                }
                if let Some(pre) = version.pre_release() {
                    println!("  pre-release: {}", pre);
                }
                if let Some(build) = version.build() {
                    println!("  build:       {}", build);
                }
            }
        }
    }

    Ok(0)
}
