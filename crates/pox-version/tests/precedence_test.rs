//! Integration tests for version precedence and range matching
//!
//! These exercise the public API only, the way a resolver or CLI would.

use pox_version::{
    compare, parse_range, parse_version, range_matches, Comparator, SemanticVersion, Version, VersionError,
    VersionInput, VersionNumber, VersionRange,
};
use std::cmp::Ordering;

fn matches(range: &str, version: &str) -> bool {
    range_matches(&parse_range(range).unwrap(), &parse_version(version).unwrap())
}

#[test]
fn test_round_trip() {
    for input in [
        "1.0",
        "1.0.0",
        "1.0.0-alpha.1",
        "1.0.0-alpha+build.5",
        "0.0.0-0",
        "12.34.56-rc.7+exp.sha.5114f85",
        "5114f85",
    ] {
        assert_eq!(parse_version(input).unwrap().to_string(), input);
    }

    // The `v` prefix is accepted but not kept
    assert_eq!(parse_version("v2.1.0").unwrap().to_string(), "2.1.0");
}

#[test]
fn test_pre_release_ordering() {
    let ordered: Vec<SemanticVersion> = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
    ]
    .iter()
    .map(|s| SemanticVersion::parse(s).unwrap())
    .collect();

    for (i, a) in ordered.iter().enumerate() {
        assert_eq!(compare(a, a), Ordering::Equal);
        for b in &ordered[i + 1..] {
            assert_eq!(compare(a, b), Ordering::Less, "{} < {}", a, b);
            assert_eq!(compare(b, a), Ordering::Greater, "{} > {}", b, a);
        }
    }

    let mut shuffled = ordered.clone();
    shuffled.reverse();
    shuffled.swap(1, 5);
    shuffled.sort();
    assert_eq!(shuffled, ordered);
}

#[test]
fn test_optional_patch_equivalence() {
    let short = parse_version("1.0").unwrap();
    let full = parse_version("1.0.0").unwrap();

    assert_eq!(Comparator::try_compare(&short, &full).unwrap(), Some(Ordering::Equal));
    assert!(!short.has_patch_level());
    assert!(full.has_patch_level());
}

#[test]
fn test_build_metadata_irrelevance() {
    let a = SemanticVersion::parse("1.0.0+R1").unwrap();
    let b = SemanticVersion::parse("1.0.0+R2").unwrap();
    assert_eq!(compare(&a, &b), Ordering::Equal);
}

#[test]
fn test_tilde_boundary() {
    assert!(matches("~1.2.3", "1.2.9"));
    assert!(!matches("~1.2.3", "1.3.0"));
    assert!(!matches("~1.2.3", "1.3.0-alpha"));
}

#[test]
fn test_caret_boundary() {
    assert!(matches("^1.4.9", "1.9.9"));
    assert!(!matches("^1.4.9", "2.0.0"));
}

#[test]
fn test_boundary_past_last_major() {
    let last = "18446744073709551615.0.0";
    assert!(matches(&format!("^{}", last), last));
    assert!(matches(&format!("~{}", last), last));
    assert!(!matches(&format!("^{}", last), "18446744073709551615.0.0-rc.1"));
}

#[test]
fn test_missing_patch_distinguishes_tilde_ranges() {
    let short = parse_range("~1.4").unwrap();
    let full = parse_range("~1.4.0").unwrap();
    assert_ne!(short, full);

    let candidate = parse_version("1.9.0").unwrap();
    assert!(range_matches(&short, &candidate));
    assert!(!range_matches(&full, &candidate));
}

#[test]
fn test_range_conjunction() {
    assert!(!matches(">1.0,<2.0,!1.5.6", "1.5.6"));
    assert!(matches(">1.0,<2.0,!1.5.6", "1.5.0"));
}

#[test]
fn test_hash_degeneracy() {
    let h1: Version = "5114f85".parse().unwrap();
    let h2: Version = "a94a8fe".parse().unwrap();

    assert!(!Comparator::greater_than(&h1, &h2).unwrap());
    assert!(!Comparator::less_than(&h1, &h2).unwrap());
    assert!(Comparator::equals(&h1, &h1).unwrap());
}

#[test]
fn test_error_cases() {
    assert!(matches!(parse_version("00.0.1 "), Err(VersionError::BadVersionString(_))));
    assert!(matches!(parse_version("hello world!"), Err(VersionError::BadVersionString(_))));
    assert!(matches!(
        VersionInput::from(None::<&str>).resolve(),
        Err(VersionError::NotAVersionString { .. })
    ));
    assert!(matches!(
        parse_range("1.0.0"),
        Err(VersionError::UnsupportedComparisonExpression { .. })
    ));
    assert!(matches!(
        pox_version::Operator::from_symbol("=="),
        Err(VersionError::UnknownOperator(_))
    ));
}

#[test]
fn test_empty_range_policy() {
    let range: VersionRange = "".parse().unwrap();
    assert!(range.is_empty());
    assert!(range.matches(&parse_version("0.0.1-alpha").unwrap()));
    assert!(parse_range(",").is_err());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        parse_version("1.x").unwrap_err().to_string(),
        "Invalid version string \"1.x\""
    );
    assert_eq!(
        parse_range(">=1.0,2.0").unwrap_err().to_string(),
        "Unsupported comparison expression \"2.0\""
    );
}
