use std::cmp::Ordering;

use sem_version::{Comparator, Semver, Version, VersionParser};

const SEMVER_ORG_CHAIN: &[&str] = &[
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc.1",
    "1.0.0-rc.1+build.1",
    "1.0.0",
    "1.0.0+0.3.7",
    "1.3.7+build",
    "1.3.7+build.2.b8f12d7",
    "1.3.7+build.11.e0f985a",
];

const FIXTURES: &[&str] = &[
    "0.0.0",
    "0.0.1",
    "0.1.0",
    "1.0.0-100",
    "1.0.0-a",
    "1.0.0-a.3",
    "1.0.0-a.3.b",
    "1.0.0-a.3.3",
    "1.0.0-pre+build",
    "1.0.0+a",
    "1.0.0+100",
    "2.0.0-rc.1",
    "10.0.0",
];

fn v(s: &str) -> Version {
    Version::from_string(s).unwrap()
}

fn all_versions() -> Vec<Version> {
    SEMVER_ORG_CHAIN.iter().chain(FIXTURES).map(|s| v(s)).collect()
}

#[test]
fn test_semver_org_chain_is_strictly_increasing() {
    for pair in SEMVER_ORG_CHAIN.windows(2) {
        assert!(v(pair[0]) < v(pair[1]), "expected {} < {}", pair[0], pair[1]);
    }
}

#[test]
fn test_sort_reproduces_semver_org_chain() {
    let mut shuffled: Vec<&str> = SEMVER_ORG_CHAIN.to_vec();
    shuffled.reverse();
    shuffled.swap(2, 7);
    assert_eq!(Semver::sort(&shuffled), SEMVER_ORG_CHAIN);
}

#[test]
fn test_exactly_one_relation_holds() {
    let versions = all_versions();
    for a in &versions {
        for b in &versions {
            let relations = [a < b, a == b, a > b];
            assert_eq!(
                relations.iter().filter(|r| **r).count(),
                1,
                "{} vs {}",
                a,
                b
            );
            assert_eq!(Comparator::compare(a, b), Comparator::compare(b, a).reverse());
        }
    }
}

#[test]
fn test_transitivity() {
    let versions = all_versions();
    for a in &versions {
        for b in &versions {
            for c in &versions {
                if a < b && b < c {
                    assert!(a < c, "{} < {} < {} but not {} < {}", a, b, c, a, c);
                }
            }
        }
    }
}

#[test]
fn test_round_trip_is_exact() {
    let parser = VersionParser::new();
    for input in SEMVER_ORG_CHAIN.iter().chain(FIXTURES).chain(["007.08.09-01+02"].iter()) {
        assert_eq!(v(input).to_string(), *input);
        let parts = parser.parse(input).unwrap();
        assert_eq!(Version::from_parts(parts).unwrap().to_string(), *input);
    }
}

#[test]
fn test_release_outranks_prerelease_and_build_outranks_release() {
    assert!(v("1.0.0") > v("1.0.0-pre"));
    assert!(v("1.0.0+x") > v("1.0.0"));
    assert!(v("1.0.0-a") > v("1.0.0-100"));
    assert!(v("1.0.0-a.3.b") > v("1.0.0-a.3"));
    assert_eq!(v("1.0.0").cmp(&v("1.0.0")), Ordering::Equal);
}

#[test]
fn test_loose_defaulting() {
    assert_eq!(Version::parse_loose("1").unwrap().to_tuple(), (1, 0, 0, None, None));
    assert_eq!(Version::parse_loose("1.2").unwrap().to_tuple(), (1, 2, 0, None, None));
    assert!(Version::from_string("1").is_err());
    assert!(Version::from_string("1.2").is_err());
}

#[test]
fn test_end_to_end_prerelease_against_release_bound() {
    assert!(Semver::satisfies("1.0.0-rc.1+build.1", "< 1.0.0").unwrap());
}
