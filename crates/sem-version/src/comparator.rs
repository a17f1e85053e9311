//! Version comparison utilities

use std::cmp::Ordering;

use crate::Version;

/// Which side wins when only one of two identifier lists is present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Absent {
    /// A missing list ranks above a present one (pre-release)
    Greater,
    /// A missing list ranks below a present one (build metadata)
    Less,
}

/// Comparator implementing semver precedence
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Greater
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Less
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Less
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Greater
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Equal
    }

    /// Total order over versions
    ///
    /// Numeric components first, then the pre-release (a release outranks its
    /// pre-releases), then the build metadata (present outranks absent).
    pub fn compare(version1: &Version, version2: &Version) -> Ordering {
        version1
            .major()
            .cmp(&version2.major())
            .then_with(|| version1.minor().cmp(&version2.minor()))
            .then_with(|| version1.patch().cmp(&version2.patch()))
            .then_with(|| compare_identifiers(version1.pre(), version2.pre(), Absent::Greater))
            .then_with(|| compare_identifiers(version1.build(), version2.build(), Absent::Less))
    }
}

fn compare_identifiers(ours: Option<&str>, theirs: Option<&str>, absent: Absent) -> Ordering {
    let (ours, theirs) = match (ours, theirs) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => {
            return match absent {
                Absent::Greater => Ordering::Greater,
                Absent::Less => Ordering::Less,
            };
        }
        (Some(_), None) => {
            return match absent {
                Absent::Greater => Ordering::Less,
                Absent::Less => Ordering::Greater,
            };
        }
        (Some(ours), Some(theirs)) => (ours, theirs),
    };

    let mut ours = ours.split('.');
    let mut theirs = theirs.split('.');
    loop {
        match (ours.next(), theirs.next()) {
            (None, None) => return Ordering::Equal,
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (Some(a), Some(b)) => match compare_segment(a, b) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

fn compare_segment(a: &str, b: &str) -> Ordering {
    if is_numeric(a) && is_numeric(b) {
        compare_numeric(a, b)
    } else {
        a.cmp(b)
    }
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

// Digit strings of any length, without overflowing an integer type
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
