//! The pessimistic (`~>`) range

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::{Bound, ConstraintError};
use crate::Version;

lazy_static! {
    static ref PESSIMISTIC_RE: Regex = Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?$").unwrap();
}

/// Half-open range `[lower, upper)` described by a `~>` constraint
///
/// `~> 2.2` admits `>= 2.2.0, < 3.0.0`; `~> 2.2.0` admits `>= 2.2.0, < 2.3.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PessimisticRange {
    lower: Bound,
    upper: Bound,
}

impl PessimisticRange {
    /// Expand a `MAJOR.MINOR[.PATCH]` spec into its bounds
    pub fn from_spec(spec: &str) -> Result<Self, ConstraintError> {
        let invalid = || ConstraintError::InvalidPessimistic(spec.to_string());
        let caps = PESSIMISTIC_RE.captures(spec).ok_or_else(invalid)?;

        let number = |index: usize| -> Result<u64, ConstraintError> {
            caps[index].parse().map_err(|_| invalid())
        };
        let major = number(1)?;
        let minor = number(2)?;
        let patch = match caps.get(3) {
            Some(_) => Some(number(3)?),
            None => None,
        };

        let overflow = || ConstraintError::BoundOverflow(spec.to_string());
        let (lower, upper) = match patch {
            None => (
                (major, minor, 0),
                (major.checked_add(1).ok_or_else(overflow)?, 0, 0),
            ),
            Some(patch) => (
                (major, minor, patch),
                (major, minor.checked_add(1).ok_or_else(overflow)?, 0),
            ),
        };

        Ok(PessimisticRange {
            lower: Bound::inclusive(Version::from_validated((lower.0, lower.1, lower.2, None, None))),
            upper: Bound::exclusive(Version::from_validated((upper.0, upper.1, upper.2, None, None))),
        })
    }

    pub fn lower(&self) -> &Bound {
        &self.lower
    }

    pub fn upper(&self) -> &Bound {
        &self.upper
    }

    /// Check whether a version falls inside the range
    pub fn contains(&self, version: &Version) -> bool {
        self.lower.admits_from_above(version) && self.upper.admits_from_below(version)
    }
}

impl fmt::Display for PessimisticRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">= {}, < {}", self.lower.version(), self.upper.version())
    }
}
