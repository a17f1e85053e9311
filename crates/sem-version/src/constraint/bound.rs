//! Bound type for constraint boundaries

use std::fmt;

use crate::{Comparator, Version};

/// Represents a bound (lower or upper) of a version range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    version: Version,
    is_inclusive: bool,
}

impl Bound {
    /// Create a new bound
    pub fn new(version: Version, is_inclusive: bool) -> Self {
        Bound {
            version,
            is_inclusive,
        }
    }

    /// Create an inclusive bound
    pub fn inclusive(version: Version) -> Self {
        Self::new(version, true)
    }

    /// Create an exclusive bound
    pub fn exclusive(version: Version) -> Self {
        Self::new(version, false)
    }

    /// Get the bounding version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check if the bound is inclusive
    pub fn is_inclusive(&self) -> bool {
        self.is_inclusive
    }

    /// Check whether `version` lies on the allowed side of this bound used as a minimum
    pub fn admits_from_above(&self, version: &Version) -> bool {
        if self.is_inclusive {
            Comparator::greater_than_or_equal_to(version, &self.version)
        } else {
            Comparator::greater_than(version, &self.version)
        }
    }

    /// Check whether `version` lies on the allowed side of this bound used as a maximum
    pub fn admits_from_below(&self, version: &Version) -> bool {
        if self.is_inclusive {
            Comparator::less_than_or_equal_to(version, &self.version)
        } else {
            Comparator::less_than(version, &self.version)
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]",
            self.version,
            if self.is_inclusive {
                "inclusive"
            } else {
                "exclusive"
            }
        )
    }
}
