//! Single-version constraints such as `">= 1.2"` or `"~> 2.2.0"`

use std::fmt;

use thiserror::Error;

use super::{Operator, PessimisticRange};
use crate::version_parser::FormatError;
use crate::Version;

/// Error raised when a constraint cannot be evaluated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Unsupported constraint operator \"{0}\"")]
    UnsupportedOperator(String),
    #[error("Invalid version \"{0}\" for ~>: expected MAJOR.MINOR or MAJOR.MINOR.PATCH")]
    InvalidPessimistic(String),
    #[error("Version \"{0}\" cannot be incremented for ~>")]
    BoundOverflow(String),
    #[error("Invalid constraint version: {0}")]
    InvalidVersion(#[from] FormatError),
}

/// Split a constraint into its operator and version spec
///
/// A bare version gets the `=` operator and `==` is normalised to `=`. Any
/// other operator token is passed through untouched.
pub fn split_constraint(constraint: &str) -> (String, String) {
    let constraint = constraint.trim();
    match constraint.split_once(char::is_whitespace) {
        Some((operator, version)) => {
            let operator = if operator == "==" { "=" } else { operator };
            (operator.to_string(), version.trim_start().to_string())
        }
        None => ("=".to_string(), constraint.to_string()),
    }
}

/// Check whether a constraint describes a range rather than an exact version
pub fn is_open(constraint: &str) -> bool {
    split_constraint(constraint).0 != "="
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Exact(Version),
    Range(PessimisticRange),
}

/// A parsed constraint, reusable against any number of versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    operator: Operator,
    spec: String,
    target: Target,
}

impl Constraint {
    /// Parse and validate a constraint string
    pub fn parse(constraint: &str) -> Result<Self, ConstraintError> {
        let (operator, spec) = split_constraint(constraint);
        let operator: Operator = operator.parse()?;

        let target = match operator {
            Operator::Pessimistic => Target::Range(PessimisticRange::from_spec(&spec)?),
            _ => Target::Exact(Version::parse_loose(&spec)?),
        };

        Ok(Constraint {
            operator,
            spec,
            target,
        })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The version spec as written
    pub fn spec(&self) -> &str {
        &self.spec
    }

    pub fn is_open(&self) -> bool {
        self.operator.is_open()
    }

    /// Check whether a version satisfies this constraint
    pub fn matches(&self, version: &Version) -> bool {
        let result = match &self.target {
            Target::Range(range) => range.contains(version),
            Target::Exact(target) => match self.operator.comparison() {
                Some(compare) => compare(version, target),
                None => false,
            },
        };
        log::trace!("{} {} {}: {}", version, self.operator, self.spec, result);
        result
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.spec)
    }
}
