//! Operator types for version constraints

use std::fmt;
use std::str::FromStr;

use super::ConstraintError;
use crate::{Comparator, Version};

/// Signature shared by the relational helpers on [`Comparator`]
pub type Comparison = fn(&Version, &Version) -> bool;

/// Comparison operators for version constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (= or ==)
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Approximately greater than (~>)
    Pessimistic,
}

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::Pessimistic => "~>",
        }
    }

    /// Whether the operator describes a range rather than a single version
    pub fn is_open(&self) -> bool {
        *self != Operator::Equal
    }

    /// The comparator function behind a relational operator
    ///
    /// `~>` expands to a pair of bounds instead and has no single comparison.
    pub fn comparison(&self) -> Option<Comparison> {
        match self {
            Operator::Equal => Some(Comparator::equal_to as Comparison),
            Operator::LessThan => Some(Comparator::less_than as Comparison),
            Operator::LessThanOrEqual => Some(Comparator::less_than_or_equal_to as Comparison),
            Operator::GreaterThan => Some(Comparator::greater_than as Comparison),
            Operator::GreaterThanOrEqual => Some(Comparator::greater_than_or_equal_to as Comparison),
            Operator::Pessimistic => None,
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", "==", "<", "<=", ">", ">=", "~>"]
    }
}

impl FromStr for Operator {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" | "==" => Ok(Operator::Equal),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "~>" => Ok(Operator::Pessimistic),
            _ => Err(ConstraintError::UnsupportedOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
