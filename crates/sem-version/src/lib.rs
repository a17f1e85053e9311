//! Semantic Versioning 2.0.0 library
//!
//! This crate provides version parsing (strict and loose), precedence
//! comparison, and single-constraint matching including the pessimistic
//! `~>` operator.

pub mod constraint;
mod comparator;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use constraint::{Bound, Constraint, ConstraintError, Operator, PessimisticRange, is_open, split_constraint};
pub use semver::{Semver, SemverError};
pub use version::{ToVersion, Version};
pub use version_parser::{FormatError, VersionParser, VersionParts};
