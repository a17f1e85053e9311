//! Constraint types for version matching

mod bound;
pub mod constraint;
mod operator;
mod pessimistic;

pub use bound::Bound;
pub use constraint::{Constraint, ConstraintError, is_open, split_constraint};
pub use operator::Operator;
pub use pessimistic::PessimisticRange;
