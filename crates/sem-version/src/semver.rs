//! Semver facade providing high-level version operations

use thiserror::Error;

use crate::constraint::{Constraint, ConstraintError};
use crate::{FormatError, Version, VersionParser};

/// Any error surfaced by the facade
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

/// Main facade for semantic versioning operations on strings
pub struct Semver;

impl Semver {
    /// Check if a string is a complete, strictly valid version
    pub fn valid(version: &str) -> bool {
        VersionParser::new().is_valid(version)
    }

    /// Check if a version satisfies a constraint
    pub fn satisfies(version: &str, constraint: &str) -> Result<bool, SemverError> {
        let version = Version::from_string(version)?;
        Ok(version.satisfies(constraint)?)
    }

    /// Return all versions that satisfy the given constraint, in input order
    ///
    /// Candidates that are not valid versions are skipped.
    pub fn satisfied_by(versions: &[&str], constraint: &str) -> Result<Vec<String>, SemverError> {
        let constraint = Constraint::parse(constraint)?;

        Ok(versions
            .iter()
            .filter(|v| match Version::from_string(v) {
                Ok(version) => constraint.matches(&version),
                Err(e) => {
                    log::debug!("Skipping candidate: {}", e);
                    false
                }
            })
            .map(|v| v.to_string())
            .collect())
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match Version::from_string(v) {
                Ok(version) => Some((version, i)),
                Err(e) => {
                    log::debug!("Dropping unsortable version: {}", e);
                    None
                }
            })
            .collect();

        parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        // Return original versions in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid() {
        assert!(Semver::valid("2.1.9-a.b"));
        assert!(!Semver::valid("2.1"));
        assert!(!Semver::valid("1.2.x"));
    }

    #[test]
    fn test_satisfies_positive() {
        assert!(Semver::satisfies("1.0.1", "> 1").unwrap());
        assert!(Semver::satisfies("1.0.1", ">= 1.0.1").unwrap());
        assert!(Semver::satisfies("1.0.1", "<=   1.0.2").unwrap());
        assert!(Semver::satisfies("1.0.0", "1.0").unwrap());
        assert!(Semver::satisfies("2.9.0", "~> 2.2").unwrap());
        assert!(Semver::satisfies("1.0.0-rc.1+build.1", "< 1.0.0").unwrap());
    }

    #[test]
    fn test_satisfies_negative() {
        assert!(!Semver::satisfies("0.9.9", "> 1.0").unwrap());
        assert!(!Semver::satisfies("3.0.0", "~> 2.2").unwrap());
        assert!(!Semver::satisfies("2.3.0", "~> 2.2.0").unwrap());
    }

    #[test]
    fn test_satisfies_errors() {
        assert!(matches!(
            Semver::satisfies("1.0", ">= 1.0"),
            Err(SemverError::Format(FormatError::InvalidVersion(_)))
        ));
        assert!(matches!(
            Semver::satisfies("1.0.0", "~> 1"),
            Err(SemverError::Constraint(ConstraintError::InvalidPessimistic(_)))
        ));
        assert!(matches!(
            Semver::satisfies("1.0.0", "^ 1.0"),
            Err(SemverError::Constraint(ConstraintError::UnsupportedOperator(_)))
        ));
    }

    #[test]
    fn test_satisfied_by() {
        let versions = vec!["1.0.0", "1.2.0", "1.9999.9999", "2.0.0", "2.1.0", "0.9999.9999"];
        let result = Semver::satisfied_by(&versions, "~> 1.0").unwrap();
        assert_eq!(result, vec!["1.0.0", "1.2.0", "1.9999.9999"]);

        let versions2 = vec!["0.1.1", "garbage", "0.2.0", "0.2", "0.3.0"];
        let result2 = Semver::satisfied_by(&versions2, ">= 0.2").unwrap();
        assert_eq!(result2, vec!["0.2.0", "0.3.0"]);

        assert!(Semver::satisfied_by(&versions, "~> x").is_err());
    }

    #[test]
    fn test_sort() {
        let versions = vec!["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0", "2.4.0+b"];
        let sorted = Semver::sort(&versions);
        assert_eq!(
            sorted,
            vec!["0.1.0", "0.1.0", "1.0.0", "2.4.0-alpha", "2.4.0", "2.4.0+b", "3.2.1"]
        );
    }

    #[test]
    fn test_sort_drops_invalid() {
        let versions = vec!["1.0", "dev-master", "1.0.0"];
        assert_eq!(Semver::sort(&versions), vec!["1.0.0"]);
    }

    #[test]
    fn test_rsort() {
        let versions = vec!["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions);
        assert_eq!(rsorted, vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0.0", "0.1.0", "0.1.0"]);
    }
}
