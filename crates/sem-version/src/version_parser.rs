//! Version string parsing and validation

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::Version;

/// Raw fields of a version: `(major, minor, patch, pre, build)`
pub type VersionParts = (u64, u64, u64, Option<String>, Option<String>);

/// Error type for malformed version strings and rejected field values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Version component {field} \"{value}\" does not fit in an unsigned 64-bit integer")]
    NumberOutOfRange { field: &'static str, value: String },
    #[error("Invalid {field} \"{value}\": must be a non-negative integer")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Invalid {field} \"{value}\": expected dot-separated identifiers of [0-9A-Za-z-]")]
    InvalidIdentifier { field: &'static str, value: String },
    #[error("Missing required field \"{0}\"")]
    MissingField(&'static str),
}

lazy_static! {
    static ref IDENTIFIERS: &'static str = r"[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*";

    // Minor and patch are optional here; the strict entry points reject their absence
    static ref VERSION_RE: Regex = Regex::new(&format!(
        r"^(\d+)(?:\.(\d+)(?:\.(\d+))?)?(?:-({ids}))?(?:\+({ids}))?$",
        ids = *IDENTIFIERS
    )).unwrap();

    static ref IDENTIFIER_RE: Regex = Regex::new(&format!(r"^{}$", *IDENTIFIERS)).unwrap();
}

/// Parser for Semantic Versioning 2.0.0 strings
///
/// The strict grammar is `MAJOR.MINOR.PATCH[-PRE][+BUILD]`. The loose grammar
/// additionally accepts `MAJOR` and `MAJOR.MINOR`, defaulting the missing
/// components to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    pub fn new() -> Self {
        VersionParser
    }

    /// Parse a strict version string into its raw parts
    pub fn parse(&self, version: &str) -> Result<VersionParts, FormatError> {
        let caps = Self::captures(version)?;
        if caps.get(2).is_none() || caps.get(3).is_none() {
            return Err(FormatError::InvalidVersion(version.to_string()));
        }
        Self::parts_from(&caps)
    }

    /// Parse a possibly partial version string, defaulting minor and patch to 0
    pub fn parse_loose(&self, version: &str) -> Result<Version, FormatError> {
        let caps = Self::captures(version)?;
        Ok(Version::from_validated(Self::parts_from(&caps)?))
    }

    /// Check whether a string is a complete, strictly valid version
    ///
    /// Nothing is allocated: the captures are checked in place.
    pub fn is_valid(&self, version: &str) -> bool {
        let Some(caps) = VERSION_RE.captures(version) else {
            return false;
        };

        [1, 2, 3].iter().all(|&i| {
            caps.get(i)
                .is_some_and(|m| m.as_str().parse::<u64>().is_ok())
        })
    }

    /// Check a pre-release or build metadata value against the identifier grammar
    pub fn is_valid_identifier(value: &str) -> bool {
        IDENTIFIER_RE.is_match(value)
    }

    fn captures(version: &str) -> Result<Captures<'_>, FormatError> {
        VERSION_RE
            .captures(version)
            .ok_or_else(|| FormatError::InvalidVersion(version.to_string()))
    }

    fn parts_from(caps: &Captures<'_>) -> Result<VersionParts, FormatError> {
        let number = |index: usize, field: &'static str| -> Result<u64, FormatError> {
            match caps.get(index) {
                Some(m) => m.as_str().parse().map_err(|_| FormatError::NumberOutOfRange {
                    field,
                    value: m.as_str().to_string(),
                }),
                None => Ok(0),
            }
        };

        Ok((
            number(1, "major")?,
            number(2, "minor")?,
            number(3, "patch")?,
            caps.get(4).map(|m| m.as_str().to_string()),
            caps.get(5).map(|m| m.as_str().to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_components() {
        let parser = VersionParser::new();

        assert_eq!(parser.parse("0.1.2").unwrap(), (0, 1, 2, None, None));
        assert_eq!(
            parser.parse("0.1.2-three.4-5").unwrap(),
            (0, 1, 2, Some("three.4-5".to_string()), None)
        );
        assert_eq!(
            parser.parse("0.1.2+build.4.5").unwrap(),
            (0, 1, 2, None, Some("build.4.5".to_string()))
        );
        assert_eq!(
            parser.parse("0.1.2-pre.four+five.6").unwrap(),
            (0, 1, 2, Some("pre.four".to_string()), Some("five.6".to_string()))
        );
    }

    #[test]
    fn test_parse_digit_only_identifiers() {
        let parser = VersionParser::new();

        assert_eq!(parser.parse("1.0.0-1").unwrap().3.as_deref(), Some("1"));
        assert_eq!(
            parser.parse("1.3.7+2.b8f12d7").unwrap().4.as_deref(),
            Some("2.b8f12d7")
        );
    }

    #[test]
    fn test_parse_accepts_leading_zeros() {
        let parser = VersionParser::new();
        assert_eq!(parser.parse("01.002.3").unwrap(), (1, 2, 3, None, None));
    }

    #[test]
    fn test_parse_rejects_invalid() {
        let parser = VersionParser::new();

        for input in [
            "1.2.x",
            "1.2",
            "1",
            "",
            "v1.2.3",
            " 1.2.3",
            "1.2.3 ",
            "1.2.3-",
            "1.2.3+",
            "1.2.3-a.",
            "1.2.3-.a",
            "1.2.3-a..b",
            "1.2.3-a!",
            "1.2.3+a!",
            "1.2.3.4",
            "-1.2.3",
        ] {
            assert!(
                matches!(parser.parse(input), Err(FormatError::InvalidVersion(_))),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let parser = VersionParser::new();
        let err = parser.parse("1.99999999999999999999.0").unwrap_err();
        assert_eq!(
            err,
            FormatError::NumberOutOfRange {
                field: "minor",
                value: "99999999999999999999".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_loose() {
        let parser = VersionParser::new();

        assert_eq!(parser.parse_loose("1").unwrap().to_string(), "1.0.0");
        assert_eq!(parser.parse_loose("1.2").unwrap().to_string(), "1.2.0");
        assert_eq!(parser.parse_loose("1.2.3").unwrap().to_string(), "1.2.3");
        assert_eq!(parser.parse_loose("1.2-rc.1").unwrap().to_string(), "1.2.0-rc.1");
        assert_eq!(parser.parse_loose("1+build").unwrap().to_string(), "1.0.0+build");

        assert!(parser.parse_loose("1.x").is_err());
        assert!(parser.parse_loose("").is_err());
        assert!(parser.parse_loose(".1").is_err());
        assert!(parser.parse_loose("1.2.").is_err());
    }

    #[test]
    fn test_is_valid() {
        let parser = VersionParser::new();

        assert!(parser.is_valid("2.1.9"));
        assert!(!parser.is_valid("2.1"));
        assert!(!parser.is_valid("1.2.x"));
        assert!(parser.is_valid("2.1.9-a.b"));
        assert!(!parser.is_valid("2.1.9-a!"));
        assert!(parser.is_valid("2.1.9+a.b"));
        assert!(!parser.is_valid("2.1.9+a!"));
        assert!(parser.is_valid("2.1.9-a.b+c.0"));
        assert!(parser.is_valid("2.1.9+a.b-c.0"));
        assert!(!parser.is_valid("18446744073709551616.0.0"));
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(VersionParser::is_valid_identifier("five.6"));
        assert!(VersionParser::is_valid_identifier("x-y.0"));
        assert!(!VersionParser::is_valid_identifier(""));
        assert!(!VersionParser::is_valid_identifier("a."));
        assert!(!VersionParser::is_valid_identifier(".a"));
        assert!(!VersionParser::is_valid_identifier("a.!"));
    }
}
