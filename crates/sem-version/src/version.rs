//! The `Version` value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::constraint::{Constraint, ConstraintError};
use crate::version_parser::{FormatError, VersionParser, VersionParts};
use crate::Comparator;

/// A semantic version: `major.minor.patch[-pre][+build]`
///
/// Fields are validated on every construction path and cannot be changed in
/// place; the `with_*` builders validate the new value and return a copy.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Option<String>,
    build: Option<String>,
}

impl Version {
    /// Build a version from positional fields
    pub fn new(
        major: u64,
        minor: u64,
        patch: u64,
        pre: Option<&str>,
        build: Option<&str>,
    ) -> Result<Self, FormatError> {
        Ok(Version {
            major,
            minor,
            patch,
            pre: check_identifier("pre", pre)?,
            build: check_identifier("build", build)?,
        })
    }

    /// Parse a strict version string
    pub fn from_string(version: &str) -> Result<Self, FormatError> {
        VersionParser::new().parse(version).map(Self::from_validated)
    }

    /// Parse a partial version string, defaulting missing minor/patch to 0
    pub fn parse_loose(version: &str) -> Result<Self, FormatError> {
        VersionParser::new().parse_loose(version)
    }

    /// Check whether a string is a complete, strictly valid version
    pub fn is_valid(version: &str) -> bool {
        VersionParser::new().is_valid(version)
    }

    /// Build a version from a `(major, minor, patch, pre, build)` tuple
    pub fn from_parts(parts: VersionParts) -> Result<Self, FormatError> {
        let (major, minor, patch, pre, build) = parts;
        Self::new(major, minor, patch, pre.as_deref(), build.as_deref())
    }

    /// Build a version from a key/value map
    ///
    /// `major`, `minor` and `patch` are required non-negative integers. The
    /// pre-release may be given as `pre` or `prerelease` (`pre` takes
    /// precedence); `pre` and `build` may be omitted or `null`.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, FormatError> {
        let number = |field: &'static str| -> Result<u64, FormatError> {
            let value = map.get(field).ok_or(FormatError::MissingField(field))?;
            value.as_u64().ok_or_else(|| FormatError::InvalidNumber {
                field,
                value: value.to_string(),
            })
        };

        let text = |field: &'static str, value: Option<&Value>| -> Result<Option<String>, FormatError> {
            match value {
                None | Some(Value::Null) => Ok(None),
                Some(Value::String(s)) => Ok(Some(s.clone())),
                Some(other) => Err(FormatError::InvalidIdentifier {
                    field,
                    value: other.to_string(),
                }),
            }
        };

        let pre = match map.get("pre") {
            Some(value) => text("pre", Some(value))?,
            None => text("pre", map.get("prerelease"))?,
        };
        let build = text("build", map.get("build"))?;

        Self::from_parts((number("major")?, number("minor")?, number("patch")?, pre, build))
    }

    pub(crate) fn from_validated(parts: VersionParts) -> Self {
        let (major, minor, patch, pre, build) = parts;
        Version {
            major,
            minor,
            patch,
            pre,
            build,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The pre-release identifier, if any
    pub fn pre(&self) -> Option<&str> {
        self.pre.as_deref()
    }

    /// Alias of [`Version::pre`]
    pub fn prerelease(&self) -> Option<&str> {
        self.pre()
    }

    /// The build metadata, if any
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Replace the major component; negative values are rejected
    pub fn with_major<T>(self, major: T) -> Result<Self, FormatError>
    where
        T: TryInto<u64> + fmt::Display + Copy,
    {
        Ok(Version {
            major: check_number("major", major)?,
            ..self
        })
    }

    /// Replace the minor component; negative values are rejected
    pub fn with_minor<T>(self, minor: T) -> Result<Self, FormatError>
    where
        T: TryInto<u64> + fmt::Display + Copy,
    {
        Ok(Version {
            minor: check_number("minor", minor)?,
            ..self
        })
    }

    /// Replace the patch component; negative values are rejected
    pub fn with_patch<T>(self, patch: T) -> Result<Self, FormatError>
    where
        T: TryInto<u64> + fmt::Display + Copy,
    {
        Ok(Version {
            patch: check_number("patch", patch)?,
            ..self
        })
    }

    /// Replace (or clear, with `None`) the pre-release identifier
    pub fn with_pre(self, pre: Option<&str>) -> Result<Self, FormatError> {
        Ok(Version {
            pre: check_identifier("pre", pre)?,
            ..self
        })
    }

    /// Replace (or clear, with `None`) the build metadata
    pub fn with_build(self, build: Option<&str>) -> Result<Self, FormatError> {
        Ok(Version {
            build: check_identifier("build", build)?,
            ..self
        })
    }

    /// Check this version against a constraint such as `">= 1.2"` or `"~> 2.2.0"`
    pub fn satisfies(&self, constraint: &str) -> Result<bool, ConstraintError> {
        Ok(Constraint::parse(constraint)?.matches(self))
    }

    /// Export as a `(major, minor, patch, pre, build)` tuple
    pub fn to_tuple(&self) -> VersionParts {
        (
            self.major,
            self.minor,
            self.patch,
            self.pre.clone(),
            self.build.clone(),
        )
    }

    /// Export as a key/value map; absent `pre`/`build` keys are omitted
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("major".to_string(), Value::from(self.major));
        map.insert("minor".to_string(), Value::from(self.minor));
        map.insert("patch".to_string(), Value::from(self.patch));
        if let Some(pre) = &self.pre {
            map.insert("pre".to_string(), Value::from(pre.as_str()));
        }
        if let Some(build) = &self.build {
            map.insert("build".to_string(), Value::from(build.as_str()));
        }
        map
    }
}

fn check_number<T>(field: &'static str, value: T) -> Result<u64, FormatError>
where
    T: TryInto<u64> + fmt::Display + Copy,
{
    value.try_into().map_err(|_| FormatError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn check_identifier(field: &'static str, value: Option<&str>) -> Result<Option<String>, FormatError> {
    match value {
        None => Ok(None),
        Some(v) if VersionParser::is_valid_identifier(v) => Ok(Some(v.to_string())),
        Some(v) => Err(FormatError::InvalidIdentifier {
            field,
            value: v.to_string(),
        }),
    }
}

/// Conversion of strings into versions
pub trait ToVersion {
    fn to_version(&self) -> Result<Version, FormatError>;
}

impl ToVersion for str {
    fn to_version(&self) -> Result<Version, FormatError> {
        Version::from_string(self)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::from_string(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::from_string(value)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        Comparator::compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare(self, other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        hash_identifiers(self.pre.as_deref(), state);
        hash_identifiers(self.build.as_deref(), state);
    }
}

// Numeric identifiers compare by value, so "01" and "1" must hash alike
fn hash_identifiers<H: Hasher>(value: Option<&str>, state: &mut H) {
    let Some(value) = value else {
        0u8.hash(state);
        return;
    };

    1u8.hash(state);
    for segment in value.split('.') {
        if segment.bytes().all(|b| b.is_ascii_digit()) {
            segment.trim_start_matches('0').hash(state);
        } else {
            segment.hash(state);
        }
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Version::from_string(&s).map_err(de::Error::custom)
    }
}
