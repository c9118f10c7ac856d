use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// An EditorConfig format revision tag.
///
/// A `Version` selects the grammar and semantics revision a
/// [`ModelHandler`](crate::parser::ModelHandler) targets, and is stamped on every
/// [`EditorConfig`](crate::model::EditorConfig) it produces. The distinguished
/// [`Version::CURRENT`] constant names the newest revision this crate implements and is the
/// default everywhere a version can be omitted.
///
/// Versions order lexicographically by `(major, minor, patch)`.
///
/// # Examples
///
/// ```rust
/// use edconf::Version;
///
/// let version: Version = "0.12.0".parse()?;
/// assert!(version < Version::CURRENT);
/// assert_eq!(version.to_string(), "0.12.0");
/// # Ok::<(), edconf::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    /// The newest format revision this crate implements.
    pub const CURRENT: Version = Version::new(0, 17, 2);

    /// Create a version from its components
    ///
    /// ## Arguments
    /// * 'major' - Major component
    /// * 'minor' - Minor component
    /// * 'patch' - Patch component
    pub const fn new(major: u32, minor: u32, patch: u32) -> Version {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Major component of this version
    pub fn major(&self) -> u32 {
        self.major
    }

    /// Minor component of this version
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Patch component of this version
    pub fn patch(&self) -> u32 {
        self.patch
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = Error;

    /// Parses `major.minor` or `major.minor.patch`; a missing patch component defaults to 0.
    fn from_str(s: &str) -> Result<Version> {
        let invalid = || Error::InvalidVersion(s.to_string());

        let mut parts = s.split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minor = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let patch = match parts.next() {
            Some(p) => p.parse().map_err(|_| invalid())?,
            None => 0,
        };

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Version::new(major, minor, patch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_parse() {
        assert_eq!("0.17.2".parse::<Version>().unwrap(), Version::new(0, 17, 2));
        assert_eq!("1.0".parse::<Version>().unwrap(), Version::new(1, 0, 0));
    }

    #[test]
    fn test_version_parse_rejects_garbage() {
        for input in ["", "1", "a.b.c", "1.2.3.4", "1..2", "-1.0.0"] {
            let error = input.parse::<Version>().unwrap_err();
            assert!(
                matches!(error, Error::InvalidVersion(ref s) if s == input),
                "expected InvalidVersion for {input:?}"
            );
        }
    }

    #[test]
    fn test_version_ordering() {
        assert!(Version::new(0, 9, 0) < Version::new(0, 17, 2));
        assert!(Version::new(0, 17, 2) < Version::new(1, 0, 0));
        assert!(Version::new(0, 17, 1) < Version::CURRENT);
    }

    #[test]
    fn test_version_display_round_trip() {
        let version = Version::new(0, 17, 2);
        assert_eq!(version.to_string().parse::<Version>().unwrap(), version);
    }
}
