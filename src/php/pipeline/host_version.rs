//! Host version
//!
//! The version of the PHP runtime the fixed code targets. It is threaded through the run
//! configuration to every fixer; rules compare against it instead of looking at the
//! environment.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+)(?:\.(\d+))?(?:\.(\d+))?\s*$").expect("version pattern is valid")
});

/// A `major.minor.patch` runtime version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

impl HostVersion {
    pub const PHP_7_4: HostVersion = HostVersion::new(7, 4, 0);
    pub const PHP_8_0: HostVersion = HostVersion::new(8, 0, 0);
    pub const PHP_8_3: HostVersion = HostVersion::new(8, 3, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Decode a `PHP_VERSION_ID` style integer, e.g. `70400` for 7.4.0.
    pub const fn from_id(id: u32) -> Self {
        Self::new(id / 10_000, (id / 100) % 100, id % 100)
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }
}

impl Default for HostVersion {
    fn default() -> Self {
        HostVersion::PHP_8_3
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for HostVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Text that is neither a dotted version nor a version id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHostVersionError(pub String);

impl fmt::Display for ParseHostVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid host version '{}'", self.0)
    }
}

impl std::error::Error for ParseHostVersionError {}

impl FromStr for HostVersion {
    type Err = ParseHostVersionError;

    /// Accepts `8`, `8.1`, `8.1.2` and version ids such as `80102`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseHostVersionError(text.to_string());
        let captures = VERSION_PATTERN.captures(text).ok_or_else(invalid)?;

        let part = |index: usize| -> Result<u32, ParseHostVersionError> {
            match captures.get(index) {
                Some(m) => m.as_str().parse().map_err(|_| invalid()),
                None => Ok(0),
            }
        };
        let major = part(1)?;

        if captures.get(2).is_none() && major >= 10_000 {
            return Ok(HostVersion::from_id(major));
        }
        Ok(HostVersion::new(major, part(2)?, part(3)?))
    }
}
