//! Domain Value Objects
//!
//! Immutable value types for the data-set domain.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Semantic version of a data set, `major.minor`
///
/// Minor bumps preserve the shape of the data (new periods, corrected
/// figures); major bumps signal a breaking change to filters or
/// indicators that consumers must re-map against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionNumber {
    pub major: u32,
    pub minor: u32,
}

/// Error returned when parsing a version number fails
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid version number: {0}")]
pub struct ParseVersionError(String);

impl VersionNumber {
    /// The initial version of every data set
    pub const FIRST: VersionNumber = VersionNumber { major: 1, minor: 0 };

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Next non-breaking version: `2.1` -> `2.2`
    pub const fn next_minor(&self) -> Self {
        Self {
            major: self.major,
            minor: self.minor + 1,
        }
    }

    /// Next breaking version: `2.1` -> `3.0`
    pub const fn next_major(&self) -> Self {
        Self {
            major: self.major + 1,
            minor: 0,
        }
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for VersionNumber {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| ParseVersionError(s.to_string()))?;
        let major = major
            .parse()
            .map_err(|_| ParseVersionError(s.to_string()))?;
        let minor = minor
            .parse()
            .map_err(|_| ParseVersionError(s.to_string()))?;
        Ok(Self { major, minor })
    }
}

/// Lifecycle state of a data set version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStatus {
    /// Being assembled; imports may still write to it
    Draft,
    /// Live and immutable
    Published,
    /// Removed from public view after publication
    Withdrawn,
}

impl VersionStatus {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            VersionStatus::Draft => "draft",
            VersionStatus::Published => "published",
            VersionStatus::Withdrawn => "withdrawn",
        }
    }
}

impl fmt::Display for VersionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State machine of a background data file import
///
/// Queued -> Processing -> Complete | Failed, with Cancelled reachable
/// from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    Queued,
    Processing,
    Complete,
    Failed,
    Cancelled,
}

impl ImportStatus {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        use ImportStatus::*;
        match self {
            Queued => "queued",
            Processing => "processing",
            Complete => "complete",
            Failed => "failed",
            Cancelled => "cancelled",
        }
    }

    /// Terminal states accept no further transitions
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        use ImportStatus::*;
        matches!(self, Complete | Failed | Cancelled)
    }
}

impl fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
