//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ReleaseId = Id<markers::Release>;
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: uuid::Uuid,
    _marker: PhantomData<T>,
}

/// Error returned when parsing an ID from a string fails
#[derive(Debug, Error)]
#[error("invalid id: {0}")]
pub struct ParseIdError(#[from] uuid::Error);

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromStr for Id<T> {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_uuid(Uuid::parse_str(s)?))
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Publication IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Publication;

    /// Marker for Release IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Release;

    /// Marker for DataSet IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DataSet;

    /// Marker for DataSetVersion IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DataSetVersion;

    /// Marker for DataFileImport IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Import;

    /// Marker for User IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct User;
}

/// Type aliases for common IDs
pub type PublicationId = Id<markers::Publication>;
pub type ReleaseId = Id<markers::Release>;
pub type DataSetId = Id<markers::DataSet>;
pub type DataSetVersionId = Id<markers::DataSetVersion>;
pub type ImportId = Id<markers::Import>;
pub type UserId = Id<markers::User>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let release_id: ReleaseId = Id::new();
        let data_set_id: DataSetId = Id::new();

        // These are different types, cannot be mixed
        let _r: Uuid = release_id.into_uuid();
        let _d: Uuid = data_set_id.into_uuid();
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: PublicationId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_id_parse_round_trip() {
        let id: ReleaseId = Id::new();
        let parsed: ReleaseId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_parse_rejects_garbage() {
        let parsed: Result<ReleaseId, _> = "not-a-uuid".parse();
        assert!(parsed.is_err());
    }
}
