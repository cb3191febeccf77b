//! Traits describing directory capabilities and the shared error type.

use async_trait::async_trait;

use crate::model::{BinSchedule, BulkyWasteSchedule, RegionMeta, ScheduleId};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to schedule directories.
pub enum PortError {
    /// The region has no registered plugin.
    #[error("Unsupported region")]
    UnsupportedRegion,
    /// No schedule is stored under the given identifier.
    #[error("Unknown schedule id: {0}")]
    UnknownScheduleId(ScheduleId),
    /// Internal directory error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
/// Trait for directory backends serving recurring bin schedules.
///
/// "Nothing matched" is an empty result, never an error; callers distinguish
/// a miss from an empty horizon only by knowing which call they made.
pub trait BinDirectoryPort: Send + Sync {
    /// Metadata describing the region handled by this port.
    fn region(&self) -> &RegionMeta;

    /// Find every bin schedule whose street address contains `fragment`,
    /// compared case-insensitively. An empty fragment matches nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the directory backend fails.
    async fn search_by_address(&self, fragment: &str) -> Result<Vec<BinSchedule>, PortError>;

    /// Find every bin schedule registered for exactly `suburb`.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the directory backend fails.
    async fn find_by_suburb(&self, suburb: &str) -> Result<Vec<BinSchedule>, PortError>;
}

#[async_trait]
/// Trait for directory backends serving council bulky-waste collections.
pub trait BulkyWastePort: Send + Sync {
    /// Metadata describing the region handled by this port.
    fn region(&self) -> &RegionMeta;

    /// List every bulky-waste collection offered across the region.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the directory backend fails.
    async fn list(&self) -> Result<Vec<BulkyWasteSchedule>, PortError>;
}
