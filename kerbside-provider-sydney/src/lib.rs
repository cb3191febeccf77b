//! Directory provider serving the static Sydney-region fixtures.
//!
//! The directory is an immutable snapshot: the store is seeded (and, if
//! needed, edited) before it is wrapped into the plugin, matching the
//! single-threaded resource model of the engine.

/// Static seed data for the region.
pub mod fixtures;
/// In-memory schedule repository.
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;

use kerbside_core::{
    model::{BinSchedule, BulkyWasteSchedule, RegionId, RegionMeta},
    plugin::RegionPlugin,
    ports::{BinDirectoryPort, BulkyWastePort, PortError},
};

use crate::store::ScheduleStore;

/// Bin schedule lookups over the fixture store.
pub struct SydneyBinDirectory {
    store: Arc<ScheduleStore>,
    meta: RegionMeta,
}

impl SydneyBinDirectory {
    /// Create a new directory port over the given store snapshot.
    #[must_use]
    pub fn new(store: Arc<ScheduleStore>) -> Self {
        Self {
            store,
            meta: region_meta(),
        }
    }
}

#[async_trait]
impl BinDirectoryPort for SydneyBinDirectory {
    fn region(&self) -> &RegionMeta {
        &self.meta
    }

    async fn search_by_address(&self, fragment: &str) -> Result<Vec<BinSchedule>, PortError> {
        Ok(self.store.search_by_address(fragment))
    }

    async fn find_by_suburb(&self, suburb: &str) -> Result<Vec<BinSchedule>, PortError> {
        Ok(self.store.find_by_suburb(suburb))
    }
}

/// Bulky-waste listings over the fixture store.
pub struct SydneyBulkyWaste {
    store: Arc<ScheduleStore>,
    meta: RegionMeta,
}

impl SydneyBulkyWaste {
    /// Create a new bulky-waste port over the given store snapshot.
    #[must_use]
    pub fn new(store: Arc<ScheduleStore>) -> Self {
        Self {
            store,
            meta: region_meta(),
        }
    }
}

#[async_trait]
impl BulkyWastePort for SydneyBulkyWaste {
    fn region(&self) -> &RegionMeta {
        &self.meta
    }

    async fn list(&self) -> Result<Vec<BulkyWasteSchedule>, PortError> {
        Ok(self.store.bulky_waste())
    }
}

/// Build the plugin bundle over the seeded fixture store.
#[must_use]
pub fn plugin() -> RegionPlugin {
    plugin_with_store(Arc::new(fixtures::seed()))
}

/// Build the plugin bundle over an explicit store snapshot.
#[must_use]
pub fn plugin_with_store(store: Arc<ScheduleStore>) -> RegionPlugin {
    let bin_port = Arc::new(SydneyBinDirectory::new(Arc::clone(&store)));
    let bulky_port = Arc::new(SydneyBulkyWaste::new(store));

    RegionPlugin {
        meta: region_meta(),
        bin_port,
        bulky_port,
    }
}

fn region_meta() -> RegionMeta {
    RegionMeta {
        id: RegionId(String::from("sydney")),
        name: String::from("Sydney"),
    }
}
