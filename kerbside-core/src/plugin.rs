//! Registry for all region plugins and their ports.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{RegionId, RegionMeta};
use crate::ports::{BinDirectoryPort, BulkyWastePort, PortError};

/// Collection of ports implementing a directory for a single region.
pub struct RegionPlugin {
    /// Static metadata describing the region.
    pub meta: RegionMeta,
    /// Implementation for bin schedule lookups.
    pub bin_port: Arc<dyn BinDirectoryPort>,
    /// Implementation for bulky-waste listings.
    pub bulky_port: Arc<dyn BulkyWastePort>,
}

/// Registry that resolves plugins by region identifier.
pub struct RegionRegistry {
    plugins: HashMap<RegionId, RegionPlugin>,
}

impl RegionRegistry {
    /// Build a registry from the provided plugin list.
    #[must_use]
    pub fn new(plugins: Vec<RegionPlugin>) -> Self {
        let plugins_map = plugins
            .into_iter()
            .map(|plugin| (plugin.meta.id.clone(), plugin))
            .collect();
        Self {
            plugins: plugins_map,
        }
    }

    /// Return metadata for all registered regions.
    #[must_use]
    pub fn regions(&self) -> Vec<RegionMeta> {
        self.plugins
            .values()
            .map(|plugin| plugin.meta.clone())
            .collect()
    }

    /// Iterator over region metadata.
    pub fn regions_iter(&self) -> impl Iterator<Item = &RegionMeta> {
        self.plugins.values().map(|plugin| &plugin.meta)
    }

    /// Look up a plugin for the given region.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::UnsupportedRegion`] when no plugin is registered.
    pub fn plugin(&self, region: &RegionId) -> Result<&RegionPlugin, PortError> {
        self.plugins.get(region).ok_or(PortError::UnsupportedRegion)
    }
}
