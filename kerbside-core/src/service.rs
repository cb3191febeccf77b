//! High-level service facade combining the directories with the engine.

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::calendar::CollectionCalendar;
use crate::model::{BinSchedule, BulkyWasteSchedule, RegionId, Schedule};
use crate::plugin::RegionRegistry;
use crate::ports::PortError;
use crate::reminder::{self, ValidationReport};

#[derive(Debug, Clone)]
/// Forward-looking summary for one suburb, as produced by
/// [`KerbsideService::outlook_for_suburb`].
pub struct SuburbOutlook {
    /// Suburb the outlook was built for.
    pub suburb: String,
    /// Schedules that fed the calendar: the suburb's bins in directory
    /// order, then the region's bulky-waste collections.
    pub schedules: Vec<Schedule>,
    /// Merged calendar over the requested horizon.
    pub calendar: CollectionCalendar,
    /// Mandatory-category completeness check over the bin schedules.
    pub validation: ValidationReport,
    /// Night-before reminder sentence; empty outside the reminder window.
    pub reminder: String,
}

/// Public entry point for querying directories and building outlooks.
pub struct KerbsideService {
    registry: Arc<RegionRegistry>,
}

impl KerbsideService {
    /// Create a new service bound to the provided registry.
    #[must_use]
    pub fn new(registry: Arc<RegionRegistry>) -> Self {
        Self { registry }
    }

    /// List all available regions and their display names.
    #[must_use]
    pub fn regions(&self) -> Vec<(RegionId, String)> {
        self.registry
            .regions()
            .into_iter()
            .map(|meta| (meta.id, meta.name))
            .collect()
    }

    /// Search the region's bin schedules by street-address fragment.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the region is unsupported or the directory
    /// call fails.
    pub async fn search_bins(
        &self,
        region: RegionId,
        fragment: &str,
    ) -> Result<Vec<BinSchedule>, PortError> {
        let plugin = self.registry.plugin(&region)?;
        plugin.bin_port.search_by_address(fragment).await
    }

    /// Load the bin schedules registered for exactly `suburb`.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the region is unsupported or the directory
    /// call fails.
    pub async fn bins_for_suburb(
        &self,
        region: RegionId,
        suburb: &str,
    ) -> Result<Vec<BinSchedule>, PortError> {
        let plugin = self.registry.plugin(&region)?;
        plugin.bin_port.find_by_suburb(suburb).await
    }

    /// List the bulky-waste collections offered across the region.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the region is unsupported or the directory
    /// call fails.
    pub async fn bulky_waste(
        &self,
        region: RegionId,
    ) -> Result<Vec<BulkyWasteSchedule>, PortError> {
        let plugin = self.registry.plugin(&region)?;
        plugin.bulky_port.list().await
    }

    /// Build the merged outlook for a suburb: its bin schedules plus the
    /// region's bulky-waste collections, aggregated from `now` over
    /// `horizon_weeks` weeks, with validation and the reminder evaluated on
    /// the same snapshot.
    ///
    /// A suburb the directory does not know simply produces an outlook with
    /// no bin schedules in it.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the region is unsupported or a directory
    /// call fails.
    pub async fn outlook_for_suburb(
        &self,
        region: RegionId,
        suburb: &str,
        now: NaiveDateTime,
        horizon_weeks: u32,
    ) -> Result<SuburbOutlook, PortError> {
        let plugin = self.registry.plugin(&region)?;
        let bins = plugin.bin_port.find_by_suburb(suburb).await?;
        let bulky = plugin.bulky_port.list().await?;

        let mut schedules: Vec<Schedule> = bins.into_iter().map(Schedule::Bin).collect();
        schedules.extend(bulky.into_iter().map(Schedule::BulkyWaste));

        let calendar = CollectionCalendar::build(&schedules, now, horizon_weeks);
        let validation = reminder::validate(&schedules);
        let message = reminder::reminder_message(&schedules, now);

        Ok(SuburbOutlook {
            suburb: suburb.to_owned(),
            schedules,
            calendar,
            validation,
            reminder: message,
        })
    }
}
