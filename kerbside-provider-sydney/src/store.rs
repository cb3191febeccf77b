//! In-memory schedule repository backing the Sydney directory.

use std::collections::BTreeMap;

use kerbside_core::{
    model::{BinSchedule, BulkyWasteSchedule, Schedule, ScheduleId},
    ports::PortError,
};

#[derive(Debug, Default)]
/// Mutable in-memory store owning schedule identities.
///
/// The store assigns identifiers: entities arrive unassigned and receive the
/// next positive id exactly once, on insert. Iteration follows id order,
/// which equals insertion order.
pub struct ScheduleStore {
    entries: BTreeMap<ScheduleId, Schedule>,
    last_id: i64,
}

impl ScheduleStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            last_id: 0,
        }
    }

    /// Accept a schedule, assign the next identifier, and store it.
    pub fn insert(&mut self, schedule: Schedule) -> ScheduleId {
        self.last_id += 1;
        let id = ScheduleId(self.last_id);
        self.entries.insert(id, with_id(schedule, id));
        id
    }

    /// Replace the entity stored under `id`. The replacement keeps that id
    /// regardless of what its own id field said.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::UnknownScheduleId`] when nothing is stored there.
    pub fn update(&mut self, id: ScheduleId, schedule: Schedule) -> Result<(), PortError> {
        if !self.entries.contains_key(&id) {
            return Err(PortError::UnknownScheduleId(id));
        }
        self.entries.insert(id, with_id(schedule, id));
        Ok(())
    }

    /// Remove and return the entity stored under `id`.
    pub fn remove(&mut self, id: ScheduleId) -> Option<Schedule> {
        self.entries.remove(&id)
    }

    /// Look up one schedule.
    #[must_use]
    pub fn get(&self, id: ScheduleId) -> Option<&Schedule> {
        self.entries.get(&id)
    }

    /// Number of stored schedules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store holds no schedules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bin schedules whose street address contains `fragment`, compared
    /// case-insensitively. An empty fragment matches nothing.
    #[must_use]
    pub fn search_by_address(&self, fragment: &str) -> Vec<BinSchedule> {
        let needle = fragment.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.bins()
            .filter(|bin| bin.street_address.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Bin schedules registered for exactly `suburb`.
    #[must_use]
    pub fn find_by_suburb(&self, suburb: &str) -> Vec<BinSchedule> {
        self.bins()
            .filter(|bin| bin.suburb == suburb)
            .cloned()
            .collect()
    }

    /// Every bulky-waste collection in the store.
    #[must_use]
    pub fn bulky_waste(&self) -> Vec<BulkyWasteSchedule> {
        self.entries
            .values()
            .filter_map(|schedule| match schedule {
                Schedule::BulkyWaste(bulky) => Some(bulky.clone()),
                Schedule::Bin(_) => None,
            })
            .collect()
    }

    /// Sorted, de-duplicated suburbs with at least one bin schedule.
    #[must_use]
    pub fn suburbs(&self) -> Vec<String> {
        let mut suburbs: Vec<String> = self.bins().map(|bin| bin.suburb.clone()).collect();
        suburbs.sort();
        suburbs.dedup();
        suburbs
    }

    fn bins(&self) -> impl Iterator<Item = &BinSchedule> {
        self.entries.values().filter_map(|schedule| match schedule {
            Schedule::Bin(bin) => Some(bin),
            Schedule::BulkyWaste(_) => None,
        })
    }
}

fn with_id(schedule: Schedule, id: ScheduleId) -> Schedule {
    match schedule {
        Schedule::Bin(mut bin) => {
            bin.id = id;
            Schedule::Bin(bin)
        }
        Schedule::BulkyWaste(mut bulky) => {
            bulky.id = id;
            Schedule::BulkyWaste(bulky)
        }
    }
}
