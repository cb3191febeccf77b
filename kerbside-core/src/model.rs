//! Domain data structures for regions, collection schedules, and occurrences.

use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Category label bulky-waste entries carry in calendars and reminders.
pub const BULKY_WASTE_CATEGORY: &str = "Bulky Waste";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a metropolitan region known to kerbside.
pub struct RegionId(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Metadata describing a region and its human-friendly name.
pub struct RegionMeta {
    /// Unique identifier.
    pub id: RegionId,
    /// Localized display name.
    pub name: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
/// Identifier a repository assigns to a schedule when it accepts the entity.
pub struct ScheduleId(pub i64);

impl ScheduleId {
    /// Placeholder carried by entities no repository has accepted yet.
    pub const UNASSIGNED: Self = Self(0);

    /// Whether a repository has assigned this identifier.
    #[must_use]
    pub fn is_assigned(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// How often a bin goes out for collection.
pub enum Frequency {
    /// Every 7 days.
    Weekly,
    /// Every 14 days.
    Fortnightly,
    /// Once a calendar month.
    Monthly,
    /// Once every three calendar months.
    Quarterly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Weekly => "Weekly",
            Frequency::Fortnightly => "Fortnightly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
        };
        write!(formatter, "{label}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Recurring kerbside bin collection tied to a street address.
pub struct BinSchedule {
    /// Identifier, unique and positive once a repository assigns it.
    pub id: ScheduleId,
    /// Display label for the schedule.
    pub name: String,
    /// Bin category, e.g. "Red", "Yellow", "Green".
    pub bin_type: String,
    /// What the bin takes, e.g. "General Waste".
    pub description: String,
    /// Street address the bin belongs to.
    pub street_address: String,
    /// Suburb the address lies in.
    pub suburb: String,
    /// Weekday the bin is collected on.
    pub collection_day: Weekday,
    /// Collection cadence, fixed for the lifetime of the entity.
    pub frequency: Frequency,
    /// Last known or seeded collection date.
    pub next_collection_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Council bulky-waste collection on a fixed quarterly cadence.
pub struct BulkyWasteSchedule {
    /// Identifier, unique and positive once a repository assigns it.
    pub id: ScheduleId,
    /// Display label for the schedule.
    pub name: String,
    /// Council running the collection.
    pub council: String,
    /// Whether residents must book a pickup.
    pub requires_booking: bool,
    /// Last known or seeded collection date; later rounds step 3 months from here.
    pub next_collection_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A schedule entry held by a directory.
pub enum Schedule {
    /// Recurring kerbside bin.
    Bin(BinSchedule),
    /// Council bulky-waste collection.
    BulkyWaste(BulkyWasteSchedule),
}

impl Schedule {
    /// Identifier of the underlying entity.
    #[must_use]
    pub fn id(&self) -> ScheduleId {
        match self {
            Schedule::Bin(bin) => bin.id,
            Schedule::BulkyWaste(bulky) => bulky.id,
        }
    }

    /// Display label of the underlying entity.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Schedule::Bin(bin) => &bin.name,
            Schedule::BulkyWaste(bulky) => &bulky.name,
        }
    }

    /// Category label used for grouping, validation, and reminders.
    ///
    /// Bins report their bin type; bulky-waste entries all share
    /// [`BULKY_WASTE_CATEGORY`].
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Schedule::Bin(bin) => &bin.bin_type,
            Schedule::BulkyWaste(_) => BULKY_WASTE_CATEGORY,
        }
    }

    /// Stored anchor date interval arithmetic starts from.
    #[must_use]
    pub fn next_collection_date(&self) -> NaiveDate {
        match self {
            Schedule::Bin(bin) => bin.next_collection_date,
            Schedule::BulkyWaste(bulky) => bulky.next_collection_date,
        }
    }

    /// Human-readable cadence description, e.g. "Fortnightly on Tuesday"
    /// or "Quarterly (booking required)".
    #[must_use]
    pub fn frequency_label(&self) -> String {
        match self {
            Schedule::Bin(bin) => {
                format!("{} on {}", bin.frequency, weekday_name(bin.collection_day))
            }
            Schedule::BulkyWaste(bulky) => {
                if bulky.requires_booking {
                    String::from("Quarterly (booking required)")
                } else {
                    String::from("Quarterly")
                }
            }
        }
    }

    /// Free-form detail attached to calendar entries for this schedule.
    #[must_use]
    pub fn note(&self) -> Option<String> {
        match self {
            Schedule::Bin(bin) => {
                if bin.description.is_empty() {
                    None
                } else {
                    Some(bin.description.clone())
                }
            }
            Schedule::BulkyWaste(bulky) => {
                if bulky.requires_booking {
                    Some(format!("{} (booking required)", bulky.council))
                } else {
                    Some(bulky.council.clone())
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One concrete calendar date on which a schedule fires.
pub struct CollectionEvent {
    /// Date of the collection.
    pub date: NaiveDate,
    /// Schedule the occurrence belongs to.
    pub schedule: ScheduleId,
    /// Category label of that schedule.
    pub category: String,
    /// Optional detail shown next to the category.
    pub note: Option<String>,
}

/// Full English name for a weekday.
#[must_use]
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
