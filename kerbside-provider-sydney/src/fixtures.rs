//! Static seed data for the Sydney region.

use chrono::{NaiveDate, Weekday};
use kerbside_core::model::{BinSchedule, BulkyWasteSchedule, Frequency, Schedule, ScheduleId};

use crate::store::ScheduleStore;

/// Standard kerbside bin set rolled out across the region.
const BIN_SET: [(&str, &str, Frequency); 3] = [
    ("Red", "General Waste", Frequency::Weekly),
    ("Yellow", "Recycling", Frequency::Fortnightly),
    ("Green", "Garden Organics", Frequency::Fortnightly),
];

/// Build the fixture store: the full bin set for a handful of inner-west
/// addresses plus the councils' quarterly bulky-waste rounds.
#[must_use]
pub fn seed() -> ScheduleStore {
    let mut store = ScheduleStore::new();

    let addresses = [
        ("12 Australia St", "Newtown", Weekday::Mon, ymd(2025, 10, 13)),
        (
            "87 Marrickville Rd",
            "Marrickville",
            Weekday::Tue,
            ymd(2025, 10, 14),
        ),
        (
            "101 Glebe Point Rd",
            "Glebe",
            Weekday::Wed,
            ymd(2025, 10, 15),
        ),
        ("5 Darling St", "Balmain", Weekday::Thu, ymd(2025, 10, 16)),
        ("33 Norton St", "Leichhardt", Weekday::Tue, ymd(2025, 10, 14)),
    ];

    for (street_address, suburb, collection_day, anchor) in addresses {
        for (bin_type, description, frequency) in BIN_SET {
            store.insert(Schedule::Bin(BinSchedule {
                id: ScheduleId::UNASSIGNED,
                name: format!("{bin_type} bin - {street_address}"),
                bin_type: bin_type.to_owned(),
                description: description.to_owned(),
                street_address: street_address.to_owned(),
                suburb: suburb.to_owned(),
                collection_day,
                frequency,
                next_collection_date: anchor,
            }));
        }
    }

    let cleanups = [
        ("Inner West Council", true, ymd(2025, 11, 3)),
        ("City of Sydney", false, ymd(2025, 11, 17)),
        ("Canada Bay", true, ymd(2025, 12, 1)),
    ];

    for (council, requires_booking, anchor) in cleanups {
        store.insert(Schedule::BulkyWaste(BulkyWasteSchedule {
            id: ScheduleId::UNASSIGNED,
            name: format!("{council} bulky waste"),
            council: council.to_owned(),
            requires_booking,
            next_collection_date: anchor,
        }));
    }

    store
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid")
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::seed;

    #[test]
    fn every_suburb_carries_the_full_bin_set() {
        let store = seed();

        for suburb in store.suburbs() {
            let bins = store.find_by_suburb(&suburb);
            let mut types: Vec<&str> = bins.iter().map(|bin| bin.bin_type.as_str()).collect();
            types.sort_unstable();
            assert_eq!(types, vec!["Green", "Red", "Yellow"], "suburb {suburb}");
        }
    }

    #[test]
    fn seeded_anchors_match_their_collection_day() {
        let store = seed();

        for suburb in store.suburbs() {
            for bin in store.find_by_suburb(&suburb) {
                assert_eq!(bin.next_collection_date.weekday(), bin.collection_day);
            }
        }
    }

    #[test]
    fn every_entity_has_an_assigned_id() {
        let store = seed();

        assert!(!store.is_empty());
        for suburb in store.suburbs() {
            for bin in store.find_by_suburb(&suburb) {
                assert!(bin.id.is_assigned());
            }
        }
        for bulky in store.bulky_waste() {
            assert!(bulky.id.is_assigned());
        }
    }
}
