//! Completeness validation and the night-before collection reminder.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::model::Schedule;
use crate::recurrence::next_occurrence;

/// Hour of day (24h, local) from which the night-before reminder may fire.
pub const REMINDER_HOUR: u32 = 17;

/// Bin categories every complete schedule set must carry, with the display
/// labels used when reporting one missing.
const MANDATORY_BINS: [(&str, &str); 3] = [
    ("Red", "Red (General Waste)"),
    ("Yellow", "Yellow (Recycling)"),
    ("Green", "Green (Garden Organics)"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of checking a schedule set for the mandatory bin categories.
pub struct ValidationReport {
    /// True when every mandatory category is present.
    pub is_valid: bool,
    /// Display labels of the mandatory categories that are absent.
    pub missing: Vec<String>,
}

/// Check that the set carries all mandatory bin categories, matched
/// case-insensitively against each bin's category label.
///
/// Bulky-waste entries never satisfy a bin category.
#[must_use]
pub fn validate(schedules: &[Schedule]) -> ValidationReport {
    let missing: Vec<String> = MANDATORY_BINS
        .iter()
        .filter(|(category, _)| {
            !schedules.iter().any(|schedule| match schedule {
                Schedule::Bin(bin) => bin.bin_type.eq_ignore_ascii_case(category),
                Schedule::BulkyWaste(_) => false,
            })
        })
        .map(|(_, label)| (*label).to_owned())
        .collect();

    ValidationReport {
        is_valid: missing.is_empty(),
        missing,
    }
}

/// True when the earliest collection across the set is due tomorrow and the
/// clock has reached [`REMINDER_HOUR`]. Any other distance or hour, the
/// reminder stays silent.
#[must_use]
pub fn should_remind(schedules: &[Schedule], now: NaiveDateTime) -> bool {
    let Some(next) = earliest(schedules, now) else {
        return false;
    };

    next == tomorrow(now) && now.hour() >= REMINDER_HOUR
}

/// Reminder sentence naming the categories due tomorrow, or an empty string
/// outside the reminder window.
#[must_use]
pub fn reminder_message(schedules: &[Schedule], now: NaiveDateTime) -> String {
    if !should_remind(schedules, now) {
        return String::new();
    }

    let due_date = tomorrow(now);
    let mut due: Vec<String> = Vec::new();
    for schedule in schedules {
        if next_occurrence(schedule, now) == due_date {
            let category = schedule.category();
            if !due.iter().any(|seen| seen == category) {
                due.push(category.to_owned());
            }
        }
    }

    format!(
        "Reminder: {} due for collection tomorrow ({}).",
        due.join(", "),
        due_date.format("%A, %-d %B %Y"),
    )
}

fn earliest(schedules: &[Schedule], now: NaiveDateTime) -> Option<NaiveDate> {
    schedules
        .iter()
        .map(|schedule| next_occurrence(schedule, now))
        .min()
}

fn tomorrow(now: NaiveDateTime) -> NaiveDate {
    now.date()
        .checked_add_signed(Duration::days(1))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, Weekday};

    use super::{reminder_message, should_remind, validate};
    use crate::model::{BinSchedule, BulkyWasteSchedule, Frequency, Schedule, ScheduleId};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
    }

    fn at(day: NaiveDate, hour: u32) -> NaiveDateTime {
        day.and_hms_opt(hour, 0, 0).expect("valid fixture time")
    }

    fn bin(bin_type: &str, collection_day: Weekday) -> Schedule {
        Schedule::Bin(BinSchedule {
            id: ScheduleId(1),
            name: format!("{bin_type} bin"),
            bin_type: bin_type.to_owned(),
            description: String::from("Kerbside"),
            street_address: String::from("12 Australia St"),
            suburb: String::from("Newtown"),
            collection_day,
            frequency: Frequency::Weekly,
            next_collection_date: date(2025, 10, 13),
        })
    }

    fn monday_set() -> Vec<Schedule> {
        vec![
            bin("Red", Weekday::Mon),
            bin("Yellow", Weekday::Mon),
            bin("Green", Weekday::Mon),
        ]
    }

    #[test]
    fn missing_green_is_reported_with_its_display_label() {
        let schedules = vec![bin("Red", Weekday::Mon), bin("Yellow", Weekday::Mon)];
        let report = validate(&schedules);

        assert!(!report.is_valid);
        assert_eq!(report.missing, vec![String::from("Green (Garden Organics)")]);
    }

    #[test]
    fn complete_set_is_valid() {
        let report = validate(&monday_set());

        assert!(report.is_valid);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn category_matching_ignores_case() {
        let schedules = vec![
            bin("red", Weekday::Mon),
            bin("YELLOW", Weekday::Mon),
            bin("green", Weekday::Mon),
        ];

        assert!(validate(&schedules).is_valid);
    }

    #[test]
    fn bulky_waste_satisfies_no_bin_category() {
        let schedules = vec![Schedule::BulkyWaste(BulkyWasteSchedule {
            id: ScheduleId(9),
            name: String::from("Council cleanup"),
            council: String::from("Inner West Council"),
            requires_booking: false,
            next_collection_date: date(2025, 11, 3),
        })];
        let report = validate(&schedules);

        assert!(!report.is_valid);
        assert_eq!(report.missing.len(), 3);
    }

    #[test]
    fn reminder_fires_the_evening_before() {
        // Collection is Monday 2025-10-20; Sunday evening is inside the window.
        let sunday_evening = at(date(2025, 10, 19), 18);

        assert!(should_remind(&monday_set(), sunday_evening));
    }

    #[test]
    fn reminder_stays_silent_before_five_pm() {
        let sunday_morning = at(date(2025, 10, 19), 10);

        assert!(!should_remind(&monday_set(), sunday_morning));
    }

    #[test]
    fn reminder_stays_silent_when_collection_is_further_out() {
        // Saturday evening: collection is two days away.
        let saturday_evening = at(date(2025, 10, 18), 18);

        assert!(!should_remind(&monday_set(), saturday_evening));
    }

    #[test]
    fn reminder_stays_silent_on_collection_day_itself() {
        // Monday evening: the next occurrence is a week out by then.
        let monday_evening = at(date(2025, 10, 20), 18);

        assert!(!should_remind(&monday_set(), monday_evening));
    }

    #[test]
    fn no_schedules_means_no_reminder() {
        assert!(!should_remind(&[], at(date(2025, 10, 19), 18)));
        assert_eq!(reminder_message(&[], at(date(2025, 10, 19), 18)), "");
    }

    #[test]
    fn message_names_the_categories_due_and_the_date() {
        let message = reminder_message(&monday_set(), at(date(2025, 10, 19), 18));

        assert_eq!(
            message,
            "Reminder: Red, Yellow, Green due for collection tomorrow (Monday, 20 October 2025)."
        );
    }

    #[test]
    fn message_is_empty_outside_the_window() {
        assert_eq!(reminder_message(&monday_set(), at(date(2025, 10, 19), 10)), "");
    }
}
