//! Next-occurrence computation and horizon-bounded enumeration for schedules.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::model::{Frequency, Schedule};

/// Bulky-waste enumerations never yield more than a year of quarterly rounds.
pub const BULKY_WASTE_ANNUAL_CAP: usize = 4;

/// Compute the next date the schedule fires on or after `from`.
///
/// For a bin schedule the result is the nearest date matching the configured
/// weekday: `from`'s own date when `from` is exactly midnight on that
/// weekday, otherwise the following match. The stored frequency and the
/// stored next-collection date are not consulted here; they only govern the
/// spacing of later occurrences (see [`upcoming_occurrences`]). A
/// fortnightly bin whose true cycle is offset from the nearest weekday match
/// therefore reports that nearest match as its next date.
///
/// For bulky waste the stored next-collection date steps forward in 3-month
/// increments until it lands strictly after `from`.
#[must_use]
pub fn next_occurrence(schedule: &Schedule, from: NaiveDateTime) -> NaiveDate {
    match schedule {
        Schedule::Bin(bin) => next_weekday_match(bin.collection_day, from),
        Schedule::BulkyWaste(bulky) => next_quarterly(bulky.next_collection_date, from),
    }
}

/// Enumerate every occurrence of the schedule within `horizon_weeks` weeks
/// of `from`, earliest first.
///
/// The first element equals [`next_occurrence`]; each later element is one
/// configured interval after its predecessor. The horizon end is
/// date-inclusive: an occurrence landing on the final day still counts. A
/// zero-week horizon always yields an empty sequence, including the
/// exact-midnight boundary where [`next_occurrence`] equals the reference
/// date itself. Bulky-waste sequences additionally stop after
/// [`BULKY_WASTE_ANNUAL_CAP`] entries no matter how wide the horizon is.
///
/// Every call recomputes from scratch; there is no cursor state to reset.
#[must_use]
pub fn upcoming_occurrences(
    schedule: &Schedule,
    from: NaiveDateTime,
    horizon_weeks: u32,
) -> Vec<NaiveDate> {
    if horizon_weeks == 0 {
        return Vec::new();
    }

    let end = from
        .checked_add_signed(Duration::weeks(i64::from(horizon_weeks)))
        .map_or(NaiveDate::MAX, |instant| instant.date());

    let mut dates = Vec::new();
    let mut current = next_occurrence(schedule, from);

    while current <= end {
        dates.push(current);
        if matches!(schedule, Schedule::BulkyWaste(_)) && dates.len() == BULKY_WASTE_ANNUAL_CAP {
            break;
        }
        let frequency = match schedule {
            Schedule::Bin(bin) => bin.frequency,
            Schedule::BulkyWaste(_) => Frequency::Quarterly,
        };
        current = step(current, frequency);
    }

    dates
}

fn next_weekday_match(target: Weekday, from: NaiveDateTime) -> NaiveDate {
    let wanted = i64::from(target.num_days_from_monday());
    let current = i64::from(from.weekday().num_days_from_monday());
    let mut delta = (wanted - current).rem_euclid(7);

    // A collection day already underway counts as passed; only an instant of
    // exactly midnight still belongs to the day itself.
    if delta == 0 && from.time() != NaiveTime::MIN {
        delta = 7;
    }

    from.date()
        .checked_add_signed(Duration::days(delta))
        .unwrap_or(NaiveDate::MAX)
}

fn next_quarterly(anchor: NaiveDate, from: NaiveDateTime) -> NaiveDate {
    let mut candidate = anchor;
    while candidate.and_time(NaiveTime::MIN) <= from {
        candidate = step(candidate, Frequency::Quarterly);
    }
    candidate
}

/// One interval forward from `date`, saturating at the calendar's end.
fn step(date: NaiveDate, frequency: Frequency) -> NaiveDate {
    let stepped = match frequency {
        Frequency::Weekly => date.checked_add_signed(Duration::days(7)),
        Frequency::Fortnightly => date.checked_add_signed(Duration::days(14)),
        Frequency::Monthly => date.checked_add_months(Months::new(1)),
        Frequency::Quarterly => date.checked_add_months(Months::new(3)),
    };
    stepped.unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

    use super::{BULKY_WASTE_ANNUAL_CAP, next_occurrence, upcoming_occurrences};
    use crate::model::{BinSchedule, BulkyWasteSchedule, Frequency, Schedule, ScheduleId};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
    }

    fn at(day: NaiveDate, hour: u32) -> NaiveDateTime {
        day.and_hms_opt(hour, 0, 0).expect("valid fixture time")
    }

    fn bin(collection_day: Weekday, frequency: Frequency, anchor: NaiveDate) -> Schedule {
        Schedule::Bin(BinSchedule {
            id: ScheduleId(1),
            name: String::from("Red bin"),
            bin_type: String::from("Red"),
            description: String::from("General Waste"),
            street_address: String::from("12 Australia St"),
            suburb: String::from("Newtown"),
            collection_day,
            frequency,
            next_collection_date: anchor,
        })
    }

    fn bulky(anchor: NaiveDate) -> Schedule {
        Schedule::BulkyWaste(BulkyWasteSchedule {
            id: ScheduleId(2),
            name: String::from("Council cleanup"),
            council: String::from("Inner West Council"),
            requires_booking: true,
            next_collection_date: anchor,
        })
    }

    #[test]
    fn weekly_next_from_midweek_is_following_monday() {
        let schedule = bin(Weekday::Mon, Frequency::Weekly, date(2025, 10, 13));
        let wednesday = at(date(2025, 10, 15), 12);

        assert_eq!(next_occurrence(&schedule, wednesday), date(2025, 10, 20));
    }

    #[test]
    fn collection_day_at_exact_midnight_is_kept() {
        let schedule = bin(Weekday::Mon, Frequency::Weekly, date(2025, 10, 13));
        let monday_midnight = at(date(2025, 10, 20), 0);

        assert_eq!(
            next_occurrence(&schedule, monday_midnight),
            date(2025, 10, 20)
        );
    }

    #[test]
    fn collection_day_already_underway_rolls_a_week() {
        let schedule = bin(Weekday::Mon, Frequency::Weekly, date(2025, 10, 13));
        let monday_morning = at(date(2025, 10, 20), 8);

        assert_eq!(
            next_occurrence(&schedule, monday_morning),
            date(2025, 10, 27)
        );
    }

    #[test]
    fn next_always_lands_on_the_configured_weekday() {
        let weekdays = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];

        for target in weekdays {
            for offset in 0..14 {
                let reference = at(date(2025, 10, 1) + chrono::Duration::days(offset), 9);
                let schedule = bin(target, Frequency::Fortnightly, date(2025, 10, 1));

                assert_eq!(next_occurrence(&schedule, reference).weekday(), target);
            }
        }
    }

    #[test]
    fn fortnightly_next_is_the_literal_nearest_weekday() {
        // One day after a fortnightly Tuesday collection: the reported next
        // date is the very next Tuesday, not the anchor-aligned one.
        let schedule = bin(Weekday::Tue, Frequency::Fortnightly, date(2025, 10, 14));
        let wednesday = at(date(2025, 10, 15), 12);

        assert_eq!(next_occurrence(&schedule, wednesday), date(2025, 10, 21));

        let upcoming = upcoming_occurrences(&schedule, wednesday, 6);
        assert_eq!(
            upcoming,
            vec![date(2025, 10, 21), date(2025, 11, 4), date(2025, 11, 18)]
        );
    }

    #[test]
    fn weekly_occurrences_are_seven_days_apart() {
        let schedule = bin(Weekday::Mon, Frequency::Weekly, date(2025, 10, 13));
        let upcoming = upcoming_occurrences(&schedule, at(date(2025, 10, 15), 12), 5);

        assert_eq!(upcoming.first(), Some(&date(2025, 10, 20)));
        for pair in upcoming.windows(2) {
            let [earlier, later] = pair else {
                continue;
            };
            assert_eq!((*later - *earlier).num_days(), 7);
        }
    }

    #[test]
    fn monthly_occurrences_step_a_calendar_month() {
        let schedule = bin(Weekday::Fri, Frequency::Monthly, date(2025, 10, 17));
        let upcoming = upcoming_occurrences(&schedule, at(date(2025, 10, 15), 12), 10);

        assert_eq!(upcoming.first(), Some(&date(2025, 10, 17)));
        assert_eq!(upcoming.get(1), Some(&date(2025, 11, 17)));
    }

    #[test]
    fn zero_horizon_is_always_empty() {
        let schedule = bin(Weekday::Mon, Frequency::Weekly, date(2025, 10, 13));

        assert!(upcoming_occurrences(&schedule, at(date(2025, 10, 15), 12), 0).is_empty());
        // Even at exact midnight on the collection day, where next_occurrence
        // equals the reference date itself.
        assert!(upcoming_occurrences(&schedule, at(date(2025, 10, 20), 0), 0).is_empty());
    }

    #[test]
    fn horizon_end_is_date_inclusive() {
        let schedule = bin(Weekday::Wed, Frequency::Weekly, date(2025, 10, 15));
        // One week after a Wednesday noon: the Wednesday landing exactly on
        // the horizon's final date still counts.
        let upcoming = upcoming_occurrences(&schedule, at(date(2025, 10, 15), 12), 1);

        assert_eq!(upcoming, vec![date(2025, 10, 22)]);
    }

    #[test]
    fn enumeration_is_idempotent() {
        let schedule = bin(Weekday::Tue, Frequency::Fortnightly, date(2025, 10, 14));
        let reference = at(date(2025, 10, 15), 12);

        assert_eq!(
            upcoming_occurrences(&schedule, reference, 8),
            upcoming_occurrences(&schedule, reference, 8)
        );
        assert_eq!(
            next_occurrence(&schedule, reference),
            next_occurrence(&schedule, reference)
        );
    }

    #[test]
    fn bulky_waste_steps_quarterly_past_the_reference() {
        let schedule = bulky(date(2025, 1, 6));
        let reference = at(date(2025, 10, 15), 12);

        // 2025-01-06 -> 04-06 -> 07-06 -> 10-06 are all passed; next is January.
        assert_eq!(next_occurrence(&schedule, reference), date(2026, 1, 6));
    }

    #[test]
    fn bulky_waste_anchor_in_the_future_is_returned_as_is() {
        let schedule = bulky(date(2025, 11, 3));
        let reference = at(date(2025, 10, 15), 12);

        assert_eq!(next_occurrence(&schedule, reference), date(2025, 11, 3));
    }

    #[test]
    fn bulky_waste_caps_at_four_occurrences() {
        let schedule = bulky(date(2025, 11, 3));
        let upcoming = upcoming_occurrences(&schedule, at(date(2025, 10, 15), 12), 104);

        assert_eq!(upcoming.len(), BULKY_WASTE_ANNUAL_CAP);
        assert_eq!(
            upcoming,
            vec![
                date(2025, 11, 3),
                date(2026, 2, 3),
                date(2026, 5, 3),
                date(2026, 8, 3)
            ]
        );
    }
}
