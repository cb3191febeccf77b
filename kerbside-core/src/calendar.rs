//! Aggregation of multiple schedules into one merged collection calendar.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{CollectionEvent, Schedule};
use crate::recurrence::{next_occurrence, upcoming_occurrences};

/// Sentinel [`CollectionCalendar::days_until_next`] returns for an empty set.
pub const NO_UPCOMING: i64 = -1;

#[derive(Debug, Clone)]
/// Merged forward view over a set of schedules sharing a lookup key, such as
/// all bins at one address or every schedule in a suburb.
///
/// A calendar is a snapshot: it is built from a schedule set and a reference
/// instant, and consumers rebuild it whenever they need fresh state.
pub struct CollectionCalendar {
    reference: NaiveDateTime,
    /// Next date per category label. When two schedules in the input share a
    /// label, the later one in input order wins.
    pub next_by_category: HashMap<String, NaiveDate>,
    /// Occurrences grouped by calendar date. Entries within a date keep
    /// enumeration order (schedules in input order, dates in sequence order).
    pub by_date: BTreeMap<NaiveDate, Vec<CollectionEvent>>,
    categories: Vec<String>,
}

impl CollectionCalendar {
    /// Build the merged view for `schedules` as seen from `from`, expanding
    /// each schedule over `horizon_weeks` weeks.
    ///
    /// An empty input set produces an empty calendar, never an error.
    #[must_use]
    pub fn build(schedules: &[Schedule], from: NaiveDateTime, horizon_weeks: u32) -> Self {
        let mut next_by_category = HashMap::new();
        let mut categories: Vec<String> = Vec::new();
        let mut by_date: BTreeMap<NaiveDate, Vec<CollectionEvent>> = BTreeMap::new();

        for schedule in schedules {
            let category = schedule.category().to_owned();
            if !categories.contains(&category) {
                categories.push(category.clone());
            }
            next_by_category.insert(category.clone(), next_occurrence(schedule, from));

            for occurrence in upcoming_occurrences(schedule, from, horizon_weeks) {
                by_date.entry(occurrence).or_default().push(CollectionEvent {
                    date: occurrence,
                    schedule: schedule.id(),
                    category: category.clone(),
                    note: schedule.note(),
                });
            }
        }

        Self {
            reference: from,
            next_by_category,
            by_date,
            categories,
        }
    }

    /// Reference instant the calendar was built from.
    #[must_use]
    pub fn reference(&self) -> NaiveDateTime {
        self.reference
    }

    /// True when the input set held no schedules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.next_by_category.is_empty()
    }

    /// Earliest next date across the whole set.
    #[must_use]
    pub fn next_date(&self) -> Option<NaiveDate> {
        self.next_by_category.values().copied().min()
    }

    /// Whole days from the reference date to the earliest next date, or
    /// [`NO_UPCOMING`] when the set is empty.
    #[must_use]
    pub fn days_until_next(&self) -> i64 {
        self.next_date()
            .map_or(NO_UPCOMING, |next| (next - self.reference.date()).num_days())
    }

    /// Every category whose next date ties for the earliest, in first-seen
    /// input order. Same-day ties are all included.
    #[must_use]
    pub fn next_categories(&self) -> Vec<String> {
        let Some(earliest) = self.next_date() else {
            return Vec::new();
        };

        self.categories
            .iter()
            .filter(|category| self.next_by_category.get(*category) == Some(&earliest))
            .cloned()
            .collect()
    }

    /// Next date for one category, matched case-insensitively.
    ///
    /// `None` means the category is simply not scheduled here; callers
    /// typically render it as "Not scheduled".
    #[must_use]
    pub fn next_for_category(&self, label: &str) -> Option<NaiveDate> {
        self.next_by_category
            .iter()
            .find(|(category, _)| category.eq_ignore_ascii_case(label))
            .map(|(_, next)| *next)
    }
}
