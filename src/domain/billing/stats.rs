//! Monthly payment statistics.
//!
//! Buckets gateway subscription start times into a twelve-month histogram
//! for the admin sales dashboard.

use chrono::Datelike;
use std::collections::HashMap;

use crate::domain::foundation::Timestamp;

/// English month names in calendar order; the histogram bucket keys.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Twelve-bucket histogram of payment starts by calendar month.
///
/// Buckets are calendar-local, not year-scoped: a January 2023 start and a
/// January 2024 start land in the same bucket. The queried page is a
/// rolling sample for the dashboard, and the conflation is intentional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlyHistogram {
    counts: [u64; 12],
}

impl MonthlyHistogram {
    /// Builds the histogram from payment start times.
    pub fn from_start_times<I>(start_times: I) -> Self
    where
        I: IntoIterator<Item = Timestamp>,
    {
        let mut counts = [0u64; 12];
        for ts in start_times {
            let month_index = ts.as_datetime().month0() as usize;
            counts[month_index] += 1;
        }
        Self { counts }
    }

    /// The twelve counts in `January..December` order.
    pub fn monthly_record(&self) -> [u64; 12] {
        self.counts
    }

    /// The count for one month name; None if the name is not a calendar
    /// month.
    pub fn count_for(&self, month_name: &str) -> Option<u64> {
        MONTH_NAMES
            .iter()
            .position(|name| *name == month_name)
            .map(|index| self.counts[index])
    }

    /// Mapping of month name to count.
    pub fn by_month(&self) -> HashMap<String, u64> {
        MONTH_NAMES
            .iter()
            .zip(self.counts.iter())
            .map(|(name, count)| (name.to_string(), *count))
            .collect()
    }

    /// Total number of bucketed records.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
