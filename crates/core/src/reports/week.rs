//! Monday-to-Sunday week boundaries.

use chrono::{DateTime, Datelike, Days, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// An inclusive range of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    /// Monday at 00:00:00.000.
    pub start: DateTime<Utc>,
    /// Sunday at 23:59:59.999.
    pub end: DateTime<Utc>,
}

impl WeekRange {
    /// Returns true if `instant` falls inside the range, both ends included.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// The week containing a reference instant and the week before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBounds {
    /// Week containing the reference instant.
    pub current: WeekRange,
    /// Seven days earlier.
    pub previous: WeekRange,
}

impl WeekBounds {
    /// Computes the bounds on the wall clock of `reference_now`'s zone.
    ///
    /// A Monday reference starts its own week. Local midnights that occur
    /// twice resolve to the earlier instant; ones skipped by a clock change
    /// fall back to the UTC wall clock.
    #[must_use]
    pub fn at<Tz: TimeZone>(reference_now: &DateTime<Tz>) -> Self {
        let tz = reference_now.timezone();
        let today = reference_now.date_naive();
        let monday = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
        let current_start = monday.and_time(NaiveTime::MIN);
        let previous_start = current_start - TimeDelta::days(7);

        Self {
            current: local_week(&tz, current_start),
            previous: local_week(&tz, previous_start),
        }
    }
}

fn local_week<Tz: TimeZone>(tz: &Tz, start: NaiveDateTime) -> WeekRange {
    let end = start + TimeDelta::days(7) - TimeDelta::milliseconds(1);
    WeekRange {
        start: resolve(tz, start),
        end: resolve(tz, end),
    }
}

fn resolve<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Utc> {
    tz.from_local_datetime(&local)
        .earliest()
        .map_or_else(|| local.and_utc(), |instant| instant.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use chrono::{Timelike, Weekday};
    use chrono_tz::Europe::Paris;
    use proptest::prelude::*;

    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_midweek_reference() {
        // Thursday
        let bounds = WeekBounds::at(&utc(2025, 1, 16, 14, 30, 0));

        assert_eq!(bounds.current.start, utc(2025, 1, 13, 0, 0, 0));
        assert_eq!(
            bounds.current.end,
            utc(2025, 1, 19, 23, 59, 59) + TimeDelta::milliseconds(999)
        );
        assert_eq!(bounds.previous.start, utc(2025, 1, 6, 0, 0, 0));
        assert_eq!(
            bounds.previous.end,
            utc(2025, 1, 12, 23, 59, 59) + TimeDelta::milliseconds(999)
        );
    }

    #[test]
    fn test_monday_starts_its_own_week() {
        let bounds = WeekBounds::at(&utc(2025, 1, 13, 0, 0, 0));
        assert_eq!(bounds.current.start, utc(2025, 1, 13, 0, 0, 0));

        let bounds = WeekBounds::at(&utc(2025, 1, 13, 23, 59, 59));
        assert_eq!(bounds.current.start, utc(2025, 1, 13, 0, 0, 0));
    }

    #[test]
    fn test_sunday_belongs_to_preceding_monday() {
        let bounds = WeekBounds::at(&utc(2025, 1, 19, 23, 59, 59));
        assert_eq!(bounds.current.start, utc(2025, 1, 13, 0, 0, 0));
    }

    #[test]
    fn test_week_across_year_boundary() {
        // Wednesday 1 January 2025
        let bounds = WeekBounds::at(&utc(2025, 1, 1, 8, 0, 0));
        assert_eq!(bounds.current.start, utc(2024, 12, 30, 0, 0, 0));
        assert_eq!(bounds.previous.start, utc(2024, 12, 23, 0, 0, 0));
    }

    #[test]
    fn test_zoned_reference_uses_local_midnight() {
        // Monday 00:30 in Paris is still Sunday in UTC.
        let reference = Paris.with_ymd_and_hms(2025, 1, 13, 0, 30, 0).unwrap();
        let bounds = WeekBounds::at(&reference);

        assert_eq!(bounds.current.start, utc(2025, 1, 12, 23, 0, 0));
        assert_eq!(
            bounds.current.end,
            utc(2025, 1, 19, 22, 59, 59) + TimeDelta::milliseconds(999)
        );
    }

    #[test]
    fn test_zoned_previous_week_keeps_wall_clock_across_dst() {
        // Paris moves to summer time on Sunday 30 March 2025.
        let reference = Paris.with_ymd_and_hms(2025, 4, 2, 12, 0, 0).unwrap();
        let bounds = WeekBounds::at(&reference);

        assert_eq!(bounds.current.start, utc(2025, 3, 30, 22, 0, 0));
        assert_eq!(bounds.previous.start, utc(2025, 3, 23, 23, 0, 0));
        assert_eq!(
            bounds.previous.end,
            utc(2025, 3, 30, 21, 59, 59) + TimeDelta::milliseconds(999)
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = WeekBounds::at(&utc(2025, 1, 16, 14, 30, 0));
        assert!(bounds.current.contains(bounds.current.start));
        assert!(bounds.current.contains(bounds.current.end));
        assert!(!bounds.current.contains(bounds.previous.end));
        assert!(bounds.previous.contains(bounds.previous.end));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// For any UTC reference, the current week starts on a Monday at
        /// midnight, spans seven days less one millisecond, and contains the
        /// reference. The previous week is the same span seven days earlier.
        #[test]
        fn prop_utc_week_bounds(millis in 0i64..4_102_444_800_000i64) {
            let now = DateTime::from_timestamp_millis(millis).unwrap();
            let bounds = WeekBounds::at(&now);

            prop_assert_eq!(bounds.current.start.weekday(), Weekday::Mon);
            prop_assert_eq!(bounds.current.start.time(), NaiveTime::MIN);
            prop_assert_eq!(bounds.current.end.weekday(), Weekday::Sun);
            prop_assert_eq!(bounds.current.end.nanosecond(), 999_000_000);
            prop_assert_eq!(
                bounds.current.end - bounds.current.start,
                TimeDelta::days(7) - TimeDelta::milliseconds(1)
            );
            prop_assert!(bounds.current.contains(now));
            prop_assert_eq!(bounds.previous.start, bounds.current.start - TimeDelta::days(7));
            prop_assert_eq!(bounds.previous.end, bounds.current.end - TimeDelta::days(7));
        }
    }
}
