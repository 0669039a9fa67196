//! Local calendar arithmetic for the time-window filters.
//!
//! All comparisons happen on calendar dates in the reference instant's time
//! zone, never on elapsed durations: 23:59 and 00:01 the next morning are
//! different days even though they are two minutes apart.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Calendar date of `instant` as seen from `tz`
pub fn local_date<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Whether `instant` falls on the same local calendar day as `reference`
pub fn same_local_day<Tz: TimeZone>(instant: &DateTime<Utc>, reference: &DateTime<Tz>) -> bool {
    local_date(instant, &reference.timezone()) == reference.date_naive()
}

/// The calendar day before `reference`'s local date
pub fn previous_day<Tz: TimeZone>(reference: &DateTime<Tz>) -> NaiveDate {
    let today = reference.date_naive();
    today.pred_opt().unwrap_or(today)
}

/// Sunday-to-Saturday week around a reference instant, in local time.
///
/// Both ends are inclusive: `start` is Sunday 00:00:00.000 and `end` is the
/// following Saturday 23:59:59.999.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WeekWindow {
    /// The week containing `reference`. A Sunday reference starts its own week.
    pub fn containing<Tz: TimeZone>(reference: &DateTime<Tz>) -> Self {
        let today = reference.date_naive();
        let back = u64::from(today.weekday().num_days_from_sunday());
        let sunday = today.checked_sub_days(Days::new(back)).unwrap_or(today);
        let saturday = sunday.checked_add_days(Days::new(6)).unwrap_or(sunday);
        WeekWindow {
            start: sunday.and_time(NaiveTime::MIN),
            end: saturday.and_time(end_of_day()),
        }
    }

    /// Whether `instant`, read in `tz`, lies inside the window
    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Utc>, tz: &Tz) -> bool {
        let local = instant.with_timezone(tz).naive_local();
        self.start <= local && local <= self.end
    }
}

/// 23:59:59.999, the last millisecond of a day
fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike, Weekday};

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn same_day_ignores_time_of_day() {
        let now = at("2024-06-12T15:00:00Z");
        assert!(same_local_day(&utc("2024-06-12T00:00:00Z"), &now));
        assert!(same_local_day(&utc("2024-06-12T23:59:59.999Z"), &now));
        assert!(!same_local_day(&utc("2024-06-11T23:59:59.999Z"), &now));
        assert!(!same_local_day(&utc("2024-06-13T00:00:00Z"), &now));
    }

    #[test]
    fn same_day_uses_reference_time_zone() {
        // 2024-06-12T02:00Z is still June 11th in UTC-05:00
        let now = at("2024-06-11T20:00:00-05:00");
        assert!(same_local_day(&utc("2024-06-12T02:00:00Z"), &now));
        assert!(!same_local_day(&utc("2024-06-12T06:00:00Z"), &now));
    }

    #[test]
    fn previous_day_crosses_month() {
        let now = at("2024-07-01T00:30:00Z");
        assert_eq!(previous_day(&now), NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }

    #[test]
    fn week_window_wednesday() {
        let window = WeekWindow::containing(&at("2024-06-12T15:00:00Z"));
        assert_eq!(
            window.start,
            NaiveDate::from_ymd_opt(2024, 6, 9).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            window.end,
            NaiveDate::from_ymd_opt(2024, 6, 15)
                .unwrap()
                .and_hms_milli_opt(23, 59, 59, 999)
                .unwrap()
        );
    }

    #[test]
    fn week_window_always_starts_sunday_midnight() {
        for day in 1..=30 {
            let now = at(&format!("2024-06-{:02}T11:22:33.444+02:00", day));
            let window = WeekWindow::containing(&now);
            assert_eq!(window.start.weekday(), Weekday::Sun);
            assert_eq!(window.start.time(), NaiveTime::MIN);
            assert_eq!(window.end.weekday(), Weekday::Sat);
            assert_eq!(window.end.nanosecond(), 999_000_000);
            assert!(window.start <= now.naive_local() && now.naive_local() <= window.end);
        }
    }

    #[test]
    fn week_window_on_sunday_starts_same_day() {
        let window = WeekWindow::containing(&at("2024-06-09T00:00:00Z"));
        assert_eq!(window.start.date(), NaiveDate::from_ymd_opt(2024, 6, 9).unwrap());
    }

    #[test]
    fn week_window_bounds_are_inclusive() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let window = WeekWindow::containing(&at("2024-06-12T15:00:00Z"));
        assert!(window.contains(&utc("2024-06-09T00:00:00Z"), &tz));
        assert!(window.contains(&utc("2024-06-15T23:59:59.999Z"), &tz));
        assert!(!window.contains(&utc("2024-06-08T23:59:59.999Z"), &tz));
        assert!(!window.contains(&utc("2024-06-16T00:00:00Z"), &tz));
    }
}
