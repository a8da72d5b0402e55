use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::ScheduleError;
use crate::model::WorkLocation;

/// Friday known to be an office day; anchors the biweekly Friday rotation.
pub const REFERENCE_OFFICE_FRIDAY: NaiveDate = date(2026, 1, 23);

/// Builds a literal date at compile time.
pub(crate) const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid calendar date literal"),
    }
}

/// Proleptic Gregorian date from a `(year, month, day)` triple, month 1-based.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ScheduleError::InvalidDate {
        year,
        month,
        day,
    })
}

/// Maps a calendar date to the expected work location.
///
/// Mondays and Tuesdays are office days, Wednesdays and Thursdays are home
/// days, and Fridays alternate every week starting from the reference Friday.
/// Weekends resolve to `None`. `Holiday` and `Leave` are never produced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationResolver {
    reference_friday: NaiveDate,
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self {
            reference_friday: REFERENCE_OFFICE_FRIDAY,
        }
    }
}

impl LocationResolver {
    pub fn new(reference_friday: NaiveDate) -> Result<Self, ScheduleError> {
        if reference_friday.weekday() != Weekday::Fri {
            return Err(ScheduleError::NotFriday(reference_friday));
        }
        Ok(Self { reference_friday })
    }

    pub fn reference_friday(&self) -> NaiveDate {
        self.reference_friday
    }

    pub fn resolve(&self, date: NaiveDate) -> Option<WorkLocation> {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => None,
            Weekday::Mon | Weekday::Tue => Some(WorkLocation::Office),
            Weekday::Wed | Weekday::Thu => Some(WorkLocation::Home),
            Weekday::Fri => {
                if self.weeks_from_reference(date).rem_euclid(2) == 0 {
                    Some(WorkLocation::Office)
                } else {
                    Some(WorkLocation::Home)
                }
            }
        }
    }

    /// Whole weeks between `date` and the reference Friday, rounded to nearest.
    fn weeks_from_reference(&self, date: NaiveDate) -> i64 {
        let days = date.signed_duration_since(self.reference_friday).num_days();
        // 7 is odd so there is never a tie to break
        (days + 3).div_euclid(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn resolver() -> LocationResolver {
        LocationResolver::default()
    }

    #[test]
    fn weekends_have_no_location() {
        // 2026-01-24 is a Saturday
        let sat = date(2026, 1, 24);
        for offset in (0..52).map(|w| w * 7) {
            let sat = sat + Duration::days(offset);
            let sun = sat + Duration::days(1);
            assert_eq!(resolver().resolve(sat), None);
            assert_eq!(resolver().resolve(sun), None);
        }
    }

    #[test]
    fn fixed_weekdays() {
        // 2026-01-19 is a Monday
        let monday = date(2026, 1, 19);
        for week in -30..30 {
            let mon = monday + Duration::weeks(week);
            assert_eq!(resolver().resolve(mon), Some(WorkLocation::Office));
            assert_eq!(
                resolver().resolve(mon + Duration::days(1)),
                Some(WorkLocation::Office)
            );
            assert_eq!(
                resolver().resolve(mon + Duration::days(2)),
                Some(WorkLocation::Home)
            );
            assert_eq!(
                resolver().resolve(mon + Duration::days(3)),
                Some(WorkLocation::Home)
            );
        }
    }

    #[test]
    fn reference_friday_is_office() {
        assert_eq!(
            resolver().resolve(REFERENCE_OFFICE_FRIDAY),
            Some(WorkLocation::Office)
        );
    }

    #[test]
    fn fridays_alternate_weekly() {
        let r = resolver();
        assert_eq!(
            r.resolve(REFERENCE_OFFICE_FRIDAY + Duration::days(7)),
            Some(WorkLocation::Home)
        );
        assert_eq!(
            r.resolve(REFERENCE_OFFICE_FRIDAY + Duration::days(14)),
            Some(WorkLocation::Office)
        );
        assert_eq!(
            r.resolve(REFERENCE_OFFICE_FRIDAY - Duration::days(14)),
            Some(WorkLocation::Office)
        );
        assert_eq!(
            r.resolve(REFERENCE_OFFICE_FRIDAY - Duration::days(21)),
            Some(WorkLocation::Home)
        );
    }

    #[test]
    fn january_2026_literals() {
        let resolve = |y, m, d| calendar_date(y, m, d).map(|date| resolver().resolve(date));
        assert_eq!(resolve(2026, 1, 23), Ok(Some(WorkLocation::Office)));
        assert_eq!(resolve(2026, 1, 30), Ok(Some(WorkLocation::Home)));
        assert_eq!(resolve(2026, 1, 16), Ok(Some(WorkLocation::Home)));
    }

    #[test]
    fn impossible_date_is_rejected() {
        assert_eq!(
            calendar_date(2026, 2, 29),
            Err(ScheduleError::InvalidDate {
                year: 2026,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn anchor_must_be_a_friday() {
        let thursday = date(2026, 1, 22);
        assert_eq!(
            LocationResolver::new(thursday),
            Err(ScheduleError::NotFriday(thursday))
        );

        // shifting the anchor one week flips every Friday
        let shifted = LocationResolver::new(date(2026, 1, 30)).unwrap();
        assert_eq!(
            shifted.resolve(REFERENCE_OFFICE_FRIDAY),
            Some(WorkLocation::Home)
        );
        assert_eq!(shifted.reference_friday(), date(2026, 1, 30));
    }
}
