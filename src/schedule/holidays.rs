use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::Holiday;

pub const EMPTY_MESSAGE: &str = "No holidays to display";

/// `date ≥ today`, both taken as local midnight
pub fn is_upcoming(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

pub fn countdown_label(days: i64) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        n => format!("{n} days"),
    }
}

/// e.g. "Mon, Jan 26"
pub fn format_holiday_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HolidayEntry {
    #[schema(example = "2026-10-20", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "Dussehra")]
    pub name: String,
    #[schema(example = "Tue, Oct 20")]
    pub formatted_date: String,
    pub upcoming: bool,
    /// Countdown text, upcoming entries only
    #[schema(example = "Tomorrow")]
    pub countdown: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HolidayView {
    #[schema(example = 4)]
    pub upcoming_count: usize,
    pub show_past: bool,
    #[schema(example = "Show all", value_type = String)]
    pub toggle_label: &'static str,
    pub holidays: Vec<HolidayEntry>,
    /// Set when `holidays` is empty
    #[schema(example = "No holidays to display", value_type = Option<String>)]
    pub empty_message: Option<&'static str>,
}

impl HolidayView {
    /// Splits `holidays` around `today`. Provider order is kept.
    pub fn build(holidays: &[Holiday], today: NaiveDate, show_past: bool) -> Self {
        let upcoming_count = holidays
            .iter()
            .filter(|h| is_upcoming(h.date, today))
            .count();

        let entries: Vec<HolidayEntry> = holidays
            .iter()
            .filter(|h| show_past || is_upcoming(h.date, today))
            .map(|h| {
                let upcoming = is_upcoming(h.date, today);
                HolidayEntry {
                    date: h.date,
                    name: h.name.clone(),
                    formatted_date: format_holiday_date(h.date),
                    upcoming,
                    countdown: upcoming.then(|| countdown_label(days_until(h.date, today))),
                }
            })
            .collect();

        Self {
            upcoming_count,
            show_past,
            toggle_label: if show_past { "Hide past" } else { "Show all" },
            empty_message: entries.is_empty().then_some(EMPTY_MESSAGE),
            holidays: entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::sample_holidays;
    use crate::schedule::resolver::date;

    #[test]
    fn countdown_labels() {
        assert_eq!(countdown_label(0), "Today");
        assert_eq!(countdown_label(1), "Tomorrow");
        assert_eq!(countdown_label(21), "21 days");
    }

    #[test]
    fn formats_like_the_holiday_card() {
        assert_eq!(format_holiday_date(date(2026, 1, 26)), "Mon, Jan 26");
        assert_eq!(format_holiday_date(date(2026, 11, 9)), "Mon, Nov 9");
    }

    #[test]
    fn upcoming_only_by_default() {
        let view = HolidayView::build(&sample_holidays(), date(2026, 10, 19), false);
        let names: Vec<&str> = view.holidays.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Dussehra", "Diwali", "Christmas"]);
        assert_eq!(view.upcoming_count, 3);
        assert_eq!(view.toggle_label, "Show all");
        assert_eq!(view.holidays[0].countdown.as_deref(), Some("Tomorrow"));
        assert_eq!(view.holidays[1].countdown.as_deref(), Some("21 days"));
        assert_eq!(view.empty_message, None);
    }

    #[test]
    fn holiday_today_counts_as_upcoming() {
        let view = HolidayView::build(&sample_holidays(), date(2026, 12, 25), false);
        assert_eq!(view.upcoming_count, 1);
        assert_eq!(view.holidays[0].countdown.as_deref(), Some("Today"));
    }

    #[test]
    fn show_past_keeps_order_and_hides_past_countdowns() {
        let holidays = sample_holidays();
        let view = HolidayView::build(&holidays, date(2026, 10, 19), true);
        assert_eq!(view.holidays.len(), holidays.len());
        assert_eq!(view.upcoming_count, 3);
        assert_eq!(view.toggle_label, "Hide past");
        assert_eq!(view.holidays[0].name, "New Year's Day");
        assert!(!view.holidays[0].upcoming);
        assert_eq!(view.holidays[0].countdown, None);
    }

    #[test]
    fn nothing_left_this_year() {
        let view = HolidayView::build(&sample_holidays(), date(2027, 1, 1), false);
        assert!(view.holidays.is_empty());
        assert_eq!(view.upcoming_count, 0);
        assert_eq!(view.empty_message, Some(EMPTY_MESSAGE));
    }
}
