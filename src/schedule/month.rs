use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ScheduleError;
use crate::model::WorkLocation;
use crate::schedule::resolver::{LocationResolver, calendar_date};

pub const DAYS_OF_WEEK: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
pub const DAYS_OF_WEEK_SHORT: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];
pub const MONTHS: [&str; 12] = [
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

/// A displayed month. `month` is 1-based.
///
/// Only built through `new` or `containing`, so `month` is always 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub struct MonthCursor {
    #[schema(example = 2026)]
    year: i32,
    #[schema(example = 1)]
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self, ScheduleError> {
        if !(1..=12).contains(&month) {
            return Err(ScheduleError::InvalidMonth(month));
        }
        let cursor = Self { year, month };
        // out-of-range years surface here rather than while rendering
        cursor.first_day()?;
        Ok(cursor)
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn first_day(&self) -> Result<NaiveDate, ScheduleError> {
        calendar_date(self.year, self.month, 1)
    }

    /// Highest valid day number of this month
    pub fn days_in_month(&self) -> Result<u32, ScheduleError> {
        self.first_day()?;
        Ok((28..=31)
            .rev()
            .find(|&day| NaiveDate::from_ymd_opt(self.year, self.month, day).is_some())
            .unwrap_or(28))
    }

    /// Blank cells before day 1 in a Sunday-first week
    pub fn leading_blanks(&self) -> Result<u32, ScheduleError> {
        Ok(self.first_day()?.weekday().num_days_from_sunday())
    }

    pub fn title(&self) -> String {
        format!("{} {}", MONTHS[(self.month - 1) as usize], self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DayCell {
    #[schema(example = 23)]
    pub day: u32,
    #[schema(example = "2026-01-23", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "Fri", value_type = String)]
    pub weekday: &'static str,
    pub location: Option<WorkLocation>,
    #[schema(example = "Office", value_type = Option<String>)]
    pub label: Option<&'static str>,
    pub is_today: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct LegendEntry {
    pub location: WorkLocation,
    #[schema(example = "WFH", value_type = String)]
    pub label: &'static str,
    #[schema(example = "Work from Home", value_type = String)]
    pub description: &'static str,
}

/// Badges that appear in the grid, in display order
pub const LEGEND: [LegendEntry; 2] = [
    LegendEntry {
        location: WorkLocation::Home,
        label: "WFH",
        description: "Work from Home",
    },
    LegendEntry {
        location: WorkLocation::Office,
        label: "Office",
        description: "Work from Office",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct MonthSummary {
    pub office: u32,
    pub home: u32,
    pub total: u32,
}

/// Seven-column month view: leading blanks, then one cell per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MonthGrid {
    pub cursor: MonthCursor,
    #[schema(example = "January 2026")]
    pub title: String,
    #[schema(value_type = Vec<String>)]
    pub days_of_week: [&'static str; 7],
    #[schema(value_type = Vec<String>)]
    pub days_of_week_short: [&'static str; 7],
    pub days_in_month: u32,
    pub leading_blanks: u32,
    /// `null` entries are padding before the first day
    pub cells: Vec<Option<DayCell>>,
    pub summary: MonthSummary,
    #[schema(value_type = Vec<LegendEntry>)]
    pub legend: [LegendEntry; 2],
    pub prev: MonthCursor,
    pub next: MonthCursor,
}

impl MonthGrid {
    pub fn build(resolver: &LocationResolver, cursor: MonthCursor) -> Result<Self, ScheduleError> {
        let first = cursor.first_day()?;
        let days_in_month = cursor.days_in_month()?;
        let leading_blanks = cursor.leading_blanks()?;

        let mut cells: Vec<Option<DayCell>> =
            Vec::with_capacity((leading_blanks + days_in_month) as usize);
        cells.extend((0..leading_blanks).map(|_| None));

        let mut summary = MonthSummary::default();
        for date in first.iter_days().take(days_in_month as usize) {
            let location = resolver.resolve(date);
            match location {
                Some(WorkLocation::Office) => summary.office += 1,
                Some(WorkLocation::Home) => summary.home += 1,
                _ => {}
            }
            cells.push(Some(DayCell {
                day: date.day(),
                date,
                weekday: DAYS_OF_WEEK[date.weekday().num_days_from_sunday() as usize],
                location,
                label: location.map(|l| l.label()),
                is_today: false,
            }));
        }
        summary.total = summary.office + summary.home;

        Ok(Self {
            cursor,
            title: cursor.title(),
            days_of_week: DAYS_OF_WEEK,
            days_of_week_short: DAYS_OF_WEEK_SHORT,
            days_in_month,
            leading_blanks,
            cells,
            summary,
            legend: LEGEND,
            prev: cursor.prev(),
            next: cursor.next(),
        })
    }

    /// Flags the cell for `today`, if it falls in this month.
    pub fn mark_today(&mut self, today: NaiveDate) {
        for cell in self.cells.iter_mut().flatten() {
            cell.is_today = cell.date == today;
        }
    }
}
