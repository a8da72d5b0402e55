use actix_web::{HttpResponse, Responder, web};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::WorkLocation;
use crate::schedule::month::DAYS_OF_WEEK;
use crate::schedule::resolver::calendar_date;
use crate::schedule::{MonthCursor, MonthGrid};
use crate::state::AppState;

#[derive(Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CalendarQuery {
    #[schema(example = 2026)]
    /// Year to display; defaults to the current year
    pub year: Option<i32>,
    #[schema(example = 1)]
    /// Month to display, 1-12; defaults to the current month
    pub month: Option<u32>,
}

#[derive(Serialize, ToSchema)]
pub struct LocationResponse {
    #[schema(example = "2026-01-23", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "Fri", value_type = String)]
    pub weekday: &'static str,
    pub location: Option<WorkLocation>,
    #[schema(example = "Office", value_type = Option<String>)]
    pub label: Option<&'static str>,
}

/// Month grid with per-day locations and office/home totals
#[utoipa::path(
    get,
    path = "/api/calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Month grid", body = MonthGrid),
        (status = 400, description = "Invalid month or year", body = Object, example = json!({
            "message": "Invalid month 13; expected 1-12"
        }))
    ),
    tag = "Calendar"
)]
pub async fn month_view(
    state: web::Data<AppState>,
    query: web::Query<CalendarQuery>,
) -> actix_web::Result<impl Responder> {
    let today = state.today();
    let cursor = MonthCursor::new(
        query.year.unwrap_or_else(|| today.year()),
        query.month.unwrap_or_else(|| today.month()),
    )?;

    let cached = state.month_grid(cursor).await.map_err(|e| {
        tracing::error!(
            error = %e,
            year = cursor.year(),
            month = cursor.month(),
            "Failed to build month grid"
        );
        e
    })?;

    let mut grid = MonthGrid::clone(&cached);
    grid.mark_today(today);

    Ok(HttpResponse::Ok().json(grid))
}

/// Resolved work location for a single day
#[utoipa::path(
    get,
    path = "/api/location/{year}/{month}/{day}",
    params(
        ("year" = i32, Path, description = "Year", example = 2026),
        ("month" = u32, Path, description = "Month, 1-12", example = 1),
        ("day" = u32, Path, description = "Day of month", example = 23)
    ),
    responses(
        (status = 200, description = "Resolved location", body = LocationResponse),
        (status = 400, description = "No such calendar date", body = Object, example = json!({
            "message": "Invalid date 2026-02-30"
        }))
    ),
    tag = "Calendar"
)]
pub async fn location_for_date(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32, u32)>,
) -> actix_web::Result<impl Responder> {
    let (year, month, day) = path.into_inner();
    let date = calendar_date(year, month, day)?;
    let location = state.resolver.resolve(date);

    Ok(HttpResponse::Ok().json(LocationResponse {
        date,
        weekday: DAYS_OF_WEEK[date.weekday().num_days_from_sunday() as usize],
        location,
        label: location.map(|l| l.label()),
    }))
}
