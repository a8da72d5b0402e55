use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::ScheduleError;
use crate::schedule::HolidayView;
use crate::state::AppState;

#[derive(Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct HolidayQuery {
    #[schema(example = false)]
    /// Include holidays that are already past
    pub show_past: Option<bool>,
}

/// Office holidays; past ones only when `show_past` is set
#[utoipa::path(
    get,
    path = "/api/holidays",
    params(HolidayQuery),
    responses(
        (status = 200, description = "Holiday list", body = HolidayView)
    ),
    tag = "Holidays"
)]
pub async fn holiday_list(
    state: web::Data<AppState>,
    query: web::Query<HolidayQuery>,
) -> actix_web::Result<impl Responder> {
    let holidays = state.provider.holidays();
    let view = HolidayView::build(&holidays, state.today(), query.show_past.unwrap_or(false));

    Ok(HttpResponse::Ok().json(view))
}

/// Import Holiday Schedule (not wired to any calendar source)
#[utoipa::path(
    post,
    path = "/api/holidays/import",
    responses(
        (status = 501, description = "Holiday import is not available", body = Object, example = json!({
            "message": "Import Holiday Schedule is not implemented"
        }))
    ),
    tag = "Holidays"
)]
pub async fn import_holidays() -> actix_web::Result<HttpResponse> {
    tracing::info!("Holiday import requested");
    Err(ScheduleError::NotImplemented("Import Holiday Schedule").into())
}
