use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::ScheduleError;
use crate::schedule::{LeavePlannerView, LeaveTab};
use crate::state::AppState;

#[derive(Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct LeaveQuery {
    #[schema(example = "balance")]
    /// `balance` (default) or `requests`
    pub tab: Option<LeaveTab>,
}

/// Leave balances or leave requests, depending on the tab
#[utoipa::path(
    get,
    path = "/api/leave",
    params(LeaveQuery),
    responses(
        (status = 200, description = "Leave planner", body = LeavePlannerView),
        (status = 400, description = "Unknown tab")
    ),
    tag = "Leave"
)]
pub async fn leave_planner(
    state: web::Data<AppState>,
    query: web::Query<LeaveQuery>,
) -> actix_web::Result<impl Responder> {
    let balances = state.provider.leave_balances();
    let requests = state.provider.leave_requests();
    let view = LeavePlannerView::build(&balances, &requests, query.tab.unwrap_or_default());

    Ok(HttpResponse::Ok().json(view))
}

/// Request Leave (no approval workflow behind it)
#[utoipa::path(
    post,
    path = "/api/leave/requests",
    responses(
        (status = 501, description = "Leave requests cannot be submitted", body = Object, example = json!({
            "message": "Request Leave is not implemented"
        }))
    ),
    tag = "Leave"
)]
pub async fn request_leave() -> actix_web::Result<HttpResponse> {
    tracing::info!("Leave request submission attempted");
    Err(ScheduleError::NotImplemented("Request Leave").into())
}
