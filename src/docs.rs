use crate::api::calendar::{CalendarQuery, LocationResponse};
use crate::api::holidays::HolidayQuery;
use crate::api::leave::LeaveQuery;
use crate::model::{Holiday, LeaveBalance, LeaveRequest, LeaveStatus, WorkLocation};
use crate::schedule::holidays::HolidayEntry;
use crate::schedule::leave::{BalanceBar, RequestCard};
use crate::schedule::month::{DayCell, LegendEntry, MonthSummary};
use crate::schedule::{HolidayView, LeavePlannerView, LeaveTab, MonthCursor, MonthGrid};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Working From API",
        version = "0.1.0",
        description = r#"
## Working From

Personal schedule display: which workdays are spent at the office and which
from home, alongside office holidays and leave.

### Schedule rule
- **Monday, Tuesday**: office
- **Wednesday, Thursday**: home
- **Friday**: alternates weekly, anchored on a reference office Friday
- **Weekends**: no location

### Views
- **Calendar**: month grid with per-day location and monthly totals
- **Holidays**: upcoming holidays with countdowns, past ones on request
- **Leave**: balance bars or the request list

Holiday import and leave requests are placeholders and answer `501`.

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::calendar::month_view,
        crate::api::calendar::location_for_date,

        crate::api::holidays::holiday_list,
        crate::api::holidays::import_holidays,

        crate::api::leave::leave_planner,
        crate::api::leave::request_leave
    ),
    components(
        schemas(
            CalendarQuery,
            LocationResponse,
            MonthCursor,
            MonthGrid,
            MonthSummary,
            LegendEntry,
            DayCell,
            WorkLocation,
            HolidayQuery,
            Holiday,
            HolidayEntry,
            HolidayView,
            LeaveQuery,
            LeaveTab,
            LeaveStatus,
            LeaveBalance,
            LeaveRequest,
            BalanceBar,
            RequestCard,
            LeavePlannerView
        )
    ),
    tags(
        (name = "Calendar", description = "Monthly work-location schedule"),
        (name = "Holidays", description = "Office holiday list"),
        (name = "Leave", description = "Leave balances and requests"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_view_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/calendar",
            "/api/location/{year}/{month}/{day}",
            "/api/holidays",
            "/api/holidays/import",
            "/api/leave",
            "/api/leave/requests",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing");
        }
    }
}
