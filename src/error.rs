use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::NaiveDate;
use derive_more::Display;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ScheduleError {
    #[display(fmt = "Invalid month {}; expected 1-12", _0)]
    InvalidMonth(u32),

    #[display(fmt = "Invalid date {}-{:02}-{:02}", year, month, day)]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[display(fmt = "Reference date {} is not a Friday", _0)]
    NotFriday(NaiveDate),

    #[display(fmt = "{} is not implemented", _0)]
    NotImplemented(&'static str),
}

impl std::error::Error for ScheduleError {}

impl ResponseError for ScheduleError {
    fn status_code(&self) -> StatusCode {
        match self {
            ScheduleError::InvalidMonth(_) | ScheduleError::InvalidDate { .. } => {
                StatusCode::BAD_REQUEST
            }
            ScheduleError::NotFriday(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ScheduleError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "message": self.to_string()
        }))
    }
}
