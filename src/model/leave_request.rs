use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "2026-02-14", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-02-14", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "Casual Leave")]
    pub leave_type: String,
    pub status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Valentine's Day")]
    pub reason: Option<String>,
}
