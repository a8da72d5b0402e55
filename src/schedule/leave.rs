use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use crate::model::{LeaveBalance, LeaveRequest, LeaveStatus};

pub const NO_REQUESTS_MESSAGE: &str = "No leave requests";

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveTab {
    #[default]
    Balance,
    Requests,
}

/// "Feb 14" for a single day, "Mar 16 - Mar 18" otherwise
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    let start_str = start.format("%b %-d").to_string();
    if start == end {
        start_str
    } else {
        format!("{} - {}", start_str, end.format("%b %-d"))
    }
}

pub fn percent_remaining(balance: &LeaveBalance) -> f64 {
    if balance.total == 0 {
        return 0.0;
    }
    f64::from(balance.remaining) / f64::from(balance.total) * 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BalanceBar {
    #[schema(example = "Casual Leave")]
    pub leave_type: String,
    pub total: u32,
    pub used: u32,
    pub remaining: u32,
    #[schema(example = "8 / 12 remaining")]
    pub summary: String,
    /// Bar width, 0-100
    #[schema(example = 66.67)]
    pub percent_remaining: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RequestCard {
    #[schema(example = "2")]
    pub id: String,
    #[schema(example = "Earned Leave")]
    pub leave_type: String,
    pub status: LeaveStatus,
    #[schema(example = "Mar 16 - Mar 18")]
    pub date_range: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LeavePlannerView {
    #[schema(example = 28)]
    pub total_remaining: u32,
    #[schema(example = "28 days available")]
    pub available_label: String,
    pub active_tab: LeaveTab,
    /// Present on the balance tab
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balances: Option<Vec<BalanceBar>>,
    /// Present on the requests tab
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests: Option<Vec<RequestCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub empty_message: Option<&'static str>,
}

impl LeavePlannerView {
    pub fn build(balances: &[LeaveBalance], requests: &[LeaveRequest], tab: LeaveTab) -> Self {
        for balance in balances.iter().filter(|b| !b.is_consistent()) {
            tracing::warn!(
                leave_type = %balance.leave_type,
                total = balance.total,
                used = balance.used,
                remaining = balance.remaining,
                "Leave balance does not add up"
            );
        }

        let total_remaining: u32 = balances.iter().map(|b| b.remaining).sum();

        let mut view = Self {
            total_remaining,
            available_label: format!("{total_remaining} days available"),
            active_tab: tab,
            balances: None,
            requests: None,
            empty_message: None,
        };

        match tab {
            LeaveTab::Balance => {
                view.balances = Some(
                    balances
                        .iter()
                        .map(|b| BalanceBar {
                            leave_type: b.leave_type.clone(),
                            total: b.total,
                            used: b.used,
                            remaining: b.remaining,
                            summary: format!("{} / {} remaining", b.remaining, b.total),
                            percent_remaining: percent_remaining(b),
                        })
                        .collect(),
                );
            }
            LeaveTab::Requests => {
                let cards: Vec<RequestCard> = requests
                    .iter()
                    .map(|r| RequestCard {
                        id: r.id.clone(),
                        leave_type: r.leave_type.clone(),
                        status: r.status,
                        date_range: format_date_range(r.start_date, r.end_date),
                        reason: r.reason.clone(),
                    })
                    .collect();
                view.empty_message = cards.is_empty().then_some(NO_REQUESTS_MESSAGE);
                view.requests = Some(cards);
            }
        }

        view
    }
}
