use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::model::{Holiday, LeaveBalance, LeaveRequest, LeaveStatus};
use crate::schedule::resolver::date;

/// Source of the holiday and leave data the views render.
///
/// A backend integration replaces [`InMemoryProvider`] behind this trait.
pub trait ScheduleDataProvider: Send + Sync {
    fn holidays(&self) -> Vec<Holiday>;
    fn leave_balances(&self) -> Vec<LeaveBalance>;
    fn leave_requests(&self) -> Vec<LeaveRequest>;
}

const SAMPLE_HOLIDAYS: [(NaiveDate, &str); 9] = [
    (date(2026, 1, 1), "New Year's Day"),
    (date(2026, 1, 26), "Republic Day"),
    (date(2026, 3, 17), "Holi"),
    (date(2026, 4, 14), "Good Friday"),
    (date(2026, 8, 15), "Independence Day"),
    (date(2026, 10, 2), "Gandhi Jayanti"),
    (date(2026, 10, 20), "Dussehra"),
    (date(2026, 11, 9), "Diwali"),
    (date(2026, 12, 25), "Christmas"),
];

static SAMPLE_LEAVE_BALANCES: Lazy<Vec<LeaveBalance>> = Lazy::new(|| {
    vec![
        LeaveBalance::new("Casual Leave", 12, 4, 8),
        LeaveBalance::new("Sick Leave", 10, 2, 8),
        LeaveBalance::new("Earned Leave", 15, 5, 10),
        LeaveBalance::new("Comp Off", 3, 1, 2),
    ]
});

static SAMPLE_LEAVE_REQUESTS: Lazy<Vec<LeaveRequest>> = Lazy::new(|| {
    vec![
        LeaveRequest {
            id: "1".to_string(),
            start_date: date(2026, 2, 14),
            end_date: date(2026, 2, 14),
            leave_type: "Casual Leave".to_string(),
            status: LeaveStatus::Approved,
            reason: Some("Valentine's Day".to_string()),
        },
        LeaveRequest {
            id: "2".to_string(),
            start_date: date(2026, 3, 16),
            end_date: date(2026, 3, 18),
            leave_type: "Earned Leave".to_string(),
            status: LeaveStatus::Pending,
            reason: Some("Family vacation".to_string()),
        },
    ]
});

pub fn sample_holidays() -> Vec<Holiday> {
    SAMPLE_HOLIDAYS
        .iter()
        .map(|(d, name)| Holiday::new(*d, *name))
        .collect()
}

pub fn sample_leave_balances() -> Vec<LeaveBalance> {
    SAMPLE_LEAVE_BALANCES.clone()
}

pub fn sample_leave_requests() -> Vec<LeaveRequest> {
    SAMPLE_LEAVE_REQUESTS.clone()
}

/// Provider over owned, session-immutable vectors.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    holidays: Vec<Holiday>,
    leave_balances: Vec<LeaveBalance>,
    leave_requests: Vec<LeaveRequest>,
}

impl InMemoryProvider {
    pub fn new(
        holidays: Vec<Holiday>,
        leave_balances: Vec<LeaveBalance>,
        leave_requests: Vec<LeaveRequest>,
    ) -> Self {
        Self {
            holidays,
            leave_balances,
            leave_requests,
        }
    }

    pub fn sample() -> Self {
        Self::new(
            sample_holidays(),
            sample_leave_balances(),
            sample_leave_requests(),
        )
    }
}

impl ScheduleDataProvider for InMemoryProvider {
    fn holidays(&self) -> Vec<Holiday> {
        self.holidays.clone()
    }

    fn leave_balances(&self) -> Vec<LeaveBalance> {
        self.leave_balances.clone()
    }

    fn leave_requests(&self) -> Vec<LeaveRequest> {
        self.leave_requests.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_is_consistent() {
        let provider = InMemoryProvider::sample();
        assert_eq!(provider.holidays().len(), 9);
        assert!(provider.leave_balances().iter().all(LeaveBalance::is_consistent));
        assert!(
            provider
                .leave_requests()
                .iter()
                .all(|r| r.start_date <= r.end_date)
        );
    }

    #[test]
    fn default_provider_is_empty() {
        let provider = InMemoryProvider::default();
        assert!(provider.holidays().is_empty());
        assert!(provider.leave_requests().is_empty());
    }
}
