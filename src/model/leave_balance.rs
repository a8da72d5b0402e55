use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaveBalance {
    #[schema(example = "Casual Leave")]
    pub leave_type: String,
    #[schema(example = 12)]
    pub total: u32,
    #[schema(example = 4)]
    pub used: u32,
    #[schema(example = 8)]
    pub remaining: u32,
}

impl LeaveBalance {
    pub fn new(leave_type: impl Into<String>, total: u32, used: u32, remaining: u32) -> Self {
        Self {
            leave_type: leave_type.into(),
            total,
            used,
            remaining,
        }
    }

    /// `remaining == total - used`; supplied data is not guaranteed to hold it
    pub fn is_consistent(&self) -> bool {
        self.total.checked_sub(self.used) == Some(self.remaining)
    }
}
