pub mod holiday;
pub mod leave_balance;
pub mod leave_request;
pub mod work_location;

pub use holiday::Holiday;
pub use leave_balance::LeaveBalance;
pub use leave_request::{LeaveRequest, LeaveStatus};
pub use work_location::WorkLocation;
