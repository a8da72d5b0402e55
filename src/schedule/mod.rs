pub mod holidays;
pub mod leave;
pub mod month;
pub mod resolver;

pub use holidays::HolidayView;
pub use leave::{LeavePlannerView, LeaveTab};
pub use month::{MonthCursor, MonthGrid};
pub use resolver::LocationResolver;
