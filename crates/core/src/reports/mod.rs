//! Monthly and yearly summaries of contribution activity.

pub mod service;
pub mod types;


pub use service::SummaryService;
pub use types::{AnnualSummary, MonthlySummary, RoomSnapshot, YearSummary};
