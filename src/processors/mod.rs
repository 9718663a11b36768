pub mod coverage;
pub mod load_report;
pub mod time_filter;

pub use coverage::Coverage;
pub use load_report::{LoadReport, RowIssue};
pub use time_filter::{filter_for_slider, filter_records};
