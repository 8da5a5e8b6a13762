//! Summary tables derived from the raw rental records.
//!
//! Each aggregator is a pure, single-pass transform: it recomputes its table
//! from the full input on every call and retains nothing between calls.
//! The range filter narrows an already-built daily summary.

pub mod daily;
pub mod filter;
pub mod hourly;
pub mod seasonal;
pub mod types;

pub use daily::aggregate_daily;
pub use filter::{DateRange, filter_by_date_range};
pub use hourly::aggregate_hourly;
pub use seasonal::aggregate_seasonal;
