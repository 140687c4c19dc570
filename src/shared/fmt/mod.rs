//! Display formatting for table cells.
//!
//! - `num`: digit grouping shared by all formatters
//! - `decimal`: fixed-decimal numbers, currency and percentages
//! - `time`: relative "N min ago" strings

pub mod decimal;
pub mod num;
pub mod time;

pub use decimal::{format_currency, format_number, format_percent};
pub use time::time_ago;
