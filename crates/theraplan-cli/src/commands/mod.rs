//! Command handlers, one module per subcommand.

use chrono::{Local, NaiveDate};

pub mod completions;
pub mod config;
pub mod demand;
pub mod low_stock;
pub mod plan;
pub mod remind;
pub mod shortages;
pub mod stock;

/// Local calendar day, used when `--as-of` / `--today` are omitted.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
