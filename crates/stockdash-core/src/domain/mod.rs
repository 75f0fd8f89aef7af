//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated exchange ticker |
//! | [`Company`] | Catalog entry (display name + symbol) |
//! | [`ChartSeries`] | Dates, prices, and trend for one fetch |
//! | [`Trend`] | Direction of the move from first to last price |
//! | [`PriceHistoryPayload`] | Wire body of the history service |

mod company;
mod series;
mod symbol;

pub use company::Company;
pub use series::{ChartSeries, PriceHistoryPayload, Trend};
pub use symbol::Symbol;
