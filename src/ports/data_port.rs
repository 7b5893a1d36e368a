//! Price data access port trait.

use crate::domain::bar::PriceBar;
use crate::domain::error::RetscanError;
use chrono::NaiveDateTime;

pub trait DataPort {
    /// Load the full price series for a timeframe, in file order.
    fn fetch_bars(&self, timeframe: &str) -> Result<Vec<PriceBar>, RetscanError>;

    /// First timestamp, last timestamp and row count for a timeframe, or
    /// `None` when the source holds no rows.
    fn data_range(
        &self,
        timeframe: &str,
    ) -> Result<Option<(NaiveDateTime, NaiveDateTime, usize)>, RetscanError>;
}
