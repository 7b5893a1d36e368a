//! Raw price bar representation.

use chrono::NaiveDateTime;

/// One row of a source price file: the parsed timestamp and the closing
/// price. Bars keep file order; ascending order is assumed, not verified.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub timestamp: NaiveDateTime,
    pub close: f64,
}

impl PriceBar {
    pub fn new(timestamp: NaiveDateTime, close: f64) -> Self {
        Self { timestamp, close }
    }
}
