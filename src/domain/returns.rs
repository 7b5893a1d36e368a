//! Period-over-period return computation.
//!
//! `ret[i] = (close[i] - close[i-1]) / close[i-1]`. The first bar has no
//! previous close and is dropped, so the output is one row shorter than the
//! input. Division is plain IEEE-754: a zero previous close produces an
//! infinite (or NaN) return, which is kept.

use crate::domain::bar::PriceBar;
use chrono::NaiveDateTime;

/// One bar of the return series.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnPoint {
    pub timestamp: NaiveDateTime,
    pub close: f64,
    pub ret: f64,
}

/// Derive the fractional-change series from a price series.
///
/// Zero or one input bars yield an empty series.
pub fn compute_returns(bars: &[PriceBar]) -> Vec<ReturnPoint> {
    bars.windows(2)
        .map(|w| ReturnPoint {
            timestamp: w[1].timestamp,
            close: w[1].close,
            ret: (w[1].close - w[0].close) / w[0].close,
        })
        .collect()
}
