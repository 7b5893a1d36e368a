//! Scan orchestration: load → returns → outlier flagging per timeframe.

use crate::domain::error::RetscanError;
use crate::domain::outliers::{detect_outliers, AnnotatedReturn, ReturnStats};
use crate::domain::returns::compute_returns;
use crate::ports::data_port::DataPort;

/// One timeframe's annotated return series and its statistics.
#[derive(Debug, Clone)]
pub struct TimeframeReport {
    pub timeframe: String,
    pub points: Vec<AnnotatedReturn>,
    pub stats: ReturnStats,
    pub threshold: f64,
}

impl TimeframeReport {
    /// Flagged rows, in series order.
    pub fn outliers(&self) -> Vec<&AnnotatedReturn> {
        self.points.iter().filter(|p| p.outlier).collect()
    }

    /// The most recent observation, if the series is non-empty.
    pub fn latest(&self) -> Option<&AnnotatedReturn> {
        self.points.last()
    }
}

/// Run the full pipeline for each timeframe in order.
///
/// One bad file aborts the whole run; there is no partial success.
pub fn run_scan(
    data_port: &dyn DataPort,
    timeframes: &[String],
    threshold: f64,
) -> Result<Vec<TimeframeReport>, RetscanError> {
    let mut reports = Vec::with_capacity(timeframes.len());

    for timeframe in timeframes {
        let bars = data_port.fetch_bars(timeframe)?;
        let returns = compute_returns(&bars);
        let (points, stats) = detect_outliers(&returns, threshold);

        reports.push(TimeframeReport {
            timeframe: timeframe.clone(),
            points,
            stats,
            threshold,
        });
    }

    Ok(reports)
}
