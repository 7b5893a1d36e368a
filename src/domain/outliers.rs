//! Z-score outlier flagging over a return series.
//!
//! Statistics are computed once over the full series, so a flagged row
//! influences the very mean and sigma used to judge it. Sigma uses the
//! sample (N-1) formula; the denominator choice moves z-scores on very
//! short series.

use crate::domain::returns::ReturnPoint;
use chrono::NaiveDateTime;

/// Default flagging threshold in standard deviations.
pub const DEFAULT_THRESHOLD: f64 = 3.0;

/// Mean and sample standard deviation of one timeframe's return column.
///
/// `mu` is NaN for an empty series; `sigma` is NaN for fewer than two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnStats {
    pub mu: f64,
    pub sigma: f64,
}

/// A return bar annotated with its standardized score and outlier flag.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedReturn {
    pub timestamp: NaiveDateTime,
    pub close: f64,
    pub ret: f64,
    pub z_score: f64,
    pub outlier: bool,
}

impl ReturnStats {
    /// Compute mean and sample stddev over the return column.
    pub fn compute(points: &[ReturnPoint]) -> Self {
        let n = points.len() as f64;
        let mu = points.iter().map(|p| p.ret).sum::<f64>() / n;

        let sigma = if points.len() >= 2 {
            let variance =
                points.iter().map(|p| (p.ret - mu).powi(2)).sum::<f64>() / (n - 1.0);
            variance.sqrt()
        } else {
            f64::NAN
        };

        Self { mu, sigma }
    }

    /// Flagging bounds at `mu ± threshold·sigma`.
    pub fn bounds(&self, threshold: f64) -> (f64, f64) {
        (
            self.mu - threshold * self.sigma,
            self.mu + threshold * self.sigma,
        )
    }
}

/// Annotate each return with its z-score and flag rows where
/// `|z| > threshold` (strict).
///
/// Z-scores follow IEEE arithmetic: a zero sigma yields ±inf, a NaN sigma
/// yields NaN. NaN never exceeds the threshold, so degenerate series flag
/// nothing. Empty input yields an empty series and NaN stats, no panic.
pub fn detect_outliers(
    points: &[ReturnPoint],
    threshold: f64,
) -> (Vec<AnnotatedReturn>, ReturnStats) {
    let stats = ReturnStats::compute(points);

    let annotated = points
        .iter()
        .map(|p| {
            let z_score = (p.ret - stats.mu) / stats.sigma;
            AnnotatedReturn {
                timestamp: p.timestamp,
                close: p.close,
                ret: p.ret,
                z_score,
                outlier: z_score.abs() > threshold,
            }
        })
        .collect();

    (annotated, stats)
}
