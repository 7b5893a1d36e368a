//! Timeframe labels and the default scan list.
//!
//! A timeframe is a plain label naming one source dataset (e.g. `1H` for
//! recent hourly bars, `1H_ALL` for the full hourly history). Labels are
//! carried verbatim into file names and report headings.

use std::collections::HashSet;

/// The datasets scanned when nothing else is configured.
pub const DEFAULT_TIMEFRAMES: [&str; 2] = ["1H", "1H_ALL"];

/// Instrument symbol used in default file names.
pub const DEFAULT_SYMBOL: &str = "XAUUSD";

#[derive(Debug, Clone, thiserror::Error)]
pub enum TimeframeError {
    #[error("empty token in timeframe list")]
    EmptyToken,

    #[error("duplicate timeframe: {0}")]
    Duplicate(String),
}

/// Parse a comma-separated timeframe list, e.g. `1H,1H_ALL`.
pub fn parse_timeframes(input: &str) -> Result<Vec<String>, TimeframeError> {
    let mut timeframes = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(TimeframeError::EmptyToken);
        }
        let label = trimmed.to_uppercase();
        if seen.contains(&label) {
            return Err(TimeframeError::Duplicate(label));
        }
        seen.insert(label.clone());
        timeframes.push(label);
    }

    Ok(timeframes)
}
