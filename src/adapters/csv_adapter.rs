//! CSV file data adapter.
//!
//! Reads `{symbol}_MT5_{timeframe}.csv` under a base directory. The `Date`
//! and `close` columns are located by header name; everything else in the
//! file is ignored. Rows keep file order.

use crate::domain::bar::PriceBar;
use crate::domain::error::RetscanError;
use crate::ports::data_port::DataPort;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::PathBuf;

/// Timestamp formats accepted in the `Date` column, tried in order.
/// Covers ISO and MT5-style exports, with and without seconds, plus
/// date-only rows (midnight assumed).
const DATE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y.%m.%d %H:%M:%S",
    "%Y.%m.%d %H:%M",
];

pub struct CsvAdapter {
    base_path: PathBuf,
    symbol: String,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf, symbol: impl Into<String>) -> Self {
        Self {
            base_path,
            symbol: symbol.into(),
        }
    }

    fn csv_path(&self, timeframe: &str) -> PathBuf {
        self.base_path
            .join(format!("{}_MT5_{}.csv", self.symbol, timeframe))
    }

    fn parse_timestamp(value: &str, file: &str) -> Result<NaiveDateTime, RetscanError> {
        for format in DATE_FORMATS {
            if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
                return Ok(ts);
            }
        }
        for format in ["%Y-%m-%d", "%Y.%m.%d"] {
            if let Ok(date) = NaiveDate::parse_from_str(value, format) {
                return Ok(date.and_time(chrono::NaiveTime::MIN));
            }
        }
        Err(RetscanError::Data {
            reason: format!("unparseable timestamp '{}' in {}", value, file),
        })
    }

    /// Index of a named column in the header row, case-insensitive.
    fn column_index(
        headers: &csv::StringRecord,
        column: &str,
        file: &str,
    ) -> Result<usize, RetscanError> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(column))
            .ok_or_else(|| RetscanError::MissingColumn {
                column: column.to_string(),
                file: file.to_string(),
            })
    }
}

impl DataPort for CsvAdapter {
    fn fetch_bars(&self, timeframe: &str) -> Result<Vec<PriceBar>, RetscanError> {
        let path = self.csv_path(timeframe);
        let file = path.display().to_string();
        let content = fs::read_to_string(&path).map_err(|e| RetscanError::Data {
            reason: format!("failed to read {}: {}", file, e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let headers = rdr.headers().map_err(|e| RetscanError::Data {
            reason: format!("CSV header error in {}: {}", file, e),
        })?;
        let date_idx = Self::column_index(headers, "Date", &file)?;
        let close_idx = Self::column_index(headers, "close", &file)?;

        let mut bars = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| RetscanError::Data {
                reason: format!("CSV parse error in {}: {}", file, e),
            })?;

            let date_str = record.get(date_idx).ok_or_else(|| RetscanError::Data {
                reason: format!("short row in {}", file),
            })?;
            let timestamp = Self::parse_timestamp(date_str, &file)?;

            let close: f64 = record
                .get(close_idx)
                .ok_or_else(|| RetscanError::Data {
                    reason: format!("short row in {}", file),
                })?
                .parse()
                .map_err(|e| RetscanError::Data {
                    reason: format!("invalid close value in {}: {}", file, e),
                })?;

            bars.push(PriceBar { timestamp, close });
        }

        Ok(bars)
    }

    fn data_range(
        &self,
        timeframe: &str,
    ) -> Result<Option<(NaiveDateTime, NaiveDateTime, usize)>, RetscanError> {
        let bars = self.fetch_bars(timeframe)?;
        Ok(match (bars.first(), bars.last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp, bars.len())),
            _ => None,
        })
    }
}
