#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use retscan::domain::bar::PriceBar;
use retscan::domain::error::RetscanError;
use retscan::ports::data_port::DataPort;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<PriceBar>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, timeframe: &str, bars: Vec<PriceBar>) -> Self {
        self.data.insert(timeframe.to_string(), bars);
        self
    }

    pub fn with_error(mut self, timeframe: &str, reason: &str) -> Self {
        self.errors.insert(timeframe.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_bars(&self, timeframe: &str) -> Result<Vec<PriceBar>, RetscanError> {
        if let Some(reason) = self.errors.get(timeframe) {
            return Err(RetscanError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(timeframe).cloned().unwrap_or_default())
    }

    fn data_range(
        &self,
        timeframe: &str,
    ) -> Result<Option<(NaiveDateTime, NaiveDateTime, usize)>, RetscanError> {
        if let Some(reason) = self.errors.get(timeframe) {
            return Err(RetscanError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(timeframe).and_then(|bars| {
            match (bars.first(), bars.last()) {
                (Some(first), Some(last)) => {
                    Some((first.timestamp, last.timestamp, bars.len()))
                }
                _ => None,
            }
        }))
    }
}

pub fn ts(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + chrono::Duration::hours(hour as i64)
}

pub fn make_bars(closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar {
            timestamp: ts(i as u32),
            close,
        })
        .collect()
}

/// Write a `{symbol}_MT5_{timeframe}.csv` fixture under `dir`.
pub fn write_csv_fixture(dir: &std::path::Path, timeframe: &str, closes: &[f64]) {
    let mut content = String::from("Date,open,high,low,close,volume\n");
    for (i, close) in closes.iter().enumerate() {
        content.push_str(&format!(
            "{},{close},{close},{close},{close},1000\n",
            ts(i as u32).format("%Y-%m-%d %H:%M:%S")
        ));
    }
    std::fs::write(
        dir.join(format!("XAUUSD_MT5_{timeframe}.csv")),
        content,
    )
    .unwrap();
}
