//! Domain error types.

/// Top-level error type for retscan.
#[derive(Debug, thiserror::Error)]
pub enum RetscanError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("missing column '{column}' in {file}")]
    MissingColumn { column: String, file: String },

    #[error("no data for timeframe {timeframe}")]
    NoData { timeframe: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&RetscanError> for std::process::ExitCode {
    fn from(err: &RetscanError) -> Self {
        let code: u8 = match err {
            RetscanError::Io(_) => 1,
            RetscanError::ConfigParse { .. } | RetscanError::ConfigInvalid { .. } => 2,
            RetscanError::Data { .. } | RetscanError::MissingColumn { .. } => 3,
            RetscanError::NoData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
