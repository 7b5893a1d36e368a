//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::html_report::HtmlReportAdapter;
use crate::domain::error::RetscanError;
use crate::domain::outliers::DEFAULT_THRESHOLD;
use crate::domain::scan::{run_scan, TimeframeReport};
use crate::domain::timeframe::{parse_timeframes, DEFAULT_SYMBOL, DEFAULT_TIMEFRAMES};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "retscan", about = "Return outlier scanner for price CSVs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the scan and write the HTML dashboard
    Scan {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        symbol: Option<String>,
        #[arg(long)]
        timeframes: Option<String>,
        #[arg(short, long)]
        threshold: Option<f64>,
    },
    /// Print flagged rows to stdout without writing a dashboard
    Outliers {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
        #[arg(long)]
        symbol: Option<String>,
        #[arg(long)]
        timeframes: Option<String>,
        #[arg(short, long)]
        threshold: Option<f64>,
    },
    /// Show the data range of each timeframe's source file
    Info {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
        #[arg(long)]
        symbol: Option<String>,
        #[arg(long)]
        timeframes: Option<String>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Scan {
            config,
            data_dir,
            output,
            symbol,
            timeframes,
            threshold,
        } => run_scan_command(
            config.as_ref(),
            data_dir.as_ref(),
            output.as_ref(),
            symbol.as_deref(),
            timeframes.as_deref(),
            threshold,
        ),
        Command::Outliers {
            config,
            data_dir,
            symbol,
            timeframes,
            threshold,
        } => run_outliers(
            config.as_ref(),
            data_dir.as_ref(),
            symbol.as_deref(),
            timeframes.as_deref(),
            threshold,
        ),
        Command::Info {
            config,
            data_dir,
            symbol,
            timeframes,
        } => run_info(
            config.as_ref(),
            data_dir.as_ref(),
            symbol.as_deref(),
            timeframes.as_deref(),
        ),
    }
}

/// Fully resolved scan options: flag > config file > built-in default.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    pub data_dir: PathBuf,
    pub symbol: String,
    pub timeframes: Vec<String>,
    pub threshold: f64,
    pub output: PathBuf,
}

pub fn load_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, ExitCode> {
    match path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            FileConfigAdapter::from_file(path).map_err(|e| {
                eprintln!("error: {e}");
                ExitCode::from(&e)
            })
        }
        None => Ok(FileConfigAdapter::empty()),
    }
}

pub fn resolve_settings(
    config: &dyn ConfigPort,
    data_dir: Option<&PathBuf>,
    symbol: Option<&str>,
    timeframes: Option<&str>,
    threshold: Option<f64>,
    output: Option<&PathBuf>,
) -> Result<ScanSettings, RetscanError> {
    let data_dir = data_dir.cloned().unwrap_or_else(|| {
        config
            .get_string("data", "dir")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    let symbol = symbol
        .map(str::to_string)
        .or_else(|| config.get_string("data", "symbol"))
        .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());

    let timeframes_str = timeframes
        .map(str::to_string)
        .or_else(|| config.get_string("data", "timeframes"))
        .unwrap_or_else(|| DEFAULT_TIMEFRAMES.join(","));
    let timeframes =
        parse_timeframes(&timeframes_str).map_err(|e| RetscanError::ConfigInvalid {
            section: "data".into(),
            key: "timeframes".into(),
            reason: e.to_string(),
        })?;

    let threshold =
        threshold.unwrap_or_else(|| config.get_double("scan", "threshold", DEFAULT_THRESHOLD));

    let output = output.cloned().unwrap_or_else(|| {
        config
            .get_string("report", "output")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("dashboard.html"))
    });

    Ok(ScanSettings {
        data_dir,
        symbol,
        timeframes,
        threshold,
        output,
    })
}

fn scan_with_settings(settings: &ScanSettings) -> Result<Vec<TimeframeReport>, RetscanError> {
    let data_port = CsvAdapter::new(settings.data_dir.clone(), settings.symbol.as_str());
    run_scan(&data_port, &settings.timeframes, settings.threshold)
}

fn print_scan_summary(reports: &[TimeframeReport]) {
    for report in reports {
        eprintln!(
            "  {}: {} returns, {} outliers, mu={:.6}, sigma={:.6}",
            report.timeframe,
            report.points.len(),
            report.outliers().len(),
            report.stats.mu,
            report.stats.sigma,
        );
    }
}

fn run_scan_command(
    config_path: Option<&PathBuf>,
    data_dir: Option<&PathBuf>,
    output: Option<&PathBuf>,
    symbol: Option<&str>,
    timeframes: Option<&str>,
    threshold: Option<f64>,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let settings =
        match resolve_settings(&config, data_dir, symbol, timeframes, threshold, output) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

    eprintln!(
        "Scanning {} in {} ({} timeframes, threshold {})",
        settings.symbol,
        settings.data_dir.display(),
        settings.timeframes.len(),
        settings.threshold,
    );

    let reports = match scan_with_settings(&settings) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    print_scan_summary(&reports);

    let adapter = HtmlReportAdapter::new(&settings.symbol);
    let output_str = settings.output.display().to_string();
    if let Err(e) = adapter.write(&reports, &output_str) {
        eprintln!("error: failed to write dashboard: {e}");
        return (&e).into();
    }
    eprintln!("Dashboard written to: {output_str}");

    for report in &reports {
        match report.latest() {
            Some(latest) => eprintln!(
                "Latest Data Point ({}): {}, Return: {:.6}",
                report.timeframe,
                latest.timestamp.format("%Y-%m-%d %H:%M:%S"),
                latest.ret,
            ),
            None => eprintln!("Latest Data Point ({}): no data", report.timeframe),
        }
    }

    ExitCode::SUCCESS
}

fn run_outliers(
    config_path: Option<&PathBuf>,
    data_dir: Option<&PathBuf>,
    symbol: Option<&str>,
    timeframes: Option<&str>,
    threshold: Option<f64>,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let settings =
        match resolve_settings(&config, data_dir, symbol, timeframes, threshold, None) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

    let reports = match scan_with_settings(&settings) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    for report in &reports {
        let flagged = report.outliers();
        for point in &flagged {
            println!(
                "{}\t{}\t{:.6}\t{:.2}",
                report.timeframe,
                point.timestamp.format("%Y-%m-%d %H:%M:%S"),
                point.ret,
                point.z_score,
            );
        }
        eprintln!(
            "{} outliers found in {} ({} returns)",
            flagged.len(),
            report.timeframe,
            report.points.len(),
        );
    }

    ExitCode::SUCCESS
}

fn run_info(
    config_path: Option<&PathBuf>,
    data_dir: Option<&PathBuf>,
    symbol: Option<&str>,
    timeframes: Option<&str>,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let settings = match resolve_settings(&config, data_dir, symbol, timeframes, None, None) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let data_port = CsvAdapter::new(settings.data_dir.clone(), settings.symbol.as_str());

    for timeframe in &settings.timeframes {
        match data_port.data_range(timeframe) {
            Ok(Some((first, last, count))) => {
                println!("{timeframe}: {count} rows, {first} to {last}");
            }
            Ok(None) => {
                let e = RetscanError::NoData {
                    timeframe: timeframe.clone(),
                };
                eprintln!("error: {e}");
                return (&e).into();
            }
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        }
    }

    ExitCode::SUCCESS
}
