//! CLI integration tests.
//!
//! Tests cover:
//! - config loading and settings resolution (flag > config > default)
//! - timeframe list parsing errors surfacing as config errors
//! - the scan subcommand end-to-end with real CSV files on disk

mod common;

use common::*;
use retscan::adapters::file_config_adapter::FileConfigAdapter;
use retscan::cli::{self, Cli, Command};
use retscan::domain::error::RetscanError;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

// ExitCode doesn't implement PartialEq; inspect its Debug form instead.
fn assert_success(code: ExitCode) {
    let report = format!("{code:?}");
    assert!(report.contains("0"), "expected success exit code, got: {report}");
}

fn assert_failure(code: ExitCode) {
    let report = format!("{code:?}");
    assert!(!report.contains("ExitCode(0)"), "expected error exit code, got: {report}");
}

const SAMPLE_INI: &str = r#"
[data]
dir = /data/prices
symbol = EURUSD
timeframes = 4H,1D

[scan]
threshold = 2.0

[report]
output = out/dash.html
"#;

mod settings_resolution {
    use super::*;

    #[test]
    fn built_in_defaults() {
        let config = FileConfigAdapter::empty();
        let settings = cli::resolve_settings(&config, None, None, None, None, None).unwrap();

        assert_eq!(settings.data_dir, PathBuf::from("."));
        assert_eq!(settings.symbol, "XAUUSD");
        assert_eq!(settings.timeframes, vec!["1H", "1H_ALL"]);
        assert!((settings.threshold - 3.0).abs() < f64::EPSILON);
        assert_eq!(settings.output, PathBuf::from("dashboard.html"));
    }

    #[test]
    fn config_file_overrides_defaults() {
        let config = FileConfigAdapter::from_string(SAMPLE_INI).unwrap();
        let settings = cli::resolve_settings(&config, None, None, None, None, None).unwrap();

        assert_eq!(settings.data_dir, PathBuf::from("/data/prices"));
        assert_eq!(settings.symbol, "EURUSD");
        assert_eq!(settings.timeframes, vec!["4H", "1D"]);
        assert!((settings.threshold - 2.0).abs() < f64::EPSILON);
        assert_eq!(settings.output, PathBuf::from("out/dash.html"));
    }

    #[test]
    fn flags_override_config_file() {
        let config = FileConfigAdapter::from_string(SAMPLE_INI).unwrap();
        let data_dir = PathBuf::from("/elsewhere");
        let output = PathBuf::from("custom.html");
        let settings = cli::resolve_settings(
            &config,
            Some(&data_dir),
            Some("GBPUSD"),
            Some("1H"),
            Some(4.5),
            Some(&output),
        )
        .unwrap();

        assert_eq!(settings.data_dir, data_dir);
        assert_eq!(settings.symbol, "GBPUSD");
        assert_eq!(settings.timeframes, vec!["1H"]);
        assert!((settings.threshold - 4.5).abs() < f64::EPSILON);
        assert_eq!(settings.output, output);
    }

    #[test]
    fn bad_timeframe_list_is_a_config_error() {
        let config = FileConfigAdapter::empty();
        let err =
            cli::resolve_settings(&config, None, None, Some("1H,,1D"), None, None).unwrap_err();
        assert!(matches!(
            err,
            RetscanError::ConfigInvalid { key, .. } if key == "timeframes"
        ));
    }

    #[test]
    fn duplicate_timeframes_rejected() {
        let config = FileConfigAdapter::empty();
        let err =
            cli::resolve_settings(&config, None, None, Some("1H,1h"), None, None).unwrap_err();
        assert!(matches!(err, RetscanError::ConfigInvalid { .. }));
    }

    #[test]
    fn load_config_without_path_gives_empty_adapter() {
        let adapter = cli::load_config(None).unwrap();
        let settings = cli::resolve_settings(&adapter, None, None, None, None, None).unwrap();
        assert_eq!(settings.symbol, "XAUUSD");
    }

    #[test]
    fn load_config_reads_ini_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE_INI}").unwrap();

        let adapter = cli::load_config(Some(&file.path().to_path_buf())).unwrap();
        let settings = cli::resolve_settings(&adapter, None, None, None, None, None).unwrap();
        assert_eq!(settings.symbol, "EURUSD");
    }
}

mod scan_command {
    use super::*;

    #[test]
    fn scan_writes_dashboard_from_csv_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        write_csv_fixture(dir.path(), "1H", &[100.0, 101.0, 99.0, 150.0]);
        write_csv_fixture(dir.path(), "1H_ALL", &[50.0, 51.0, 50.5, 52.0]);
        let output = dir.path().join("dashboard.html");

        let cli = Cli {
            command: Command::Scan {
                config: None,
                data_dir: Some(dir.path().to_path_buf()),
                output: Some(output.clone()),
                symbol: None,
                timeframes: None,
                threshold: None,
            },
        };
        assert_success(cli::run(cli));

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("XAUUSD Return Outlier Detection"));
        assert!(html.contains("<h3>1H</h3>"));
        assert!(html.contains("<h3>1H_ALL</h3>"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn scan_fails_when_a_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        write_csv_fixture(dir.path(), "1H", &[100.0, 101.0]);
        let output = dir.path().join("dashboard.html");

        let cli = Cli {
            command: Command::Scan {
                config: None,
                data_dir: Some(dir.path().to_path_buf()),
                output: Some(output.clone()),
                symbol: None,
                timeframes: None, // needs 1H_ALL as well, which is absent
                threshold: None,
            },
        };
        assert_failure(cli::run(cli));
        assert!(!output.exists());
    }

    #[test]
    fn scan_respects_custom_symbol_and_timeframes() {
        let dir = tempfile::tempdir().unwrap();
        let mut content = String::from("Date,close\n");
        for (i, close) in [10.0, 11.0, 10.5].iter().enumerate() {
            content.push_str(&format!(
                "{},{close}\n",
                ts(i as u32).format("%Y-%m-%d %H:%M:%S")
            ));
        }
        std::fs::write(dir.path().join("EURUSD_MT5_4H.csv"), content).unwrap();
        let output = dir.path().join("dash.html");

        let cli = Cli {
            command: Command::Scan {
                config: None,
                data_dir: Some(dir.path().to_path_buf()),
                output: Some(output.clone()),
                symbol: Some("EURUSD".into()),
                timeframes: Some("4H".into()),
                threshold: Some(2.0),
            },
        };
        assert_success(cli::run(cli));

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("EURUSD Return Outlier Detection"));
        assert!(html.contains("<h3>4H</h3>"));
        assert!(html.contains("threshold: 2"));
    }

    #[test]
    fn outliers_command_runs_on_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let mut closes = vec![100.0];
        for i in 1..=40 {
            closes.push(100.0 + 0.01 * i as f64);
        }
        closes.push(250.0);
        write_csv_fixture(dir.path(), "1H", &closes);

        let cli = Cli {
            command: Command::Outliers {
                config: None,
                data_dir: Some(dir.path().to_path_buf()),
                symbol: None,
                timeframes: Some("1H".into()),
                threshold: None,
            },
        };
        assert_success(cli::run(cli));
    }

    #[test]
    fn info_command_reports_ranges() {
        let dir = tempfile::tempdir().unwrap();
        write_csv_fixture(dir.path(), "1H", &[100.0, 101.0, 102.0]);

        let cli = Cli {
            command: Command::Info {
                config: None,
                data_dir: Some(dir.path().to_path_buf()),
                symbol: None,
                timeframes: Some("1H".into()),
            },
        };
        assert_success(cli::run(cli));
    }

    #[test]
    fn info_fails_for_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        write_csv_fixture(dir.path(), "1H", &[]);

        let cli = Cli {
            command: Command::Info {
                config: None,
                data_dir: Some(dir.path().to_path_buf()),
                symbol: None,
                timeframes: Some("1H".into()),
            },
        };
        assert_failure(cli::run(cli));
    }

    #[test]
    fn info_fails_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let cli = Cli {
            command: Command::Info {
                config: None,
                data_dir: Some(dir.path().to_path_buf()),
                symbol: None,
                timeframes: Some("1H".into()),
            },
        };
        assert_failure(cli::run(cli));
    }
}
