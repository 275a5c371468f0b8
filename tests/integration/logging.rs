//! Integration tests for file logging.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory of the log files (default "./logs")
//!   Refer to `src/logging/mod.rs` for more details.
use cats_api::logging::{setup_logging, space_based_rolling, time_based_rolling};
use chrono::Utc;
use std::{env, fs, io::Write, path::Path, sync::Mutex, thread, time::Duration};
use tempfile::TempDir;

use lazy_static::lazy_static;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

lazy_static! {
    // The global logger can only be installed once per process.
    static ref LOG_DIR: TempDir = {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        env::remove_var("LOG_MAX_SIZE");
        env::set_var("LOG_MODE", "file");
        env::set_var("LOG_LEVEL", "debug");
        env::set_var("LOG_DATA_DIR", format!("{}/", temp_dir.path().display()));
        setup_logging().expect("Failed to set up file logging");
        temp_dir
    };
}

fn compute_final_log_path(base_file_path: &str, date_str: &str, max_size: u64) -> String {
    let time_based_path = time_based_rolling(base_file_path, date_str, 1);
    space_based_rolling(&time_based_path, base_file_path, date_str, max_size)
}

#[test]
fn test_invalid_log_max_size_is_rejected() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_DATA_DIR", temp_dir.path());
    env::set_var("LOG_MAX_SIZE", "invalid_value");

    let err = setup_logging().unwrap_err();
    env::remove_var("LOG_MAX_SIZE");

    assert!(err
        .to_string()
        .contains("LOG_MAX_SIZE must be a valid u64 if set"));
}

#[test]
fn test_setup_logging_file_mode_creates_log_file() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let log_dir = LOG_DIR.path();
    log::info!("file logging integration test");
    thread::sleep(Duration::from_millis(200));

    let date_str = Utc::now().format("%Y-%m-%d").to_string();
    let base = format!("{}/cats.log", log_dir.display());
    let expected_path = time_based_rolling(&base, &date_str, 1);

    assert!(
        Path::new(&expected_path).exists(),
        "Expected log file {} does not exist",
        expected_path
    );
}

/// An existing file over the size limit pushes logging to the next index.
#[test]
fn test_log_file_rolls_when_existing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let base_file = temp_dir.path().join("cats.log");
    let date_str = Utc::now().format("%Y-%m-%d").to_string();

    let first = time_based_rolling(base_file.to_str().unwrap(), &date_str, 1);
    fs::write(&first, "Existing log file").expect("Failed to create pre-existing log file");

    let rolled_path = compute_final_log_path(base_file.to_str().unwrap(), &date_str, 10);

    assert_ne!(rolled_path, first);
    assert!(rolled_path.contains("cats-"));
    assert!(rolled_path.ends_with(".2.log"));
}

#[test]
fn test_space_based_rolling_returns_original_when_under_max_size() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let base_file_path = format!("{}/test_cats.log", temp_dir.path().display());
    let date_str = Utc::now().format("%Y-%m-%d").to_string();
    let time_based_path = time_based_rolling(&base_file_path, &date_str, 1);

    let mut file = fs::File::create(&time_based_path).expect("Failed to create test log file");
    write!(file, "small file").expect("Failed to write to test log file");

    let rolled_file_path =
        space_based_rolling(&time_based_path, &base_file_path, &date_str, 10_000);

    assert_eq!(rolled_file_path, time_based_path);
}
