//! Logging initialization for the catalog browser.
//!
//! The terminal belongs to the table UI while the app runs, so log output
//! goes to `./catalog_browser.log` in the current working directory.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, WriteLogger};

pub const LOG_FILENAME: &str = "./catalog_browser.log";

/// Installs a file logger at `log_path`. Logging stays off if the file cannot be created.
pub fn initialize(log_path: &Path) {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Some(file_logger) = create_file_logger(level, build_config(), log_path) {
        let _ = CombinedLogger::init(vec![file_logger]);
    }
}

fn build_config() -> Config {
    // HTTP stack internals are dropped entirely.
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("reqwest")
        .add_filter_ignore_str("rustls")
        .build()
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    log_path: &Path,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Record};
    use tempfile::TempDir;

    #[test]
    fn file_logger_writes_own_targets_and_skips_http_stack() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog_browser.log");
        let logger = create_file_logger(LevelFilter::Info, build_config(), &path).unwrap();

        logger.log(
            &Record::builder()
                .args(format_args!("Merged page 2/3"))
                .level(Level::Info)
                .target("catalog_core::update")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("connection pooled"))
                .level(Level::Info)
                .target("reqwest::connect")
                .build(),
        );
        logger.flush();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Merged page 2/3"));
        assert!(!written.contains("connection pooled"));
    }

    #[test]
    fn unwritable_location_disables_file_logging() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("catalog_browser.log");

        assert!(create_file_logger(LevelFilter::Info, build_config(), &path).is_none());
    }
}
