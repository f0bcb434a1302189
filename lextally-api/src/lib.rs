//! lextally API - Scan orchestration layer
//!
//! Provides unified scanning interface, including:
//! - Scan flow orchestration
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (TallyError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `scan_source(source, &config)` API.

use lextally_log::{debug, info};

use lextally_core::{CharStream, FrequencyTable, Scanner};

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export error
pub mod error;
pub use error::{ErrorReport, TallyError};

// Re-export core types
pub use lextally_core;
pub use lextally_core::{ScanError, SourcePosition};

/// Scan source text with explicit configuration
///
/// This is the recommended API for library users.
pub fn scan_source(source: &str, config: &RunConfig) -> Result<FrequencyTable, TallyError> {
    info!(config.logger, "Starting scan");

    let mut stream = CharStream::new(source);
    let table = scan_stream(&mut stream, config)?;

    info!(config.logger, "Scan completed");
    Ok(table)
}

/// Scan raw bytes with explicit configuration
///
/// Invalid UTF-8 sequences are replaced with U+FFFD before scanning.
pub fn scan_bytes(bytes: &[u8], config: &RunConfig) -> Result<FrequencyTable, TallyError> {
    info!(config.logger, "Starting scan");

    let mut stream = CharStream::from_bytes(bytes, &config.logger);
    let table = scan_stream(&mut stream, config)?;

    info!(config.logger, "Scan completed");
    Ok(table)
}

fn scan_stream(stream: &mut CharStream, config: &RunConfig) -> Result<FrequencyTable, TallyError> {
    let scanner = Scanner::with_logger(stream, config.logger.clone())?;
    let table = scanner.into_table();

    debug!(
        config.logger,
        "Frequency table holds {} distinct identifiers, {} occurrences total",
        table.len(),
        table.total(),
    );
    Ok(table)
}

// ==================== Legacy API (using global config) ====================

/// Scan source text (uses global config)
///
/// # Panics
/// If global config is not initialized
pub fn scan(source: &str) -> Result<FrequencyTable, TallyError> {
    let config = get_config();
    scan_source(source, config)
}

/// Quick scan with default config (auto-initializes if needed)
pub fn quick_scan(source: &str) -> Result<FrequencyTable, TallyError> {
    if !is_initialized() {
        init_config(RunConfig::default());
    }
    scan(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_source_with_explicit_config() {
        let config = RunConfig::default();
        let table = scan_source("alpha beta alpha", &config).unwrap();

        assert_eq!(table.count("alpha"), 2);
        assert_eq!(table.count("beta"), 1);
    }

    #[test]
    fn test_scan_bytes_with_explicit_config() {
        let config = RunConfig::default();
        let table = scan_bytes(b"one two one", &config).unwrap();

        assert_eq!(table.count("one"), 2);
    }

    #[test]
    fn test_scan_source_error() {
        let config = RunConfig::default();
        let result = scan_source("'never closed", &config);

        assert!(result.is_err());
    }

    #[test]
    fn test_quick_scan() {
        let result = quick_scan("one two");
        assert!(result.is_ok());
    }
}
