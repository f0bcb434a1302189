//! API 层配置
//!
//! 包含扫描配置 RunConfig 和全局单例（供 CLI 使用）

use lextally_log::Logger;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Scan configuration
#[derive(Clone)]
pub struct RunConfig {
    /// Whether to echo the source listing before scanning
    pub show_source: bool,
    /// Whether to dump the frequency table as JSON after the report
    pub dump_json: bool,
    /// Logger
    pub logger: Arc<Logger>,
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("show_source", &self.show_source)
            .field("dump_json", &self.dump_json)
            .finish()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            show_source: false,
            dump_json: false,
            logger: Logger::noop(),
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
