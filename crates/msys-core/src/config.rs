//! msys Configuration
//!
//! Runtime knobs for the logger and its diagnostics.
//! The rendered text of a value is fixed; nothing here changes it.

use crate::diagnostics::LoggingConfig;

/// Logger configuration
#[derive(Debug, Clone)]
pub struct SysConfig {
    /// Flush the sink after every emitted line
    pub flush_each_line: bool,

    /// Internal diagnostics (stderr, `log` facade)
    pub diagnostics: LoggingConfig,
}

impl Default for SysConfig {
    fn default() -> Self {
        SysConfig {
            flush_each_line: true,
            diagnostics: LoggingConfig::default(),
        }
    }
}

impl SysConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }
}
