//! msys - Core Library
//!
//! Value printing and line logging behind the `sys` namespace that compiled
//! matcha programs call into.

pub mod error;
pub mod config;
pub mod diagnostics;
pub mod value;
pub mod format;
pub mod logger;

// Re-export commonly used types
pub use error::{SysError, SysResult};
pub use config::SysConfig;
pub use diagnostics::{init_logging, LoggingConfig};
pub use value::{Shape, Value};
pub use format::print;
pub use logger::{log, render_line, Logger};

/// The `sys` namespace: `sys::print` and `sys::log`.
pub mod sys {
	pub use crate::format::print;
	pub use crate::logger::log;
}
