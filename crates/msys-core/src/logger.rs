//! Line Logger
//!
//! `log` formats each argument with [`print`], joins them with one space and
//! writes the result as a single line to its sink. The whole line is rendered
//! before the sink lock is taken, so concurrent callers never interleave.

use std::io::{self, Write};
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::config::SysConfig;
use crate::error::SysResult;
use crate::format::print;
use crate::value::Value;

/// Logger writing one line per call to an injected sink
#[derive(Debug)]
pub struct Logger<W: Write> {
    sink: Mutex<W>,
    config: SysConfig,
}

impl<W: Write> Logger<W> {
    /// Create a logger over `sink` with default configuration
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, SysConfig::default())
    }

    pub fn with_config(sink: W, config: SysConfig) -> Self {
        Logger {
            sink: Mutex::new(sink),
            config,
        }
    }

    /// Emit `values` as one line
    pub fn log(&self, values: &[Value]) -> SysResult<()> {
        let mut line = render_line(values);
        line.push('\n');

        // A panic elsewhere cannot leave a half-written line behind, so a
        // poisoned sink is still usable.
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(line.as_bytes())?;
        if self.config.flush_each_line {
            sink.flush()?;
        }

        log::trace!("logged {} value(s), {} byte(s)", values.len(), line.len());
        Ok(())
    }

    pub fn config(&self) -> &SysConfig {
        &self.config
    }

    /// Consume the logger and hand back its sink
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Logger<io::Stdout> {
    /// Logger over the process standard output
    pub fn stdout() -> Self {
        Logger::new(io::stdout())
    }
}

/// The text `log` emits for `values`, without the trailing newline.
pub fn render_line(values: &[Value]) -> String {
    values.iter().map(print).collect::<Vec<_>>().join(" ")
}

static STDOUT: OnceLock<Logger<io::Stdout>> = OnceLock::new();

/// Emit `values` as one line on standard output.
pub fn log(values: &[Value]) -> SysResult<()> {
    STDOUT.get_or_init(Logger::stdout).log(values)
}

/// Variadic `sys.log` on standard output.
///
/// Each argument is converted with `Value::from`.
///
/// ```no_run
/// msys_core::sys_log!(1, "a", vec![1, 2]).unwrap(); // 1 a [1, 2]
/// ```
#[macro_export]
macro_rules! sys_log {
    ($($arg:expr),* $(,)?) => {
        $crate::logger::log(&[$($crate::value::Value::from($arg)),*])
    };
}

/// Variadic `sys.log` on a given [`Logger`].
#[macro_export]
macro_rules! sys_log_to {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(&[$($crate::value::Value::from($arg)),*])
    };
}
