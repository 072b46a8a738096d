//! msys host crate: dispatch of `sys.*` calls made by compiled programs
//!
//! Compiled matcha code calls `sys.print(x)` and `sys.log(a, b, ...)` by
//! name. This crate resolves the name and hands the arguments to the core
//! formatter and logger. It contains no formatting logic of its own.

pub use msys_core::{Logger, SysError, SysResult, Value};

use std::io::{self, Write};

/// Handler type provided to hosts that route calls themselves. Receives the
/// function name and argument slice, returns the values the call produces.
pub type HostHandler = fn(&str, &[Value]) -> SysResult<Vec<Value>>;

/// Functions of the `sys` namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysFunction {
    Print,
    Log,
}

impl SysFunction {
    /// Resolve `print`, `log` or their `sys.`-qualified forms
    pub fn resolve(name: &str) -> SysResult<Self> {
        match name.strip_prefix("sys.").unwrap_or(name) {
            "print" => Ok(SysFunction::Print),
            "log" => Ok(SysFunction::Log),
            _ => Err(SysError::UnknownFunction(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SysFunction::Print => "sys.print",
            SysFunction::Log => "sys.log",
        }
    }

    /// Run the function. `emit` receives the arguments of a `log` call.
    fn invoke<F>(self, args: &[Value], emit: F) -> SysResult<Value>
    where
        F: FnOnce(&[Value]) -> SysResult<()>,
    {
        match self {
            SysFunction::Print => match args {
                [value] => Ok(Value::Str(msys_core::print(value))),
                _ => Err(SysError::ArityMismatch {
                    name: self.name().to_string(),
                    expected: 1,
                    found: args.len(),
                }),
            },
            SysFunction::Log => {
                emit(args)?;
                Ok(Value::Null)
            }
        }
    }
}

/// Owns the logger that `sys.log` calls write to.
#[derive(Debug)]
pub struct HostBridge<W: Write> {
    logger: Logger<W>,
}

impl HostBridge<io::Stdout> {
    pub fn stdout() -> Self {
        HostBridge::new(Logger::stdout())
    }
}

impl<W: Write> HostBridge<W> {
    pub fn new(logger: Logger<W>) -> Self {
        HostBridge { logger }
    }

    /// Dispatch a call by name. `print` returns the rendered text, `log`
    /// returns `Value::Null`.
    pub fn call(&self, name: &str, args: &[Value]) -> SysResult<Value> {
        let function = SysFunction::resolve(name)?;
        log::trace!("{} called with {} argument(s)", function.name(), args.len());
        function.invoke(args, |values| self.logger.log(values))
    }

    pub fn logger(&self) -> &Logger<W> {
        &self.logger
    }

    pub fn into_logger(self) -> Logger<W> {
        self.logger
    }
}

/// [`HostHandler`] backed by standard output. `print` yields its text,
/// `log` yields nothing.
pub fn stdout_handler(name: &str, args: &[Value]) -> SysResult<Vec<Value>> {
    let function = SysFunction::resolve(name)?;
    log::trace!("{} called with {} argument(s)", function.name(), args.len());
    let result = function.invoke(args, msys_core::log)?;
    Ok(match function {
        SysFunction::Print => vec![result],
        SysFunction::Log => Vec::new(),
    })
}
