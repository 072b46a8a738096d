//! msys Error Types
//!
//! Error conditions surfaced by the sys namespace and its host bridge.
//! Formatting is total; only the output sink and call dispatch can fail.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum SysError {
    // Output sink
    Io(String),

    // Host dispatch
    UnknownFunction(String),
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for SysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SysError::Io(msg) =>
                write!(f, "io error: {}", msg),

            SysError::UnknownFunction(name) =>
                write!(f, "unknown sys function: {}", name),
            SysError::ArityMismatch { name, expected, found } =>
                write!(f, "{} expects {} argument(s), got {}", name, expected, found),
        }
    }
}

impl std::error::Error for SysError {}

impl From<io::Error> for SysError {
    fn from(err: io::Error) -> Self {
        SysError::Io(err.to_string())
    }
}

pub type SysResult<T> = Result<T, SysError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_keeps_message() {
        let err: SysError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(err.to_string(), "io error: pipe closed");
    }

    #[test]
    fn arity_message_names_function() {
        let err = SysError::ArityMismatch { name: "sys.print".into(), expected: 1, found: 3 };
        assert_eq!(err.to_string(), "sys.print expects 1 argument(s), got 3");
    }
}
