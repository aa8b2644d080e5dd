use std::io;

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}

/// Result type for TUI operations
pub type TuiResult<T> = Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: TuiError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(err, TuiError::Terminal(_)));
        assert_eq!(err.to_string(), "Terminal I/O failed: gone");
    }
}
