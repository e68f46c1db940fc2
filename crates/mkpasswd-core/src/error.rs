//! Error types for mkpasswd core operations.
//!
//! Every failure here is fatal by design: the program's sole value is its
//! entropy guarantee, so a randomness failure must surface immediately
//! rather than degrade into a weaker fallback. The CLI layer maps these to
//! diagnostics on stderr and a non-zero exit status.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for mkpasswd operations.
pub type Result<T> = std::result::Result<T, MkpasswdError>;

/// Core error type for mkpasswd operations.
#[derive(Debug, Error)]
pub enum MkpasswdError {
    /// The OS secure random device could not be opened
    #[error("unable to open random source {}: {source}", .device.display())]
    SourceUnavailable {
        device: PathBuf,
        source: io::Error,
    },

    /// A read from the random device errored or came up short
    #[error("failed to read from random source {}: {source}", .device.display())]
    ReadError {
        device: PathBuf,
        source: io::Error,
    },
}

impl MkpasswdError {
    /// The underlying OS error code, when the failure carries one.
    ///
    /// The CLI propagates this as the process exit status, matching the
    /// convention of exiting with `errno` when the random device cannot be
    /// opened.
    pub fn os_error_code(&self) -> Option<i32> {
        match self {
            MkpasswdError::SourceUnavailable { source, .. }
            | MkpasswdError::ReadError { source, .. } => source.raw_os_error(),
        }
    }

    /// Path of the random device involved in the failure.
    pub fn device(&self) -> &PathBuf {
        match self {
            MkpasswdError::SourceUnavailable { device, .. }
            | MkpasswdError::ReadError { device, .. } => device,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_the_device() {
        let err = MkpasswdError::SourceUnavailable {
            device: PathBuf::from("/dev/nonexistent"),
            source: io::Error::from_raw_os_error(2),
        };
        assert!(err.to_string().contains("/dev/nonexistent"));
    }

    #[test]
    fn test_os_error_code_propagates_errno() {
        let err = MkpasswdError::ReadError {
            device: PathBuf::from("/dev/random"),
            source: io::Error::from_raw_os_error(13),
        };
        assert_eq!(err.os_error_code(), Some(13));
    }

    #[test]
    fn test_os_error_code_absent_for_synthetic_errors() {
        let err = MkpasswdError::ReadError {
            device: PathBuf::from("/dev/random"),
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "short read"),
        };
        assert_eq!(err.os_error_code(), None);
    }
}
