//! Socket Error Module
//!
//! Provides the uniform error taxonomy the layers built on top of the
//! socket handle and readiness flags report. The handle and flag
//! definitions themselves cannot fail; this taxonomy exists so that every
//! consumer of them classifies failures the same way.

use std::io;

/// Socket operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketError {
    /// Operation attempted on the invalid-socket sentinel
    InvalidSocket,
    /// Non-blocking operation has no data or capacity yet (not a true failure)
    WouldBlock,
    /// A bounded wait elapsed with no readiness
    Timeout,
    /// OS-reported failure (propagated error number)
    Os(i32),
    /// I/O error with no OS error number
    IoError(String),
}

impl From<io::Error> for SocketError {
    fn from(err: io::Error) -> Self {
        use std::io::ErrorKind;
        match err.kind() {
            ErrorKind::WouldBlock => SocketError::WouldBlock,
            ErrorKind::TimedOut => SocketError::Timeout,
            _ => match err.raw_os_error() {
                Some(errno) => SocketError::Os(errno),
                None => SocketError::IoError(err.to_string()),
            },
        }
    }
}

impl std::fmt::Display for SocketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocketError::InvalidSocket => write!(f, "invalid socket"),
            SocketError::WouldBlock => write!(f, "operation would block"),
            SocketError::Timeout => write!(f, "operation timed out"),
            SocketError::Os(errno) => write!(f, "OS error {}", errno),
            SocketError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for SocketError {}
