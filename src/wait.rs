//! Readiness Wait Module
//!
//! Defines the interface boundary between the socket handle and flag
//! definitions and the OS multiplexing primitive that consumes them. Upper
//! layers depend on this trait, never on OS headers or on which backend a
//! build selected.

use std::time::Duration;

use crate::error::SocketError;
use crate::handle::SocketHandle;
use crate::waitfd::WaitFlags;

/// The readiness-wait primitive.
///
/// Implementations wrap the backend's OS multiplexing call (`poll(2)` for
/// the event-polling backend, `select(2)` for the bitmask-waiting backend)
/// and block until the socket is ready for the requested operations or the
/// timeout elapses.
///
/// ## Contract
///
/// - The invalid sentinel must be rejected with
///   [`SocketError::InvalidSocket`] *before* any OS primitive is invoked;
///   [`check_handle`] is the guard for this.
/// - A wait for [`WaitFlags::CONNECTING`] may wake on readability or
///   writability. The returned flags report which condition fired, not
///   whether the connection succeeded; the caller must probe the socket
///   separately to learn the outcome.
/// - A `timeout` of `None` blocks indefinitely. An elapsed timeout is
///   reported as [`SocketError::Timeout`].
#[cfg_attr(test, mockall::automock)]
pub trait WaitFd {
    /// Wait until `socket` is ready for the operations in `flags`.
    ///
    /// # Arguments
    ///
    /// * `socket` - Handle to wait on; must not be the invalid sentinel
    /// * `flags` - Readiness conditions to wait for
    /// * `timeout` - Maximum time to block, or `None` for no limit
    ///
    /// # Returns
    ///
    /// * `Ok(WaitFlags)` - The conditions that fired
    /// * `Err(SocketError)` - Rejected handle, elapsed timeout, or OS failure
    fn wait(
        &self,
        socket: SocketHandle,
        flags: WaitFlags,
        timeout: Option<Duration>,
    ) -> Result<WaitFlags, SocketError>;
}

/// Validity guard for wait implementations.
///
/// Rejects the invalid sentinel so that it never reaches an OS primitive.
///
/// # Returns
///
/// * `Ok(())` - The handle refers to an open socket
/// * `Err(SocketError::InvalidSocket)` - The handle is the sentinel
pub fn check_handle(socket: SocketHandle) -> Result<(), SocketError> {
    if socket.is_valid() {
        Ok(())
    } else {
        Err(SocketError::InvalidSocket)
    }
}
