//! Socket Handle Module
//!
//! Provides the opaque socket handle type shared by every layer of the
//! socket stack, together with the single reserved sentinel value that
//! means "no open socket".

#[cfg(unix)]
use std::os::unix::io::RawFd;
#[cfg(windows)]
use std::os::windows::io::RawSocket;

/// Platform-native raw descriptor type underlying a [`SocketHandle`].
#[cfg(unix)]
pub type RawSocketHandle = RawFd;

/// Platform-native raw descriptor type underlying a [`SocketHandle`].
#[cfg(windows)]
pub type RawSocketHandle = RawSocket;

#[cfg(unix)]
const INVALID_RAW: RawSocketHandle = -1;
#[cfg(windows)]
const INVALID_RAW: RawSocketHandle = RawSocketHandle::MAX;

/// Opaque handle to an OS-level socket.
///
/// A `SocketHandle` is a plain value wrapper around the platform's raw
/// descriptor. It carries no ownership: this crate never creates, closes,
/// or duplicates the underlying socket. Handles are passed by value; when
/// a creation call must hand a new handle back to its caller, it writes
/// through a `&mut SocketHandle` that the caller initialized with
/// [`SocketHandle::invalid`].
///
/// Equality is integer equality on the raw descriptor. Exactly one value,
/// [`SocketHandle::INVALID`], is reserved to mean "no open socket"; every
/// other value is meaningful only to the operating system. Callers must
/// check [`is_valid`](SocketHandle::is_valid) before passing a handle to
/// any OS primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SocketHandle(RawSocketHandle);

impl SocketHandle {
    /// Sentinel value denoting an invalid or absent socket.
    ///
    /// On Unix this is `-1`, the value a failed `socket()` call returns;
    /// real descriptors are always non-negative, so the sentinel can never
    /// collide with a live socket.
    pub const INVALID: SocketHandle = SocketHandle(INVALID_RAW);

    /// Wrap a raw descriptor obtained from an OS socket-creation call.
    pub const fn from_raw(raw: RawSocketHandle) -> Self {
        Self(raw)
    }

    /// Create a handle initialized to the invalid sentinel.
    ///
    /// Use this to initialize an out-parameter before a creation call
    /// assigns a real descriptor into it.
    pub const fn invalid() -> Self {
        Self::INVALID
    }

    /// Get the raw descriptor for passing to an OS primitive.
    pub const fn raw(self) -> RawSocketHandle {
        self.0
    }

    /// Check whether this handle refers to an open socket.
    ///
    /// Returns `false` only for the [`INVALID`](SocketHandle::INVALID)
    /// sentinel.
    pub const fn is_valid(self) -> bool {
        self.0 != INVALID_RAW
    }
}

impl From<RawSocketHandle> for SocketHandle {
    fn from(raw: RawSocketHandle) -> Self {
        Self::from_raw(raw)
    }
}

impl std::fmt::Display for SocketHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "socket {}", self.0)
        } else {
            write!(f, "invalid socket")
        }
    }
}
