//! Readiness Flags Module
//!
//! Provides the symbolic readiness flags upper layers use when asking the
//! operating system whether a socket is ready for an operation, and selects
//! their underlying bit patterns from one of two multiplexing backends at
//! build time.
//!
//! ## Backend selection
//!
//! The cargo feature `event-poll` chooses the backend for the whole build:
//!
//! - **Event-polling backend** (`event-poll` enabled): flag values are the
//!   OS `poll(2)` event constants `POLLIN` and `POLLOUT`. Registration cost
//!   per wait call is proportional to the number of watched descriptors,
//!   not to the largest descriptor value. Unix only.
//! - **Bitmask-waiting backend** (default): flag values are private small
//!   integers; a higher layer translates them into `select(2)` descriptor
//!   sets. Simpler to port, but bounded by the `FD_SETSIZE` ceiling of the
//!   underlying primitive.
//!
//! The two backends are mutually exclusive. Flag *values* differ between
//! them and are passed directly into backend-specific OS calls, so there is
//! no runtime branch or fallback; only the names below are stable across
//! backends.

#[cfg(all(feature = "event-poll", not(unix)))]
compile_error!("the event-poll backend requires a Unix target");

/// Event-polling backend: bit patterns come from the OS poll constants.
#[cfg(feature = "event-poll")]
mod backend {
    pub(super) const READABLE_BITS: i16 = libc::POLLIN;
    pub(super) const WRITABLE_BITS: i16 = libc::POLLOUT;
}

/// Bitmask-waiting backend: private bit patterns, translated to descriptor
/// sets by the layer that invokes the wait primitive.
#[cfg(not(feature = "event-poll"))]
mod backend {
    pub(super) const READABLE_BITS: i16 = 1;
    pub(super) const WRITABLE_BITS: i16 = 2;
}

/// Readiness flags for socket wait operations.
///
/// The three named constants are the complete vocabulary: a socket is
/// waited on for reading, for writing, or for connection completion. Their
/// numeric values depend on the active backend, but their names and
/// meanings do not, so code built on top needs no modification when the
/// backend changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WaitFlags(i16);

impl WaitFlags {
    /// Wait for the socket to become readable.
    pub const READABLE: Self = Self(backend::READABLE_BITS);

    /// Wait for the socket to become writable.
    pub const WRITABLE: Self = Self(backend::WRITABLE_BITS);

    /// Wait for a non-blocking connect attempt to resolve.
    ///
    /// Always the union of [`READABLE`](Self::READABLE) and
    /// [`WRITABLE`](Self::WRITABLE): the OS reports a completed connect by
    /// signaling either condition, and which one fires does not indicate
    /// whether the connection succeeded. After a `CONNECTING` wait returns,
    /// the caller must probe the socket (for example via its pending error
    /// option) to learn the actual outcome.
    pub const CONNECTING: Self = Self(backend::READABLE_BITS | backend::WRITABLE_BITS);

    /// Create an empty flag set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a flag.
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    /// Check if any bit of `flag` is set.
    ///
    /// Intersection semantics are deliberate: a `CONNECTING` wait is
    /// satisfied by either underlying condition.
    pub const fn contains(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    /// Check if no flags are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the raw bit pattern for passing to the backend's OS primitive.
    pub const fn bits(self) -> i16 {
        self.0
    }
}

impl std::ops::BitOr for WaitFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for WaitFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
