//! Socket Compatibilization Layer
//!
//! Provides the lowest layer of a cross-platform socket abstraction: an
//! opaque socket handle type with a single invalid sentinel, a closed set
//! of symbolic readiness flags, and a build-time choice between two
//! readiness-multiplexing backends. Higher-level socket code (connect,
//! send, receive, accept) is written once against this vocabulary and runs
//! unmodified against either backend.
//!
//! ## Overview
//!
//! The `socket_compat` crate provides:
//! - **Socket handles**: [`SocketHandle`], a value type over the native
//!   descriptor, with [`SocketHandle::INVALID`] as the "no open socket"
//!   sentinel
//! - **Readiness flags**: [`WaitFlags::READABLE`], [`WaitFlags::WRITABLE`],
//!   and [`WaitFlags::CONNECTING`] (always their union)
//! - **Wait boundary**: the [`WaitFd`] trait, the signature of the OS
//!   multiplexing call that consumes these flags
//! - **Error taxonomy**: [`SocketError`], the uniform failure
//!   classification for layers built on top
//!
//! ## Architecture
//!
//! The backend is selected once per build by the `event-poll` cargo
//! feature. With the feature enabled, flag values are the OS `poll(2)`
//! event constants and wait cost scales with the number of watched
//! descriptors. Without it (the default), flag values are private small
//! integers translated by a higher layer into `select(2)` descriptor sets,
//! which is more portable but subject to the `FD_SETSIZE` ceiling. Flag
//! names and meanings are identical across backends; only the numeric
//! values differ, so no consuming code changes when the backend does.
//!
//! This crate performs no I/O and owns no resources: it never creates,
//! closes, or polls a socket. Those operations, along with socket options,
//! address handling, and name resolution, belong to the layers built on
//! top of it.

pub mod error;
pub mod handle;
pub mod wait;
pub mod waitfd;

pub use error::SocketError;
pub use handle::{RawSocketHandle, SocketHandle};
pub use wait::{check_handle, WaitFd};
pub use waitfd::WaitFlags;
