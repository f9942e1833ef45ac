//! estimo core: transport-agnostic protocol primitives and error types.
//!
//! This crate defines the wire-level contracts of the estimation
//! protocol: the `{type, data}` envelope codec, the closed event
//! catalog with one payload schema per identifier, and the story-point
//! vote vocabulary. It carries no transport or runtime dependencies so
//! it can be reused by the CLI client, test harnesses, and tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `EstimoError`/`Result` so a
//! malformed server frame can never crash the client.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{EstimoError, Result};
