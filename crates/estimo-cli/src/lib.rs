//! estimo client library entry.
//!
//! This crate wires the transport, dispatch table, handler set, and
//! outbound senders into the interactive estimation client. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod config;
pub mod dispatch;
pub mod handlers;
pub mod outbound;
pub mod prompt;
pub mod render;
pub mod session;
pub mod transport;
