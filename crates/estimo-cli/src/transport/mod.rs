//! Transport layer (WebSocket client).
//!
//! `handshake` collects the pre-connection input and builds the
//! endpoint URL; `ws` owns the connection and the read loop that
//! feeds the dispatcher.

pub mod handshake;
pub mod ws;
