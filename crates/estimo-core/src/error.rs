//! Shared error type across estimo crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, EstimoError>;

/// Unified error type used by the core and the client.
///
/// The variants mirror the session error taxonomy: an unsupported
/// event type and invalid user input are session-fatal, an
/// `Envelope` error means the frame is not an envelope at all and
/// callers display it verbatim, and transport errors are classified
/// by the read loop before it terminates.
#[derive(Debug, Error)]
pub enum EstimoError {
    /// The received event identifier has no registered handler.
    #[error("{0} event type is not supported")]
    EventNotSupported(String),
    /// The frame (or its payload) did not deserialize as an envelope.
    #[error("malformed envelope: {0}")]
    Envelope(String),
    /// User input failed validation (empty ticket id, bad vote token,
    /// declined reveal confirmation).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Connection-level failure.
    #[error("transport: {0}")]
    Transport(String),
    /// Configuration file problem.
    #[error("config: {0}")]
    Config(String),
    /// Anything else (serialization of a known payload, closed stdin).
    #[error("internal: {0}")]
    Internal(String),
}
