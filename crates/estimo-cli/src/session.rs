//! Session collaborators handed to every handler.
//!
//! The connection write half and the terminal prompt sit behind traits
//! so the handler set can be exercised in tests without a socket or a
//! TTY. The session is single-threaded by design: one frame is fully
//! processed (including any blocking prompt) before the next read.

use async_trait::async_trait;

use estimo_core::error::Result;

/// Write half of the duplex message transport.
#[async_trait]
pub trait Transport: Send {
    /// Write one outbound frame.
    async fn write_frame(&mut self, text: String) -> Result<()>;
    /// Best-effort close handshake.
    async fn close(&mut self) -> Result<()>;
}

/// Line-oriented terminal input.
#[async_trait]
pub trait Prompt: Send {
    /// Display `label` and block for one line of input. The line
    /// terminator is stripped; inner whitespace is preserved so input
    /// validation sees exactly what the user typed.
    async fn line(&mut self, label: &str) -> Result<String>;
    /// Display `label` and block for one integer.
    async fn integer(&mut self, label: &str) -> Result<i64>;
}

/// The client's side of one conversation: the connection write half
/// plus the operator's terminal.
pub struct Session {
    transport: Box<dyn Transport>,
    prompt: Box<dyn Prompt>,
}

impl Session {
    pub fn new(transport: Box<dyn Transport>, prompt: Box<dyn Prompt>) -> Self {
        Self { transport, prompt }
    }

    pub async fn write_frame(&mut self, text: String) -> Result<()> {
        self.transport.write_frame(text).await
    }

    pub async fn prompt_line(&mut self, label: &str) -> Result<String> {
        self.prompt.line(label).await
    }

    pub async fn prompt_integer(&mut self, label: &str) -> Result<i64> {
        self.prompt.integer(label).await
    }

    /// Attempt the close handshake; failures are only worth a debug
    /// line since the process is exiting anyway.
    pub async fn close(&mut self) {
        if let Err(e) = self.transport.close().await {
            tracing::debug!(error = %e, "close handshake failed");
        }
    }
}
