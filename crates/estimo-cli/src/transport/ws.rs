//! WebSocket connection and read loop.
//!
//! Responsibilities:
//! - Connect to the server endpoint produced by the handshake.
//! - Read loop: one frame fully processed before the next read.
//! - Plain text frames that are not envelopes are displayed verbatim.
//! - Close frames and read errors are classified and logged with
//!   distinct reasons; each ends the loop cleanly.
//!
//! A dispatch error is session-fatal and is the only way the loop
//! returns `Err`.

use async_trait::async_trait;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use url::Url;

use estimo_core::error::{EstimoError, Result};
use estimo_core::protocol::envelope;

use crate::dispatch::Dispatcher;
use crate::session::{Session, Transport};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Read half of the connection, consumed by `read_loop`.
pub type WsReader = SplitStream<WsStream>;

/// Write half of the connection; the session's `Transport`.
pub struct WsTransport {
    sink: SplitSink<WsStream, Message>,
}

#[async_trait]
impl Transport for WsTransport {
    async fn write_frame(&mut self, text: String) -> Result<()> {
        self.sink
            .send(Message::Text(text.into()))
            .await
            .map_err(|e| EstimoError::Transport(e.to_string()))
    }

    async fn close(&mut self) -> Result<()> {
        self.sink
            .send(Message::Close(Some(CloseFrame {
                code: CloseCode::Normal,
                reason: "client exiting".into(),
            })))
            .await
            .map_err(|e| EstimoError::Transport(e.to_string()))
    }
}

/// Open the connection and split it into the session write half and
/// the read half.
pub async fn connect(endpoint: &Url) -> Result<(WsTransport, WsReader)> {
    let (stream, _response) = connect_async(endpoint.as_str())
        .await
        .map_err(|e| EstimoError::Transport(format!("connect to {endpoint} failed: {e}")))?;
    let (sink, reader) = stream.split();
    Ok((WsTransport { sink }, reader))
}

/// Read frames until the server closes the connection or a handler
/// reports a session-fatal error.
pub async fn read_loop(
    reader: &mut WsReader,
    session: &mut Session,
    dispatcher: &Dispatcher,
) -> Result<()> {
    while let Some(next) = reader.next().await {
        let msg = match next {
            Ok(msg) => msg,
            Err(e) => {
                tracing::warn!(error = %e, "server closed the connection abruptly, exiting");
                return Ok(());
            }
        };

        match msg {
            Message::Text(text) => match envelope::decode(text.as_str()) {
                Ok(env) => dispatcher.dispatch(session, &env).await?,
                // Not an envelope: a plain status line from the
                // server, shown as-is.
                Err(_) => println!("{text}"),
            },
            Message::Close(frame) => {
                log_close(frame.as_ref());
                return Ok(());
            }
            // Pings are answered by the library; nothing to do.
            Message::Ping(_) | Message::Pong(_) => {}
            Message::Binary(_) => {
                tracing::debug!("ignoring unexpected binary frame");
            }
            Message::Frame(_) => {}
        }
    }

    tracing::info!("server closed the connection, exiting");
    Ok(())
}

fn log_close(frame: Option<&CloseFrame>) {
    match frame {
        Some(f) if f.code == CloseCode::Normal || f.code == CloseCode::Away => {
            tracing::info!(code = %f.code, "server closed the connection, exiting");
        }
        Some(f) => {
            tracing::warn!(code = %f.code, reason = %f.reason, "server closed the connection abnormally, exiting");
        }
        None => {
            tracing::warn!("server closed the connection without a close code, exiting");
        }
    }
}
