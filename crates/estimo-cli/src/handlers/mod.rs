//! Handler set: one handler per supported inbound event.
//!
//! Handlers keep no shared state. The conversational phase (idle in
//! room, voting, awaiting reveal) is implied entirely by which event
//! the server sent; the server is the sole arbiter of ordering and
//! the client never validates phase transitions locally.
//!
//! Payload decode failures are non-fatal everywhere: the event is
//! logged and skipped so a stray frame cannot end the session. Every
//! other handler error is session-fatal by design.

mod room;
mod voting;

pub use room::{CreateRoomHandler, RoomCapacityReachedHandler, RoomJoinUpdatesHandler};
pub use voting::{
    AskForVoteHandler, AwaitingAdminVoteStartHandler, BeginVotingPromptHandler,
    RevealVotesPromptHandler, VotesRevealedHandler, VotingCompletedHandler,
};

use serde::de::DeserializeOwned;

use estimo_core::protocol::envelope::Envelope;

/// Decode the typed payload, or log and return `None` so the caller
/// can skip the event without failing the session.
fn decode_or_skip<T: DeserializeOwned>(env: &Envelope) -> Option<T> {
    match env.payload() {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::warn!(event = %env.event_type, error = %e, "skipping event with malformed payload");
            None
        }
    }
}
