//! Outbound event senders.
//!
//! One constructor+send function per outbound identifier. Encode and
//! write failures are logged and swallowed: they are point failures
//! of a single send, and the read loop observes connection loss on
//! its own.

use serde::Serialize;

use estimo_core::protocol::envelope;
use estimo_core::protocol::events::{
    BeginVotingData, EventType, MemberVotedData, RevealVotesData, RoomJoinData,
};

use crate::session::Session;

/// Join the given room (sent on room creation and on explicit join).
pub async fn send_join_room(session: &mut Session, room_id: &str) {
    let payload = RoomJoinData {
        room_id: room_id.to_string(),
    };
    send_event(session, EventType::JoinRoom, &payload).await;
}

/// Start a voting round for the given ticket (admin only).
pub async fn send_begin_voting(session: &mut Session, ticket_id: &str) {
    let payload = BeginVotingData {
        ticket_id: ticket_id.to_string(),
    };
    send_event(session, EventType::BeginVoting, &payload).await;
}

/// Submit this member's vote. The vote token is validated by the
/// caller before it gets here.
pub async fn send_member_voted(session: &mut Session, ticket_id: &str, vote: &str) {
    let payload = MemberVotedData {
        ticket_id: ticket_id.to_string(),
        vote: vote.to_string(),
    };
    send_event(session, EventType::MemberVoted, &payload).await;
}

/// Ask the server to reveal all votes for the ticket (admin only).
pub async fn send_reveal_votes(session: &mut Session, ticket_id: &str) {
    let payload = RevealVotesData {
        ticket_id: ticket_id.to_string(),
    };
    send_event(session, EventType::RevealVotes, &payload).await;
}

async fn send_event<T: Serialize>(session: &mut Session, event: EventType, payload: &T) {
    let frame = match envelope::encode(event, payload) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::warn!(%event, error = %e, "unable to encode outbound event");
            return;
        }
    };
    if let Err(e) = session.write_frame(frame).await {
        tracing::warn!(%event, error = %e, "unable to send outbound event");
    }
}
