//! Wire envelope (JSON).
//!
//! Every protocol message is `{"type": "<IDENTIFIER>", "data": {...}}`.
//! The envelope stores `data` as `RawValue` so handlers parse their
//! typed payload lazily, after dispatch has resolved the identifier.
//!
//! A `decode` failure does not mean the frame is corrupt: the server
//! also sends plain status lines that are not envelopes at all, and
//! callers must display those verbatim.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{EstimoError, Result};

use super::events::EventType;

/// Decoded message envelope. Constructed per frame and consumed
/// immediately by the router; never persisted.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    /// Wire identifier (field name is `type` in JSON). Kept as a
    /// string so an unknown identifier can still be reported by name.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Payload, stored as raw JSON (lazy parsing).
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
}

impl Envelope {
    /// Parse the payload into the schema associated with the event
    /// type. Fails when `data` is absent or does not match `T`;
    /// handlers treat that as a benign, logged skip.
    pub fn payload<T: DeserializeOwned>(&self) -> Result<T> {
        let raw = self
            .data
            .as_ref()
            .ok_or_else(|| EstimoError::Envelope(format!("{} has no data", self.event_type)))?;
        serde_json::from_str(raw.get())
            .map_err(|e| EstimoError::Envelope(format!("{} payload: {e}", self.event_type)))
    }
}

#[derive(Serialize)]
struct OutgoingEnvelope<'a, T> {
    #[serde(rename = "type")]
    event_type: &'static str,
    data: &'a T,
}

/// Serialize an envelope for `event` around `payload`.
///
/// Payload schemas are statically known, so a failure here is a
/// defect; call sites log it and drop the send instead of crashing.
pub fn encode<T: Serialize>(event: EventType, payload: &T) -> Result<String> {
    serde_json::to_string(&OutgoingEnvelope {
        event_type: event.as_str(),
        data: payload,
    })
    .map_err(|e| EstimoError::Internal(format!("encode {event} failed: {e}")))
}

/// Decode one text frame into an envelope. An error means the frame
/// is not an envelope (e.g. a plain status line), not that the
/// session is broken.
pub fn decode(text: &str) -> Result<Envelope> {
    serde_json::from_str(text).map_err(|e| EstimoError::Envelope(e.to_string()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use std::collections::HashMap;

    use super::*;
    use crate::protocol::events::{CreateRoomData, MemberVotedData, Vote, VotesRevealedData};

    #[test]
    fn round_trip_create_room() {
        let payload = CreateRoomData {
            room_id: "R1".into(),
        };
        let frame = encode(EventType::CreateRoom, &payload).unwrap();
        let env = decode(&frame).unwrap();
        assert_eq!(env.event_type, "CREATE_ROOM");
        assert_eq!(env.payload::<CreateRoomData>().unwrap(), payload);
    }

    #[test]
    fn round_trip_member_voted() {
        let payload = MemberVotedData {
            ticket_id: "TCK-7".into(),
            vote: "13".into(),
        };
        let frame = encode(EventType::MemberVoted, &payload).unwrap();
        let env = decode(&frame).unwrap();
        assert_eq!(env.event_type, "MEMBER_VOTED");
        assert_eq!(env.payload::<MemberVotedData>().unwrap(), payload);
    }

    #[test]
    fn round_trip_votes_revealed_map() {
        let mut map = HashMap::new();
        map.insert(
            "m1".to_string(),
            Vote {
                value: "5".into(),
                member_id: "m1".into(),
                member_name: "Alice".into(),
            },
        );
        map.insert(
            "m2".to_string(),
            Vote {
                value: "3".into(),
                member_id: "m2".into(),
                member_name: "Bob".into(),
            },
        );
        let payload = VotesRevealedData {
            ticket_id: "TCK-7".into(),
            client_vote_choice_map: map,
        };
        let frame = encode(EventType::VotesRevealed, &payload).unwrap();
        let env = decode(&frame).unwrap();
        assert_eq!(env.payload::<VotesRevealedData>().unwrap(), payload);
    }

    #[test]
    fn plain_text_is_not_an_envelope() {
        let err = decode("member Alice joined the room").unwrap_err();
        assert!(matches!(err, EstimoError::Envelope(_)));
    }

    #[test]
    fn missing_payload_is_reported() {
        let env = decode(r#"{"type":"CREATE_ROOM"}"#).unwrap();
        let err = env.payload::<CreateRoomData>().unwrap_err();
        assert!(matches!(err, EstimoError::Envelope(_)));
    }

    #[test]
    fn mismatched_payload_is_reported() {
        let env = decode(r#"{"type":"CREATE_ROOM","data":{"unrelated":1}}"#).unwrap();
        assert!(env.payload::<CreateRoomData>().is_err());
    }
}
