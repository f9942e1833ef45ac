//! Event catalog: the closed set of wire identifiers and the payload
//! schema associated with each one.
//!
//! Identifiers are partitioned by direction. Inbound events are sent
//! by the server and must have a handler registered in the dispatch
//! table; outbound events are produced by the client's senders. The
//! two vocabularies are disjoint, although payload shapes may repeat
//! (`CREATE_ROOM` and `JOIN_ROOM` both carry a room id).

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire identifier of a protocol event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    // Inbound (server -> client).
    CreateRoom,
    RoomJoinUpdates,
    RoomCapacityReached,
    BeginVotingPrompt,
    AskForVote,
    VotingCompleted,
    RevealVotesPrompt,
    VotesRevealed,
    AwaitingAdminVoteStart,
    // Outbound (client -> server).
    JoinRoom,
    BeginVoting,
    MemberVoted,
    RevealVotes,
}

impl EventType {
    /// String form used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::CreateRoom => "CREATE_ROOM",
            EventType::RoomJoinUpdates => "ROOM_JOIN_UPDATES",
            EventType::RoomCapacityReached => "ROOM_CAPACITY_REACHED",
            EventType::BeginVotingPrompt => "BEGIN_VOTING_PROMPT",
            EventType::AskForVote => "ASK_FOR_VOTE",
            EventType::VotingCompleted => "VOTING_COMPLETED",
            EventType::RevealVotesPrompt => "REVEAL_VOTES_PROMPT",
            EventType::VotesRevealed => "VOTES_REVEALED",
            EventType::AwaitingAdminVoteStart => "AWAITING_ADMIN_VOTE_START",
            EventType::JoinRoom => "JOIN_ROOM",
            EventType::BeginVoting => "BEGIN_VOTING",
            EventType::MemberVoted => "MEMBER_VOTED",
            EventType::RevealVotes => "REVEAL_VOTES",
        }
    }

    /// Parse a wire identifier. `None` means the identifier is not in
    /// the catalog at all.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "CREATE_ROOM" => EventType::CreateRoom,
            "ROOM_JOIN_UPDATES" => EventType::RoomJoinUpdates,
            "ROOM_CAPACITY_REACHED" => EventType::RoomCapacityReached,
            "BEGIN_VOTING_PROMPT" => EventType::BeginVotingPrompt,
            "ASK_FOR_VOTE" => EventType::AskForVote,
            "VOTING_COMPLETED" => EventType::VotingCompleted,
            "REVEAL_VOTES_PROMPT" => EventType::RevealVotesPrompt,
            "VOTES_REVEALED" => EventType::VotesRevealed,
            "AWAITING_ADMIN_VOTE_START" => EventType::AwaitingAdminVoteStart,
            "JOIN_ROOM" => EventType::JoinRoom,
            "BEGIN_VOTING" => EventType::BeginVoting,
            "MEMBER_VOTED" => EventType::MemberVoted,
            "REVEAL_VOTES" => EventType::RevealVotes,
            _ => return None,
        })
    }

    /// All identifiers the server may send. The dispatch table
    /// registers exactly one handler per entry.
    pub const INBOUND: [EventType; 9] = [
        EventType::CreateRoom,
        EventType::RoomJoinUpdates,
        EventType::RoomCapacityReached,
        EventType::BeginVotingPrompt,
        EventType::AskForVote,
        EventType::VotingCompleted,
        EventType::RevealVotesPrompt,
        EventType::VotesRevealed,
        EventType::AwaitingAdminVoteStart,
    ];
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permitted story-point vote tokens, in their fixed order.
pub const STORY_POINTS: [&str; 7] = ["1", "2", "3", "5", "8", "13", "21"];

/// True when `token` is one of the permitted story-point values.
/// Everything else, including the empty string and fractional values,
/// fails validation and must never be transmitted.
pub fn is_story_point(token: &str) -> bool {
    STORY_POINTS.contains(&token)
}

/// A member's submitted vote for the current ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub value: String,
    pub member_id: String,
    pub member_name: String,
}

/// Payload of `CREATE_ROOM`: the server assigned a room to this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoomData {
    pub room_id: String,
}

/// Payload of `JOIN_ROOM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomJoinData {
    pub room_id: String,
}

/// Payload of `ROOM_JOIN_UPDATES`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomJoinUpdatesData {
    pub message: String,
}

/// Payload of `ROOM_CAPACITY_REACHED`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCapacityReachedData {
    pub message: String,
}

/// Payload of `BEGIN_VOTING_PROMPT`: the server asks the room admin
/// to pick the next ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeginVotingPromptData {
    pub message: String,
}

/// Payload of `BEGIN_VOTING`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeginVotingData {
    pub ticket_id: String,
}

/// Payload of `ASK_FOR_VOTE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskForVoteData {
    pub ticket_id: String,
}

/// Payload of `MEMBER_VOTED`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberVotedData {
    pub ticket_id: String,
    pub vote: String,
}

/// Payload of `VOTING_COMPLETED`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingCompletedData {
    pub ticket_id: String,
    pub message: String,
}

/// Payload of `REVEAL_VOTES_PROMPT`: the server asks the room admin
/// to confirm the reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealVotesPromptData {
    pub ticket_id: String,
    pub message: String,
}

/// Payload of `REVEAL_VOTES`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealVotesData {
    pub ticket_id: String,
}

/// Payload of `VOTES_REVEALED`: every member's vote for the ticket,
/// keyed by member id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotesRevealedData {
    pub ticket_id: String,
    pub client_vote_choice_map: HashMap<String, Vote>,
}

/// Payload of `AWAITING_ADMIN_VOTE_START`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwaitingAdminVoteStartData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_round_trip() {
        let all = [
            EventType::CreateRoom,
            EventType::RoomJoinUpdates,
            EventType::RoomCapacityReached,
            EventType::BeginVotingPrompt,
            EventType::AskForVote,
            EventType::VotingCompleted,
            EventType::RevealVotesPrompt,
            EventType::VotesRevealed,
            EventType::AwaitingAdminVoteStart,
            EventType::JoinRoom,
            EventType::BeginVoting,
            EventType::MemberVoted,
            EventType::RevealVotes,
        ];
        for ev in all {
            assert_eq!(EventType::parse(ev.as_str()), Some(ev));
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        assert_eq!(EventType::parse("SOMETHING_ELSE"), None);
        assert_eq!(EventType::parse(""), None);
        assert_eq!(EventType::parse("create_room"), None);
    }

    #[test]
    fn inbound_set_excludes_outbound() {
        assert!(!EventType::INBOUND.contains(&EventType::JoinRoom));
        assert!(!EventType::INBOUND.contains(&EventType::BeginVoting));
        assert!(!EventType::INBOUND.contains(&EventType::MemberVoted));
        assert!(!EventType::INBOUND.contains(&EventType::RevealVotes));
        assert_eq!(EventType::INBOUND.len(), 9);
    }

    #[test]
    fn story_point_tokens() {
        for token in STORY_POINTS {
            assert!(is_story_point(token), "{token} must be accepted");
        }
        for token in ["", "0", "4", "1.5", "21 ", " 5", "five", "34"] {
            assert!(!is_story_point(token), "{token:?} must be rejected");
        }
    }
}
