//! End-to-end dispatch tests over recorded transport and scripted
//! prompt doubles. No socket, no TTY.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use estimo_cli::dispatch::{self, Dispatcher};
use estimo_cli::session::{Prompt, Session, Transport};
use estimo_core::error::{EstimoError, Result};
use estimo_core::protocol::envelope::{self, Envelope};
use estimo_core::protocol::events::{EventType, STORY_POINTS};

#[derive(Clone, Default)]
struct Recorder {
    frames: Arc<Mutex<Vec<String>>>,
    fail_writes: bool,
}

impl Recorder {
    fn sent(&self) -> Vec<Value> {
        self.frames
            .lock()
            .unwrap()
            .iter()
            .map(|f| serde_json::from_str(f).unwrap())
            .collect()
    }
}

struct RecordingTransport(Recorder);

#[async_trait]
impl Transport for RecordingTransport {
    async fn write_frame(&mut self, text: String) -> Result<()> {
        if self.0.fail_writes {
            return Err(EstimoError::Transport("write failed".into()));
        }
        self.0.frames.lock().unwrap().push(text);
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

struct ScriptedPrompt {
    lines: VecDeque<String>,
}

#[async_trait]
impl Prompt for ScriptedPrompt {
    async fn line(&mut self, _label: &str) -> Result<String> {
        self.lines
            .pop_front()
            .ok_or_else(|| EstimoError::Internal("prompt script exhausted".into()))
    }

    async fn integer(&mut self, label: &str) -> Result<i64> {
        let input = self.line(label).await?;
        input
            .trim()
            .parse()
            .map_err(|_| EstimoError::InvalidInput("please enter a valid number".into()))
    }
}

fn session_with(recorder: Recorder, script: &[&str]) -> Session {
    Session::new(
        Box::new(RecordingTransport(recorder)),
        Box::new(ScriptedPrompt {
            lines: script.iter().map(|s| (*s).to_string()).collect(),
        }),
    )
}

fn env(raw: &str) -> Envelope {
    envelope::decode(raw).unwrap()
}

fn dispatcher() -> Dispatcher {
    dispatch::register_handlers()
}

#[test]
fn every_inbound_identifier_has_a_handler() {
    let d = dispatcher();
    for ev in EventType::INBOUND {
        assert!(d.lookup(ev).is_some(), "{ev} must have a handler");
    }
    assert_eq!(d.registered_events().len(), EventType::INBOUND.len());
}

#[tokio::test]
async fn unsupported_event_names_the_offending_type() {
    let recorder = Recorder::default();
    let mut session = session_with(recorder.clone(), &[]);
    let err = dispatcher()
        .dispatch(&mut session, &env(r#"{"type":"SOMETHING_ELSE","data":{}}"#))
        .await
        .unwrap_err();
    match err {
        EstimoError::EventNotSupported(ty) => assert_eq!(ty, "SOMETHING_ELSE"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(recorder.sent().is_empty());
}

#[tokio::test]
async fn outbound_identifier_is_not_dispatchable() {
    let recorder = Recorder::default();
    let mut session = session_with(recorder.clone(), &[]);
    let err = dispatcher()
        .dispatch(
            &mut session,
            &env(r#"{"type":"JOIN_ROOM","data":{"room_id":"R1"}}"#),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EstimoError::EventNotSupported(ty) if ty == "JOIN_ROOM"));
}

#[tokio::test]
async fn create_room_chains_join_room_without_prompting() {
    let recorder = Recorder::default();
    // Empty script: any prompt would error out the handler.
    let mut session = session_with(recorder.clone(), &[]);
    dispatcher()
        .dispatch(
            &mut session,
            &env(r#"{"type":"CREATE_ROOM","data":{"room_id":"R1"}}"#),
        )
        .await
        .unwrap();
    assert_eq!(
        recorder.sent(),
        vec![json!({"type": "JOIN_ROOM", "data": {"room_id": "R1"}})]
    );
}

#[tokio::test]
async fn malformed_payload_is_non_fatal() {
    let recorder = Recorder::default();
    let mut session = session_with(recorder.clone(), &[]);
    let d = dispatcher();
    // Wrong shape.
    d.dispatch(&mut session, &env(r#"{"type":"CREATE_ROOM","data":{}}"#))
        .await
        .unwrap();
    // Missing data entirely.
    d.dispatch(&mut session, &env(r#"{"type":"CREATE_ROOM"}"#))
        .await
        .unwrap();
    assert!(recorder.sent().is_empty());
}

#[tokio::test]
async fn write_failure_is_swallowed() {
    let recorder = Recorder {
        fail_writes: true,
        ..Recorder::default()
    };
    let mut session = session_with(recorder.clone(), &[]);
    // The chained JOIN_ROOM send fails, but the handler still
    // succeeds: a write error is a point failure of that one send.
    dispatcher()
        .dispatch(
            &mut session,
            &env(r#"{"type":"CREATE_ROOM","data":{"room_id":"R1"}}"#),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn begin_voting_sends_the_entered_ticket() {
    let recorder = Recorder::default();
    let mut session = session_with(recorder.clone(), &["TCK-7"]);
    dispatcher()
        .dispatch(
            &mut session,
            &env(r#"{"type":"BEGIN_VOTING_PROMPT","data":{"message":"Pick a ticket."}}"#),
        )
        .await
        .unwrap();
    assert_eq!(
        recorder.sent(),
        vec![json!({"type": "BEGIN_VOTING", "data": {"ticket_id": "TCK-7"}})]
    );
}

#[tokio::test]
async fn begin_voting_rejects_an_empty_ticket() {
    for input in ["", "   "] {
        let recorder = Recorder::default();
        let mut session = session_with(recorder.clone(), &[input]);
        let err = dispatcher()
            .dispatch(
                &mut session,
                &env(r#"{"type":"BEGIN_VOTING_PROMPT","data":{"message":"Pick a ticket."}}"#),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EstimoError::InvalidInput(_)));
        assert!(recorder.sent().is_empty());
    }
}

#[tokio::test]
async fn ask_for_vote_accepts_every_story_point() {
    for token in STORY_POINTS {
        let recorder = Recorder::default();
        let mut session = session_with(recorder.clone(), &[token]);
        dispatcher()
            .dispatch(
                &mut session,
                &env(r#"{"type":"ASK_FOR_VOTE","data":{"ticket_id":"TCK-7"}}"#),
            )
            .await
            .unwrap();
        assert_eq!(
            recorder.sent(),
            vec![json!({"type": "MEMBER_VOTED", "data": {"ticket_id": "TCK-7", "vote": token}})]
        );
    }
}

#[tokio::test]
async fn ask_for_vote_rejects_everything_else() {
    for token in ["", "4", "1.5", "5 ", " 5", "five", "34"] {
        let recorder = Recorder::default();
        let mut session = session_with(recorder.clone(), &[token]);
        let err = dispatcher()
            .dispatch(
                &mut session,
                &env(r#"{"type":"ASK_FOR_VOTE","data":{"ticket_id":"TCK-7"}}"#),
            )
            .await
            .unwrap_err();
        assert!(
            matches!(err, EstimoError::InvalidInput(_)),
            "{token:?} must be rejected"
        );
        assert!(recorder.sent().is_empty());
    }
}

#[tokio::test]
async fn reveal_proceeds_only_on_y() {
    for input in ["Y", "y"] {
        let recorder = Recorder::default();
        let mut session = session_with(recorder.clone(), &[input]);
        dispatcher()
            .dispatch(
                &mut session,
                &env(r#"{"type":"REVEAL_VOTES_PROMPT","data":{"ticket_id":"TCK-7","message":"Reveal?"}}"#),
            )
            .await
            .unwrap();
        assert_eq!(
            recorder.sent(),
            vec![json!({"type": "REVEAL_VOTES", "data": {"ticket_id": "TCK-7"}})]
        );
    }
}

#[tokio::test]
async fn reveal_declines_on_anything_else() {
    // Input is not trimmed: "y " declines, by design.
    for input in ["y ", " y", "n", "", "yes"] {
        let recorder = Recorder::default();
        let mut session = session_with(recorder.clone(), &[input]);
        let err = dispatcher()
            .dispatch(
                &mut session,
                &env(r#"{"type":"REVEAL_VOTES_PROMPT","data":{"ticket_id":"TCK-7","message":"Reveal?"}}"#),
            )
            .await
            .unwrap_err();
        assert!(
            matches!(err, EstimoError::InvalidInput(_)),
            "{input:?} must decline"
        );
        assert!(recorder.sent().is_empty());
    }
}

#[tokio::test]
async fn display_events_send_nothing() {
    let frames = [
        r#"{"type":"ROOM_JOIN_UPDATES","data":{"message":"Alice joined."}}"#,
        r#"{"type":"ROOM_CAPACITY_REACHED","data":{"message":"Room is full."}}"#,
        r#"{"type":"VOTING_COMPLETED","data":{"ticket_id":"TCK-7","message":"All votes are in."}}"#,
        r#"{"type":"AWAITING_ADMIN_VOTE_START","data":{"message":"Waiting for the admin."}}"#,
    ];
    let recorder = Recorder::default();
    let mut session = session_with(recorder.clone(), &[]);
    let d = dispatcher();
    for frame in frames {
        d.dispatch(&mut session, &env(frame)).await.unwrap();
    }
    assert!(recorder.sent().is_empty());
}

#[tokio::test]
async fn votes_revealed_renders_without_sending() {
    let recorder = Recorder::default();
    let mut session = session_with(recorder.clone(), &[]);
    dispatcher()
        .dispatch(
            &mut session,
            &env(
                r#"{"type":"VOTES_REVEALED","data":{"ticket_id":"TCK-7","client_vote_choice_map":{
                    "m1":{"value":"5","member_id":"m1","member_name":"Alice"},
                    "m2":{"value":"3","member_id":"m2","member_name":"Bob"}}}}"#,
            ),
        )
        .await
        .unwrap();
    assert!(recorder.sent().is_empty());
}
