//! Voting round handlers: ticket selection, vote casting, reveal.

use async_trait::async_trait;

use estimo_core::error::{EstimoError, Result};
use estimo_core::protocol::envelope::Envelope;
use estimo_core::protocol::events::{
    is_story_point, AskForVoteData, AwaitingAdminVoteStartData, BeginVotingPromptData, EventType,
    RevealVotesPromptData, VotesRevealedData, VotingCompletedData, STORY_POINTS,
};

use crate::dispatch::EventHandler;
use crate::outbound;
use crate::render;
use crate::session::Session;

use super::decode_or_skip;

/// The server asks the room admin which ticket to vote on next.
/// An empty ticket id is invalid input and ends the session.
pub struct BeginVotingPromptHandler;

#[async_trait]
impl EventHandler for BeginVotingPromptHandler {
    fn event(&self) -> EventType {
        EventType::BeginVotingPrompt
    }

    async fn handle(&self, session: &mut Session, env: &Envelope) -> Result<()> {
        let Some(data) = decode_or_skip::<BeginVotingPromptData>(env) else {
            return Ok(());
        };
        println!("{}", data.message);
        let ticket = session
            .prompt_line("Enter the ticket id to begin voting:")
            .await?;
        let ticket = ticket.trim();
        if ticket.is_empty() {
            return Err(EstimoError::InvalidInput(
                "ticket id must not be empty".into(),
            ));
        }
        outbound::send_begin_voting(session, ticket).await;
        Ok(())
    }
}

/// The server asks this member to cast a vote for the current ticket.
/// Only the seven story-point tokens are accepted; anything else is
/// invalid input and ends the session.
pub struct AskForVoteHandler;

#[async_trait]
impl EventHandler for AskForVoteHandler {
    fn event(&self) -> EventType {
        EventType::AskForVote
    }

    async fn handle(&self, session: &mut Session, env: &Envelope) -> Result<()> {
        let Some(data) = decode_or_skip::<AskForVoteData>(env) else {
            return Ok(());
        };
        let label = format!(
            "Cast your vote for ticket {} ({}):",
            data.ticket_id,
            STORY_POINTS.join(", ")
        );
        let vote = session.prompt_line(&label).await?;
        if !is_story_point(&vote) {
            return Err(EstimoError::InvalidInput(format!(
                "{vote:?} is not a valid story-point value"
            )));
        }
        outbound::send_member_voted(session, &data.ticket_id, &vote).await;
        Ok(())
    }
}

/// Everyone has voted; display the notice.
pub struct VotingCompletedHandler;

#[async_trait]
impl EventHandler for VotingCompletedHandler {
    fn event(&self) -> EventType {
        EventType::VotingCompleted
    }

    async fn handle(&self, _session: &mut Session, env: &Envelope) -> Result<()> {
        let Some(data) = decode_or_skip::<VotingCompletedData>(env) else {
            return Ok(());
        };
        println!("{}", data.message);
        Ok(())
    }
}

/// The server asks the room admin to confirm the reveal. Only input
/// case-insensitively equal to exactly "Y" proceeds; any other input
/// (including trailing whitespace) is a decline and ends the session
/// without sending anything.
pub struct RevealVotesPromptHandler;

#[async_trait]
impl EventHandler for RevealVotesPromptHandler {
    fn event(&self) -> EventType {
        EventType::RevealVotesPrompt
    }

    async fn handle(&self, session: &mut Session, env: &Envelope) -> Result<()> {
        let Some(data) = decode_or_skip::<RevealVotesPromptData>(env) else {
            return Ok(());
        };
        println!("{}", data.message);
        let confirmation = session
            .prompt_line("Type Y to reveal the votes:")
            .await?;
        if !confirmation.eq_ignore_ascii_case("Y") {
            return Err(EstimoError::InvalidInput(format!(
                "reveal declined for ticket {}",
                data.ticket_id
            )));
        }
        outbound::send_reveal_votes(session, &data.ticket_id).await;
        Ok(())
    }
}

/// Final tally for the ticket: group votes by value and render the
/// table.
pub struct VotesRevealedHandler;

#[async_trait]
impl EventHandler for VotesRevealedHandler {
    fn event(&self) -> EventType {
        EventType::VotesRevealed
    }

    async fn handle(&self, _session: &mut Session, env: &Envelope) -> Result<()> {
        let Some(data) = decode_or_skip::<VotesRevealedData>(env) else {
            return Ok(());
        };
        println!("Votes for ticket {}:", data.ticket_id);
        let rows = render::vote_rows(&data.client_vote_choice_map);
        render::render_rows(["VOTE", "MEMBER", "COUNT"], &rows);
        Ok(())
    }
}

/// Non-admin members see this while the admin picks the next ticket.
pub struct AwaitingAdminVoteStartHandler;

#[async_trait]
impl EventHandler for AwaitingAdminVoteStartHandler {
    fn event(&self) -> EventType {
        EventType::AwaitingAdminVoteStart
    }

    async fn handle(&self, _session: &mut Session, env: &Envelope) -> Result<()> {
        let Some(data) = decode_or_skip::<AwaitingAdminVoteStartData>(env) else {
            return Ok(());
        };
        println!("{}", data.message);
        Ok(())
    }
}
