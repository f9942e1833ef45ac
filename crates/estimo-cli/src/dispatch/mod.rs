//! Dispatch table and event router.
//!
//! `register_handlers` builds the table once at startup; the read
//! loop then routes every decoded envelope through it.

pub mod dispatcher;

pub use dispatcher::{Dispatcher, EventHandler};

use crate::handlers::{
    AskForVoteHandler, AwaitingAdminVoteStartHandler, BeginVotingPromptHandler,
    CreateRoomHandler, RevealVotesPromptHandler, RoomCapacityReachedHandler,
    RoomJoinUpdatesHandler, VotesRevealedHandler, VotingCompletedHandler,
};

/// Build the dispatch table with exactly one handler per supported
/// inbound identifier.
pub fn register_handlers() -> Dispatcher {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(Box::new(CreateRoomHandler));
    dispatcher.register(Box::new(RoomJoinUpdatesHandler));
    dispatcher.register(Box::new(RoomCapacityReachedHandler));
    dispatcher.register(Box::new(BeginVotingPromptHandler));
    dispatcher.register(Box::new(AskForVoteHandler));
    dispatcher.register(Box::new(VotingCompletedHandler));
    dispatcher.register(Box::new(RevealVotesPromptHandler));
    dispatcher.register(Box::new(VotesRevealedHandler));
    dispatcher.register(Box::new(AwaitingAdminVoteStartHandler));
    dispatcher
}
