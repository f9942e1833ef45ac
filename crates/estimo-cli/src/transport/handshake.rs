//! Pre-connection handshake: action selection and endpoint
//! construction.
//!
//! The server learns everything it needs from the connection query
//! string (`action`, `name`, and either `room_id` or
//! `max_room_capacity`); the first in-room exchange then happens over
//! envelopes.

use url::Url;

use estimo_core::error::{EstimoError, Result};

use crate::config::ClientConfig;
use crate::session::Prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    CreateRoom,
    JoinRoom,
}

impl UserAction {
    pub fn as_str(self) -> &'static str {
        match self {
            UserAction::CreateRoom => "CREATE_ROOM",
            UserAction::JoinRoom => "JOIN_ROOM",
        }
    }
}

/// Everything needed to establish the session: the full endpoint and,
/// for an explicit join, the room id to announce right after
/// connecting.
#[derive(Debug)]
pub struct HandshakePlan {
    pub endpoint: Url,
    pub join_room: Option<String>,
}

/// Ask which action to perform. `None` means the choice was not
/// recognized and the program should exit.
pub async fn prompt_action(prompt: &mut dyn Prompt) -> Result<Option<UserAction>> {
    let choice = prompt
        .line("Choose an option:\n\n    [1] Create a room\n    [2] Join a room\n\nType your choice (1 or 2):")
        .await?;
    Ok(match choice.trim() {
        "1" => Some(UserAction::CreateRoom),
        "2" => Some(UserAction::JoinRoom),
        _ => None,
    })
}

/// Collect the remaining input for `action` and build the endpoint.
pub async fn plan(
    cfg: &ClientConfig,
    action: UserAction,
    prompt: &mut dyn Prompt,
) -> Result<HandshakePlan> {
    let mut endpoint = cfg.server.endpoint()?;

    match action {
        UserAction::JoinRoom => {
            let room_id = prompt
                .line("Enter the room id you would like to join:")
                .await?;
            let room_id = room_id.trim().to_string();
            let name = prompt_member_name(prompt).await?;
            endpoint
                .query_pairs_mut()
                .append_pair("action", action.as_str())
                .append_pair("name", &name)
                .append_pair("room_id", &room_id);
            Ok(HandshakePlan {
                endpoint,
                join_room: Some(room_id),
            })
        }
        UserAction::CreateRoom => {
            let capacity = prompt
                .integer("Enter the room max capacity:")
                .await
                .map_err(|_| {
                    EstimoError::InvalidInput(
                        "room max capacity must be a numerical value".into(),
                    )
                })?;
            let name = prompt_member_name(prompt).await?;
            endpoint
                .query_pairs_mut()
                .append_pair("action", action.as_str())
                .append_pair("name", &name)
                .append_pair("max_room_capacity", &capacity.to_string());
            Ok(HandshakePlan {
                endpoint,
                join_room: None,
            })
        }
    }
}

async fn prompt_member_name(prompt: &mut dyn Prompt) -> Result<String> {
    let name = prompt.line("Enter your name:").await?;
    let name = name.trim();
    if name.is_empty() {
        return Err(EstimoError::InvalidInput(
            "empty member name is not allowed".into(),
        ));
    }
    Ok(name.to_string())
}
