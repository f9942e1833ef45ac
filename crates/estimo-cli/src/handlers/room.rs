//! Room lifecycle handlers.

use async_trait::async_trait;

use estimo_core::error::Result;
use estimo_core::protocol::envelope::Envelope;
use estimo_core::protocol::events::{
    CreateRoomData, EventType, RoomCapacityReachedData, RoomJoinUpdatesData,
};

use crate::dispatch::EventHandler;
use crate::outbound;
use crate::session::Session;

use super::decode_or_skip;

/// The server assigned a freshly created room to this client; answer
/// with `JOIN_ROOM` immediately, no user interaction.
pub struct CreateRoomHandler;

#[async_trait]
impl EventHandler for CreateRoomHandler {
    fn event(&self) -> EventType {
        EventType::CreateRoom
    }

    async fn handle(&self, session: &mut Session, env: &Envelope) -> Result<()> {
        let Some(data) = decode_or_skip::<CreateRoomData>(env) else {
            return Ok(());
        };
        outbound::send_join_room(session, &data.room_id).await;
        Ok(())
    }
}

/// Broadcast shown whenever a member joins the room.
pub struct RoomJoinUpdatesHandler;

#[async_trait]
impl EventHandler for RoomJoinUpdatesHandler {
    fn event(&self) -> EventType {
        EventType::RoomJoinUpdates
    }

    async fn handle(&self, _session: &mut Session, env: &Envelope) -> Result<()> {
        let Some(data) = decode_or_skip::<RoomJoinUpdatesData>(env) else {
            return Ok(());
        };
        println!("{}", data.message);
        Ok(())
    }
}

/// The room is full; display the notice.
pub struct RoomCapacityReachedHandler;

#[async_trait]
impl EventHandler for RoomCapacityReachedHandler {
    fn event(&self) -> EventType {
        EventType::RoomCapacityReached
    }

    async fn handle(&self, _session: &mut Session, env: &Envelope) -> Result<()> {
        let Some(data) = decode_or_skip::<RoomCapacityReachedData>(env) else {
            return Ok(());
        };
        println!("{}", data.message);
        Ok(())
    }
}
