use std::collections::HashMap;

use async_trait::async_trait;

use estimo_core::error::{EstimoError, Result};
use estimo_core::protocol::envelope::Envelope;
use estimo_core::protocol::events::EventType;

use crate::session::Session;

/// One handler per supported inbound event identifier.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// The identifier this handler is registered under.
    fn event(&self) -> EventType;
    /// Process one envelope. A payload that fails to decode is logged
    /// and skipped (return `Ok`); any returned error is session-fatal
    /// and terminates the read loop.
    async fn handle(&self, session: &mut Session, env: &Envelope) -> Result<()>;
}

/// Lookup table from inbound identifier to handler.
///
/// Built once before the read loop starts and read-only afterwards;
/// registering the same identifier twice overwrites the earlier
/// handler.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<EventType, Box<dyn EventHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, handler: Box<dyn EventHandler>) {
        self.handlers.insert(handler.event(), handler);
    }

    pub fn lookup(&self, event: EventType) -> Option<&dyn EventHandler> {
        self.handlers.get(&event).map(|h| h.as_ref())
    }

    pub fn registered_events(&self) -> Vec<EventType> {
        self.handlers.keys().copied().collect()
    }

    /// Route one decoded envelope to its handler.
    ///
    /// An identifier outside the catalog, or inside it with no
    /// registered handler, is reported by name as
    /// `EventNotSupported`; no handler runs in that case. Handler
    /// errors propagate unchanged.
    pub async fn dispatch(&self, session: &mut Session, env: &Envelope) -> Result<()> {
        let handler = EventType::parse(&env.event_type)
            .and_then(|ev| self.lookup(ev))
            .ok_or_else(|| EstimoError::EventNotSupported(env.event_type.clone()))?;
        handler.handle(session, env).await
    }
}
