// In memory implementation of the EventRepository port.
//
// Purpose
// - Support service tests and local development without a database.
//
// Responsibilities
// - Store aggregates per event id in memory.
// - Offer an offline toggle so failure paths can be exercised in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::subscriptions::core::event::{Event, EventId};
use crate::modules::subscriptions::ports::{EventRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryEventRepository {
    inner: RwLock<HashMap<EventId, Event>>,
    offline: bool,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Backend("Repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn generate_id(&self) -> Result<EventId, RepositoryError> {
        self.ensure_online()?;
        Ok(Uuid::now_v7())
    }

    async fn find_by_id(&self, event_id: EventId) -> Result<Option<Event>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard.get(&event_id).cloned())
    }

    async fn save(&self, event: &Event) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        guard.insert(event.id(), event.clone());
        Ok(())
    }
}
