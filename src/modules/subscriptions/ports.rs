// Ports define what the subscriptions module needs from the outside world,
// without implementing it.
//
// Purpose
// - Describe the persistence collaborator as a trait (EventRepository).
//
// Responsibilities
// - Keep the core independent of any database by coding against the trait.
// - The repository must serialize load-mutate-save per event id; the
//   aggregate assumes the snapshot it mutates is not changed underneath it.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the
//   adapters layer.
//
// Testing guidance
// - Provide in memory implementations for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::subscriptions::core::event::{Event, EventId};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Produces a fresh unique event identifier.
    async fn generate_id(&self) -> Result<EventId, RepositoryError>;

    /// Loads the full aggregate, subscriptions included. `None` when the id
    /// does not resolve to a stored event.
    async fn find_by_id(&self, event_id: EventId) -> Result<Option<Event>, RepositoryError>;

    /// Upserts the full aggregate atomically per event id.
    async fn save(&self, event: &Event) -> Result<(), RepositoryError>;
}
