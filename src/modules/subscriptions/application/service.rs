// SubscriptionService coordinates one load-mutate-save cycle per operation.
//
// Responsibilities
// - Load the aggregate through the repository port, invoke exactly one
//   aggregate operation, persist the result.
// - Map an absent event to EventNotFound instead of letting it propagate.
//
// Boundaries
// - No invariant logic here; capacity and waiting-list rules live in the
//   Event aggregate.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::modules::subscriptions::application::status::EventStatus;
use crate::modules::subscriptions::core::event::{DomainError, Event, EventId};
use crate::modules::subscriptions::ports::{EventRepository, RepositoryError};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("event {0} not found")]
    EventNotFound(EventId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub struct SubscriptionService<R>
where
    R: EventRepository + 'static,
{
    repository: Arc<R>,
}

impl<R> SubscriptionService<R>
where
    R: EventRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn register_event(
        &self,
        name: &str,
        capacity: u32,
        start_time: DateTime<Utc>,
    ) -> Result<EventId, ApplicationError> {
        let id = self.repository.generate_id().await?;
        let event = Event::new(id, name, capacity, start_time);
        self.repository.save(&event).await?;
        tracing::info!(event_id = %id, capacity, "event registered");
        Ok(id)
    }

    pub async fn subscribe_user_to_event(
        &self,
        user_id: &str,
        event_id: EventId,
    ) -> Result<(), ApplicationError> {
        let mut event = self.load(event_id).await?;
        event.subscribe(user_id, Utc::now())?;
        self.repository.save(&event).await?;
        Ok(())
    }

    pub async fn cancel_user_subscription(
        &self,
        user_id: &str,
        event_id: EventId,
    ) -> Result<(), ApplicationError> {
        let mut event = self.load(event_id).await?;
        event.cancel_subscription(user_id);
        self.repository.save(&event).await?;
        Ok(())
    }

    /// Raises the capacity of an event. A value not strictly greater than the
    /// current capacity is a silent no-op and is not persisted.
    pub async fn increase_capacity(
        &self,
        event_id: EventId,
        new_capacity: u32,
    ) -> Result<(), ApplicationError> {
        let mut event = self.load(event_id).await?;
        if new_capacity <= event.capacity() {
            return Ok(());
        }
        event.increase_capacity_to(new_capacity);
        self.repository.save(&event).await?;
        tracing::info!(event_id = %event_id, new_capacity, "capacity increased");
        Ok(())
    }

    pub async fn get_event_status(
        &self,
        event_id: EventId,
    ) -> Result<EventStatus, ApplicationError> {
        let event = self.load(event_id).await?;
        Ok(EventStatus::from(&event))
    }

    async fn load(&self, event_id: EventId) -> Result<Event, ApplicationError> {
        self.repository
            .find_by_id(event_id)
            .await?
            .ok_or(ApplicationError::EventNotFound(event_id))
    }
}
