// Event is the aggregate root for one scheduled gathering.
//
// Purpose
// - Own the subscription collection and enforce every capacity and
//   waiting-list invariant in one place.
//
// Responsibilities
// - At most one subscription per user id.
// - Confirmed participants never exceed capacity.
// - Promotions from the waiting list happen strictly in registration order.
//
// Boundaries
// - No input or output here. Keep it framework-free.
// - Callers never see the internal collection; accessors hand out read-only
//   views. All mutation goes through subscribe, cancel_subscription and
//   increase_capacity_to behind `&mut self`, so an "old" and a "new" aggregate
//   can never alias the same subscriptions.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::subscriptions::core::subscription::Subscription;

pub type EventId = Uuid;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("user {user_id} already has a subscription")]
    DuplicateSubscription { user_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    name: String,
    capacity: u32,
    start_time: DateTime<Utc>,
    subscriptions: Vec<Subscription>,
}

impl Event {
    pub fn new(
        id: EventId,
        name: impl Into<String>,
        capacity: u32,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
            start_time,
            subscriptions: Vec::new(),
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Confirmed subscriptions, earliest registration first.
    pub fn participants(&self) -> Vec<&Subscription> {
        let mut participants: Vec<&Subscription> = self
            .subscriptions
            .iter()
            .filter(|s| !s.is_waiting())
            .collect();
        participants.sort_by_key(|s| s.registration_time());
        participants
    }

    /// Waiting subscriptions, earliest registration first.
    pub fn waiting_list(&self) -> Vec<&Subscription> {
        let mut waiting: Vec<&Subscription> = self
            .subscriptions
            .iter()
            .filter(|s| s.is_waiting())
            .collect();
        waiting.sort_by_key(|s| s.registration_time());
        waiting
    }

    pub fn subscription_for(&self, user_id: &str) -> Option<&Subscription> {
        self.subscriptions.iter().find(|s| s.user_id() == user_id)
    }

    pub fn has_subscription_for(&self, user_id: &str) -> bool {
        self.subscription_for(user_id).is_some()
    }

    pub fn is_full(&self) -> bool {
        self.confirmed_count() == self.capacity as usize
    }

    /// Registers a user. The subscription starts waiting iff every confirmed
    /// slot is already taken at this moment.
    pub fn subscribe(
        &mut self,
        user_id: impl Into<String>,
        registration_time: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let user_id = user_id.into();
        if self.has_subscription_for(&user_id) {
            return Err(DomainError::DuplicateSubscription { user_id });
        }
        let waiting = self.is_full();
        self.subscriptions
            .push(Subscription::new(user_id, registration_time, waiting));
        Ok(())
    }

    /// Removes the user's subscription. Cancelling a confirmed participant
    /// frees one slot and backfills it with the earliest waiting subscription;
    /// cancelling a waiting subscription only shrinks the waiting list.
    /// Unknown users are a no-op.
    pub fn cancel_subscription(&mut self, user_id: &str) {
        let Some(position) = self
            .subscriptions
            .iter()
            .position(|s| s.user_id() == user_id)
        else {
            return;
        };
        let cancelled = self.subscriptions.remove(position);
        if !cancelled.is_waiting() {
            self.promote_earliest_waiting(1);
        }
    }

    /// Raises capacity and promotes up to the number of freed slots, earliest
    /// registrations first. A non-increasing value changes nothing.
    pub fn increase_capacity_to(&mut self, new_capacity: u32) {
        if new_capacity <= self.capacity {
            return;
        }
        let new_slots = (new_capacity - self.capacity) as usize;
        self.capacity = new_capacity;
        self.promote_earliest_waiting(new_slots);
    }

    fn confirmed_count(&self) -> usize {
        self.subscriptions.iter().filter(|s| !s.is_waiting()).count()
    }

    fn promote_earliest_waiting(&mut self, slots: usize) {
        let mut waiting: Vec<usize> = self
            .subscriptions
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_waiting())
            .map(|(index, _)| index)
            .collect();
        waiting.sort_by_key(|&index| self.subscriptions[index].registration_time());
        for &index in waiting.iter().take(slots) {
            self.subscriptions[index].confirm();
        }
    }
}
