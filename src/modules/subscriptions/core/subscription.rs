// Subscription is one user's registration record for an event.
//
// Purpose
// - Hold the user id, the registration time and the waiting flag.
//
// Boundaries
// - The waiting flag only ever moves waiting -> confirmed, and only the
//   Event aggregate may flip it. Fields stay private behind read accessors.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    user_id: String,
    registration_time: DateTime<Utc>,
    waiting: bool,
}

impl Subscription {
    pub(in crate::modules::subscriptions::core) fn new(
        user_id: impl Into<String>,
        registration_time: DateTime<Utc>,
        waiting: bool,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            registration_time,
            waiting,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn registration_time(&self) -> DateTime<Utc> {
        self.registration_time
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    // One-directional: a confirmed subscription never goes back to waiting.
    pub(in crate::modules::subscriptions::core) fn confirm(&mut self) {
        self.waiting = false;
    }
}
