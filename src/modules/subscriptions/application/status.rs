use chrono::{DateTime, Utc};

use crate::modules::subscriptions::core::event::{Event, EventId};

/// Read-only status projection of one event: descriptive fields plus the
/// ordered participant and waiting-list user ids.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventStatus {
    pub event_id: EventId,
    pub name: String,
    pub capacity: u32,
    pub start_time: DateTime<Utc>,
    pub participants: Vec<String>,
    pub waiting_list: Vec<String>,
}

impl From<&Event> for EventStatus {
    fn from(event: &Event) -> Self {
        Self {
            event_id: event.id(),
            name: event.name().to_string(),
            capacity: event.capacity(),
            start_time: event.start_time(),
            participants: event
                .participants()
                .iter()
                .map(|s| s.user_id().to_string())
                .collect(),
            waiting_list: event
                .waiting_list()
                .iter()
                .map(|s| s.user_id().to_string())
                .collect(),
        }
    }
}
