use std::sync::Arc;

use crate::modules::subscriptions::adapters::outbound::in_memory::InMemoryEventRepository;
use crate::modules::subscriptions::application::service::SubscriptionService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SubscriptionService<InMemoryEventRepository>>,
}

impl AppState {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryEventRepository::new());
        Self {
            service: Arc::new(SubscriptionService::new(repository)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
