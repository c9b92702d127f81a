use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::subscriptions::adapters::inbound::http as inbound;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/events", post(inbound::register_event::handle))
        .route(
            "/events/{event_id}/subscriptions",
            post(inbound::subscribe_user::handle),
        )
        .route(
            "/events/{event_id}/subscriptions/{user_id}",
            delete(inbound::cancel_subscription::handle),
        )
        .route(
            "/events/{event_id}/capacity",
            post(inbound::increase_capacity::handle),
        )
        .route(
            "/events/{event_id}/status",
            get(inbound::event_status::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
