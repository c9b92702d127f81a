use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::subscriptions::application::service::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(event_id): Path<Uuid>) -> impl IntoResponse {
    match state.service.get_event_status(event_id).await {
        Ok(status) => (StatusCode::OK, Json(status)).into_response(),
        Err(ApplicationError::EventNotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => {
            tracing::error!(%error, "event status failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
