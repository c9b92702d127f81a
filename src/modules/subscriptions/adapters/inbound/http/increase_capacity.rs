use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::subscriptions::application::service::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct IncreaseCapacityBody {
    pub new_capacity: u32,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    body: Result<Json<IncreaseCapacityBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .service
        .increase_capacity(event_id, body.new_capacity)
        .await
    {
        // Non-increasing values are accepted and ignored, same status either way.
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(ApplicationError::EventNotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => {
            tracing::error!(%error, "increase capacity failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
