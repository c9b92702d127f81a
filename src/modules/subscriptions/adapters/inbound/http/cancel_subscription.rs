use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::subscriptions::application::service::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path((event_id, user_id)): Path<(Uuid, String)>,
) -> impl IntoResponse {
    match state
        .service
        .cancel_user_subscription(&user_id, event_id)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(ApplicationError::EventNotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => {
            tracing::error!(%error, "cancel subscription failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
