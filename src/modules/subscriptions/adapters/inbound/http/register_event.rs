use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterEventBody {
    pub name: String,
    pub capacity: u32,
    pub start_time: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct RegisterEventResponse {
    pub event_id: Uuid,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .service
        .register_event(&body.name, body.capacity, body.start_time)
        .await
    {
        Ok(event_id) => (StatusCode::CREATED, Json(RegisterEventResponse { event_id }))
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "register event failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
