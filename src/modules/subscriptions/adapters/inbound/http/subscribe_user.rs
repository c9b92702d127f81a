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
pub struct SubscribeUserBody {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    body: Result<Json<SubscribeUserBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .service
        .subscribe_user_to_event(&body.user_id, event_id)
        .await
    {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(ApplicationError::EventNotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => {
            tracing::error!(%error, "subscribe user failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod subscribe_user_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use chrono::{TimeZone, Utc};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::shell::state::AppState;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/events/{event_id}/subscriptions", post(handle))
            .with_state(state)
    }

    async fn register_event(state: &AppState, capacity: u32) -> Uuid {
        let start_time = Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap();
        state
            .service
            .register_event("Coding dojo", capacity, start_time)
            .await
            .expect("register failed")
    }

    fn subscribe_request(event_id: Uuid, user_id: &str) -> Request<Body> {
        Request::post(format!("/events/{event_id}/subscriptions"))
            .header("content-type", "application/json")
            .body(Body::from(format!(r#"{{"user_id":"{user_id}"}}"#)))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_201_on_a_new_subscription() {
        let state = AppState::new();
        let event_id = register_event(&state, 2).await;

        let response = app(state)
            .oneshot(subscribe_request(event_id, "alice"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn it_should_return_409_on_a_duplicate_subscription() {
        let state = AppState::new();
        let event_id = register_event(&state, 2).await;
        let router = app(state);

        let first = router
            .clone()
            .oneshot(subscribe_request(event_id, "alice"))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = router
            .oneshot(subscribe_request(event_id, "alice"))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_event() {
        let response = app(AppState::new())
            .oneshot(subscribe_request(Uuid::now_v7(), "alice"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let state = AppState::new();
        let event_id = register_event(&state, 2).await;

        let response = app(state)
            .oneshot(
                Request::post(format!("/events/{event_id}/subscriptions"))
                    .header("content-type", "application/json")
                    .body(Body::from("not-json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
