//! Routes for narrator sessions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use eldervale_narrative::application::command_handlers::{self, TurnOutcome};
use eldervale_narrative::application::query_handlers::{self, NarrativeSessionView};
use eldervale_narrative::domain::commands;
use eldervale_narrative::domain::scenes::NARRATOR_PERSONA;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    /// Optional player name; the default name is used when absent.
    #[serde(default)]
    pub player_name: Option<String>,
}

/// Response body returned after a session is started.
#[derive(Debug, Serialize)]
pub struct StartSessionResponse {
    /// The new session's identifier.
    pub session_id: Uuid,
    /// Instructions for the voice adapter's narrator.
    pub narrator_persona: &'static str,
}

/// Request body for POST /{session_id}/turns.
#[derive(Debug, Deserialize)]
pub struct AdvanceTurnRequest {
    /// The player's finalized utterance. Empty or absent for silence.
    #[serde(default)]
    pub utterance: String,
}

/// POST /
#[instrument(skip(state, request))]
async fn start_session(
    State(state): State<AppState>,
    Json(request): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<StartSessionResponse>), ApiError> {
    let command = commands::StartSession {
        correlation_id: Uuid::new_v4(),
        player_name: request.player_name,
    };

    info!(correlation_id = %command.correlation_id, "handling start_session command");

    let session_id =
        command_handlers::handle_start_session(&command, state.session_config, &state.registry)?;

    Ok((
        StatusCode::CREATED,
        Json(StartSessionResponse {
            session_id,
            narrator_persona: NARRATOR_PERSONA,
        }),
    ))
}

/// POST /{session_id}/turns
#[instrument(skip(state, request))]
async fn advance_turn(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AdvanceTurnRequest>,
) -> Result<Json<TurnOutcome>, ApiError> {
    let command = commands::AdvanceTurn {
        correlation_id: Uuid::new_v4(),
        session_id,
        utterance: request.utterance,
    };

    info!(correlation_id = %command.correlation_id, "handling advance_turn command");

    let outcome = command_handlers::handle_advance_turn(
        &command,
        state.clock.as_ref(),
        state.turn_sink.as_ref(),
        &state.registry,
    )?;

    Ok(Json(outcome))
}

/// GET /{session_id}
#[instrument(skip(state))]
async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<NarrativeSessionView>, ApiError> {
    let view = query_handlers::get_session_by_id(session_id, &state.registry)?;
    Ok(Json(view))
}

/// DELETE /{session_id}
#[instrument(skip(state))]
async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let command = commands::EndSession {
        correlation_id: Uuid::new_v4(),
        session_id,
    };

    info!(correlation_id = %command.correlation_id, "handling end_session command");

    command_handlers::handle_end_session(&command, &state.registry)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for narrator sessions.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(start_session))
        .route("/{session_id}", get(get_session).delete(end_session))
        .route("/{session_id}/turns", post(advance_turn))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use eldervale_narrative::domain::config::SessionConfig;
    use eldervale_test_support::{RecordingTurnSink, fixed_clock};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app_state() -> (AppState, Arc<RecordingTurnSink>) {
        let sink = Arc::new(RecordingTurnSink::new());
        let state = AppState::new(
            Arc::new(fixed_clock()),
            sink.clone(),
            SessionConfig::default(),
        );
        (state, sink)
    }

    async fn send(
        app: Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(json) => Body::from(serde_json::to_vec(&json).unwrap()),
                None => Body::empty(),
            })
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_start_session_returns_201_with_session_id() {
        // Arrange
        let (state, _) = test_app_state();
        let app = router().with_state(state.clone());

        // Act
        let (status, json) =
            send(app, "POST", "/", Some(serde_json::json!({ "player_name": "Mira" }))).await;

        // Assert
        assert_eq!(status, StatusCode::CREATED);
        let session_id = Uuid::parse_str(json["session_id"].as_str().unwrap()).unwrap();
        assert_eq!(state.registry.len().unwrap(), 1);
        let name = state
            .registry
            .with_session(session_id, |s| s.memory().name().to_owned())
            .unwrap();
        assert_eq!(name, "Mira");
        assert_eq!(json["narrator_persona"], NARRATOR_PERSONA);
    }

    #[tokio::test]
    async fn test_start_session_returns_400_for_blank_name() {
        let (state, _) = test_app_state();
        let app = router().with_state(state);

        let (status, json) =
            send(app, "POST", "/", Some(serde_json::json!({ "player_name": " " }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_advance_turn_returns_narration_and_records_turn() {
        // Arrange
        let (state, sink) = test_app_state();
        let (_, json) = send(
            router().with_state(state.clone()),
            "POST",
            "/",
            Some(serde_json::json!({})),
        )
        .await;
        let session_id = json["session_id"].as_str().unwrap().to_owned();

        // Act
        let (status, json) = send(
            router().with_state(state),
            "POST",
            &format!("/{session_id}/turns"),
            Some(serde_json::json!({ "utterance": "" })),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["turn_index"], 1);
        assert_eq!(json["step"], "opening_scene");
        assert_eq!(json["complete"], false);
        assert!(json["narration"].as_str().unwrap().ends_with("What do you do?"));
        assert_eq!(sink.records().len(), 1);
    }

    #[tokio::test]
    async fn test_advance_turn_returns_404_for_unknown_session() {
        let (state, _) = test_app_state();
        let app = router().with_state(state);

        let (status, json) = send(
            app,
            "POST",
            &format!("/{}/turns", Uuid::new_v4()),
            Some(serde_json::json!({ "utterance": "hello" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "session_not_found");
    }

    #[tokio::test]
    async fn test_advance_turn_returns_400_for_malformed_session_id() {
        let (state, _) = test_app_state();
        let app = router().with_state(state);

        let (status, _) = send(
            app,
            "POST",
            "/not-a-uuid/turns",
            Some(serde_json::json!({ "utterance": "hello" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_end_session_returns_204_then_404() {
        // Arrange
        let (state, _) = test_app_state();
        let (_, json) = send(
            router().with_state(state.clone()),
            "POST",
            "/",
            Some(serde_json::json!({})),
        )
        .await;
        let uri = format!("/{}", json["session_id"].as_str().unwrap());

        // Act
        let (first, _) = send(router().with_state(state.clone()), "DELETE", &uri, None).await;
        let (second, _) = send(router().with_state(state), "DELETE", &uri, None).await;

        // Assert
        assert_eq!(first, StatusCode::NO_CONTENT);
        assert_eq!(second, StatusCode::NOT_FOUND);
    }
}
