use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use ghost_core::entities::Task;
use ghost_core::responses::{
    AskRequest, AskResponse, ErrorResponse, PriorityRequest, PriorityResponse, SpeakRequest,
    SuggestRequest, SuggestResponse,
};
use ghost_engine::priority::infer_priority;
use serde_json::{Value, json};

use super::AppState;

/// `POST /api/suggest`
pub async fn suggest(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SuggestRequest>,
) -> Json<SuggestResponse> {
    let tasks = req
        .tasks
        .into_iter()
        .filter_map(|wire| wire.into_task())
        .collect::<Vec<Task>>();
    tracing::debug!(tasks = tasks.len(), "suggest request");

    let result = state.engine.suggest(&tasks).await;
    Json(result.into())
}

/// `POST /api/ask`
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> Json<AskResponse> {
    let say = state.engine.ask(&req.text, req.board_state.as_ref()).await;
    Json(AskResponse { say })
}

/// `POST /api/speak`
pub async fn speak(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeakRequest>,
) -> Response {
    let Some(speech) = state.speech.as_ref() else {
        return error(
            StatusCode::BAD_REQUEST,
            "TTS not configured. Set ELEVEN_API_KEY and ELEVEN_VOICE_ID",
        );
    };

    match speech.speak(&req.text).await {
        Ok(audio) => ([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "TTS failed");
            error(StatusCode::INTERNAL_SERVER_ERROR, "TTS failed")
        }
    }
}

/// `POST /api/priority`
pub async fn priority(Json(req): Json<PriorityRequest>) -> Json<PriorityResponse> {
    Json(PriorityResponse {
        priority: infer_priority(&req.text),
    })
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use ghost_config::ElevenLabsConfig;
    use ghost_engine::{EngineConfig, SuggestionEngine};
    use ghost_providers::ElevenLabsClient;
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::server::{AppState, router};

    fn heuristic_state() -> Arc<AppState> {
        AppState::new(
            Arc::new(SuggestionEngine::new(EngineConfig::default())),
            None,
        )
    }

    async fn post_json(state: Arc<AppState>, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
        let response = router(state)
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();
        (status, bytes.to_vec())
    }

    fn as_json(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).expect("body should be JSON")
    }

    #[tokio::test]
    async fn suggest_picks_highest_priority_backlog_task() {
        let (status, body) = post_json(
            heuristic_state(),
            "/api/suggest",
            json!({ "tasks": [
                { "id": "a", "text": "read book", "priority": "low", "col": "todo" },
                { "id": "b", "text": "fix login bug", "priority": "high", "col": "backlog" },
                { "id": "c", "text": "ship release", "priority": "high", "col": "done" },
            ]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let body = as_json(&body);
        assert_eq!(body["id"], "b");
        assert!(
            body["say"]
                .as_str()
                .expect("say is a string")
                .starts_with("Focus on: fix login bug.")
        );
    }

    #[tokio::test]
    async fn suggest_with_no_candidates_is_caught_up() {
        let (status, body) = post_json(
            heuristic_state(),
            "/api/suggest",
            json!({ "tasks": [
                { "id": "x", "text": "old thing", "priority": "high", "col": "archive" },
            ]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&body), json!({ "say": "You're all caught up. Nice!" }));
    }

    #[tokio::test]
    async fn ask_empty_text_gets_prompt() {
        let (status, body) = post_json(heuristic_state(), "/api/ask", json!({ "text": "" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&body)["say"], "I'm here to help! What do you need?");
    }

    #[tokio::test]
    async fn ask_accepts_partial_board_state() {
        let (status, body) = post_json(
            heuristic_state(),
            "/api/ask",
            json!({ "text": "I'm so overwhelmed", "boardState": { "backlogCount": 9 } }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(as_json(&body)["say"].is_string());
    }

    #[tokio::test]
    async fn priority_is_inferred() {
        let (status, body) = post_json(
            heuristic_state(),
            "/api/priority",
            json!({ "text": "submit taxes asap" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&body), json!({ "priority": "high" }));
    }

    #[tokio::test]
    async fn speak_without_config_is_bad_request() {
        let (status, body) =
            post_json(heuristic_state(), "/api/speak", json!({ "text": "hi" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            as_json(&body)["error"]
                .as_str()
                .expect("error is a string")
                .contains("ELEVEN_API_KEY")
        );
    }

    fn speech_state(base_url: String) -> Arc<AppState> {
        let config = ElevenLabsConfig {
            api_key: "xi-test".to_string(),
            voice_id: "voice-1".to_string(),
            base_url,
            ..ElevenLabsConfig::default()
        };
        let client = ElevenLabsClient::from_config(&config, Duration::from_secs(5))
            .expect("client should build");
        AppState::new(
            Arc::new(SuggestionEngine::new(EngineConfig::default())),
            Some(Arc::new(client)),
        )
    }

    #[tokio::test]
    async fn speak_streams_audio() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/text-to-speech/voice-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "audio/mpeg")
                    .set_body_bytes(b"ID3fake".to_vec()),
            )
            .mount(&server)
            .await;

        let (status, body) =
            post_json(speech_state(server.uri()), "/api/speak", json!({ "text": "hi" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ID3fake".to_vec());
    }

    #[tokio::test]
    async fn speak_vendor_failure_is_500() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let (status, body) =
            post_json(speech_state(server.uri()), "/api/speak", json!({ "text": "hi" })).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(as_json(&body), json!({ "error": "TTS failed" }));
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let response = router(heuristic_state())
            .oneshot(
                Request::post("/api/suggest")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = router(heuristic_state())
            .oneshot(
                Request::get("/health")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
