//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{
    ApplicationError, InferencePort, InferenceResult, RoastService, SocialService, SpeechPort,
    SynthesisResult, VoiceOption, VoiceRoastService,
};
use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use domain::VoicePersona;
use infrastructure::AppConfig;
use mockall::mock;
use presentation_http::{routes::create_router, state::AppState};
use serde_json::json;

/// How the fake inference backend answers
enum InferenceMode {
    Content(&'static str),
    ServerError,
    Unreachable,
}

/// Fake inference backend for testing
struct FakeInference {
    mode: InferenceMode,
    healthy: bool,
}

impl FakeInference {
    fn roasting(content: &'static str) -> Self {
        Self {
            mode: InferenceMode::Content(content),
            healthy: true,
        }
    }

    fn unhealthy() -> Self {
        Self {
            mode: InferenceMode::Unreachable,
            healthy: false,
        }
    }
}

#[async_trait]
impl InferencePort for FakeInference {
    async fn generate_structured(
        &self,
        _prompt: &str,
        _schema: &serde_json::Value,
    ) -> Result<InferenceResult, ApplicationError> {
        match self.mode {
            InferenceMode::Content(content) => Ok(InferenceResult {
                content: content.to_string(),
                model: "mock-model".to_string(),
                tokens_used: Some(42),
                latency_ms: 100,
            }),
            InferenceMode::ServerError => Err(ApplicationError::Upstream {
                status: 500,
                message: "model crashed".to_string(),
            }),
            InferenceMode::Unreachable => Err(ApplicationError::Transport(
                "Inference server unreachable".to_string(),
            )),
        }
    }

    async fn is_healthy(&self) -> bool {
        self.healthy
    }

    fn current_model(&self) -> String {
        "mock-model".to_string()
    }
}

/// How the fake speech provider answers
enum SpeechMode {
    Audio(Vec<u8>),
    MissingKey,
    Rejected(u16),
}

/// Fake speech provider for testing
struct FakeSpeech {
    mode: SpeechMode,
}

#[async_trait]
impl SpeechPort for FakeSpeech {
    async fn synthesize(
        &self,
        _text: &str,
        _persona: VoicePersona,
    ) -> Result<SynthesisResult, ApplicationError> {
        match &self.mode {
            SpeechMode::Audio(bytes) => Ok(SynthesisResult {
                audio_data: bytes.clone(),
                mime_type: "audio/mpeg".to_string(),
            }),
            SpeechMode::MissingKey => Err(ApplicationError::Configuration(
                "ElevenLabs API key is not set".to_string(),
            )),
            SpeechMode::Rejected(status) => Err(ApplicationError::Upstream {
                status: *status,
                message: "invalid_api_key".to_string(),
            }),
        }
    }

    fn voices(&self) -> Vec<VoiceOption> {
        VoicePersona::all()
            .into_iter()
            .map(|persona| VoiceOption {
                value: persona,
                label: persona.label().to_string(),
                configured: true,
            })
            .collect()
    }

    fn is_configured(&self) -> bool {
        !matches!(self.mode, SpeechMode::MissingKey)
    }
}

mock! {
    pub Inference {}

    #[async_trait]
    impl InferencePort for Inference {
        async fn generate_structured(
            &self,
            prompt: &str,
            schema: &serde_json::Value,
        ) -> Result<InferenceResult, ApplicationError>;
        async fn is_healthy(&self) -> bool;
        fn current_model(&self) -> String;
    }
}

mock! {
    pub Speech {}

    #[async_trait]
    impl SpeechPort for Speech {
        async fn synthesize(
            &self,
            text: &str,
            persona: VoicePersona,
        ) -> Result<SynthesisResult, ApplicationError>;
        fn voices(&self) -> Vec<VoiceOption>;
        fn is_configured(&self) -> bool;
    }
}

const DUCK_ROAST: &str =
    r#"{"roast":"Talking to rubber ducks is the only way they'll listen to you."}"#;

fn create_server(inference: Arc<dyn InferencePort>, speech: Arc<dyn SpeechPort>) -> TestServer {
    let state = AppState {
        roast_service: Arc::new(RoastService::new(inference)),
        voice_roast_service: Arc::new(VoiceRoastService::new(speech)),
        social_service: SocialService::new(),
        config: Arc::new(AppConfig::default()),
    };
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

fn create_test_server() -> TestServer {
    create_server(
        Arc::new(FakeInference::roasting(DUCK_ROAST)),
        Arc::new(FakeSpeech {
            mode: SpeechMode::Audio(vec![0xFF, 0xFB, 0x90, 0x64]),
        }),
    )
}

fn with_inference(inference: FakeInference) -> TestServer {
    create_server(
        Arc::new(inference),
        Arc::new(FakeSpeech {
            mode: SpeechMode::Audio(Vec::new()),
        }),
    )
}

fn with_speech(mode: SpeechMode) -> TestServer {
    create_server(
        Arc::new(FakeInference::roasting(DUCK_ROAST)),
        Arc::new(FakeSpeech { mode }),
    )
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn readiness_endpoint_returns_ready_when_healthy() {
    let server = create_test_server();

    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["inference"]["model"], "mock-model");
    assert_eq!(body["speech"]["configured"], true);
}

#[tokio::test]
async fn readiness_endpoint_returns_unavailable_when_unhealthy() {
    let server = with_inference(FakeInference::unhealthy());

    let response = server.get("/ready").await;

    response.assert_status_service_unavailable();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], false);
    assert!(body["inference"]["model"].is_null());
}

// ============ Request ID Tests ============

#[tokio::test]
async fn responses_carry_request_id() {
    let server = create_test_server();

    let response = server.get("/health").await;

    let id = response
        .headers()
        .get("x-request-id")
        .expect("missing request id");
    assert!(!id.is_empty());
}

#[tokio::test]
async fn caller_request_id_is_propagated() {
    let server = create_test_server();

    let response = server
        .get("/v1/profile/stats")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("roast-trace-42"),
        )
        .await;

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "roast-trace-42"
    );
}

#[tokio::test]
async fn error_responses_carry_request_id() {
    let server = create_test_server();

    let response = server.post("/v1/roasts").json(&json!({ "bio": "hi" })).await;

    response.assert_status_bad_request();
    assert!(response.headers().get("x-request-id").is_some());
}

// ============ Roast Endpoint Tests ============

#[tokio::test]
async fn roast_endpoint_returns_roast_for_duck_bio() {
    let server = create_test_server();

    let response = server
        .post("/v1/roasts")
        .json(&json!({
            "bio": "I collect vintage rubber ducks and talk to them daily."
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["roast"],
        "Talking to rubber ducks is the only way they'll listen to you."
    );
}

#[tokio::test]
async fn short_bio_rejected_before_inference() {
    let mut inference = MockInference::new();
    inference.expect_generate_structured().times(0);
    let server = create_server(
        Arc::new(inference),
        Arc::new(FakeSpeech {
            mode: SpeechMode::Audio(Vec::new()),
        }),
    );

    let response = server.post("/v1/roasts").json(&json!({ "bio": "too short" })).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "validation_error");
    assert_eq!(body["error"], "Bio must be between 10 and 2000 characters.");
}

#[tokio::test]
async fn blank_bio_asks_for_input() {
    let server = create_test_server();

    let response = server.post("/v1/roasts").json(&json!({ "bio": "    " })).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Please enter a bio to generate a roast.");
}

#[tokio::test]
async fn overlong_bio_rejected() {
    let server = create_test_server();

    let response = server
        .post("/v1/roasts")
        .json(&json!({ "bio": "a".repeat(2001) }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn unusable_model_output_is_bad_gateway() {
    let server = with_inference(FakeInference::roasting("Here is your roast!"));

    let response = server
        .post("/v1/roasts")
        .json(&json!({ "bio": "I collect vintage rubber ducks." }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "generation_error");
}

#[tokio::test]
async fn inference_server_error_is_upstream_error() {
    let server = with_inference(FakeInference {
        mode: InferenceMode::ServerError,
        healthy: true,
    });

    let response = server
        .post("/v1/roasts")
        .json(&json!({ "bio": "I collect vintage rubber ducks." }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "upstream_error");
    assert_eq!(body["details"], "provider status 500");
    assert_eq!(body["error"], "The upstream provider rejected the request");
    assert!(!response.text().contains("model crashed"));
}

#[tokio::test]
async fn unreachable_inference_is_service_unavailable() {
    let server = with_inference(FakeInference {
        mode: InferenceMode::Unreachable,
        healthy: false,
    });

    let response = server
        .post("/v1/roasts")
        .json(&json!({ "bio": "I collect vintage rubber ducks." }))
        .await;

    response.assert_status_service_unavailable();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "service_unavailable");
}

// ============ Voice Endpoint Tests ============

#[tokio::test]
async fn voice_roast_returns_base64_audio() {
    let server = create_test_server();

    let response = server
        .post("/v1/roasts/voice")
        .json(&json!({
            "text": "Nice duck collection.",
            "voiceStyle": "rude grandma"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let audio = STANDARD.decode(body["audio"].as_str().unwrap()).unwrap();
    assert_eq!(audio, vec![0xFF, 0xFB, 0x90, 0x64]);
}

#[tokio::test]
async fn voice_text_reaches_synthesis_unchanged() {
    let mut speech = MockSpeech::new();
    speech
        .expect_synthesize()
        .withf(|text, persona| {
            text == "  Nice duck collection.\n" && *persona == VoicePersona::BritishVillain
        })
        .times(1)
        .returning(|_, _| {
            Ok(SynthesisResult {
                audio_data: vec![0x49, 0x44, 0x33],
                mime_type: "audio/mpeg".to_string(),
            })
        });
    let server = create_server(Arc::new(FakeInference::roasting(DUCK_ROAST)), Arc::new(speech));

    let response = server
        .post("/v1/roasts/voice")
        .json(&json!({
            "text": "  Nice duck collection.\n",
            "voiceStyle": "British villain"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["audio"], STANDARD.encode([0x49, 0x44, 0x33]));
}

#[tokio::test]
async fn unknown_voice_style_rejected_before_synthesis() {
    let mut speech = MockSpeech::new();
    speech.expect_synthesize().times(0);
    let server = create_server(Arc::new(FakeInference::roasting(DUCK_ROAST)), Arc::new(speech));

    let response = server
        .post("/v1/roasts/voice")
        .json(&json!({
            "text": "Nice duck collection.",
            "voiceStyle": "robot"
        }))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "validation_error");
}

#[tokio::test]
async fn empty_voice_text_rejected() {
    let mut speech = MockSpeech::new();
    speech.expect_synthesize().times(0);
    let server = create_server(Arc::new(FakeInference::roasting(DUCK_ROAST)), Arc::new(speech));

    let response = server
        .post("/v1/roasts/voice")
        .json(&json!({
            "text": "  ",
            "voiceStyle": "sarcastic guy"
        }))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Please generate a roast first.");
}

#[tokio::test]
async fn missing_speech_key_is_configuration_error() {
    let server = with_speech(SpeechMode::MissingKey);

    let response = server
        .post("/v1/roasts/voice")
        .json(&json!({
            "text": "Nice duck collection.",
            "voiceStyle": "British villain"
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "configuration_error");
}

#[tokio::test]
async fn speech_provider_rejection_is_upstream_error() {
    let server = with_speech(SpeechMode::Rejected(401));

    let response = server
        .post("/v1/roasts/voice")
        .json(&json!({
            "text": "Nice duck collection.",
            "voiceStyle": "sarcastic guy"
        }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "upstream_error");
    assert_eq!(body["details"], "provider status 401");
    assert!(!response.text().contains("invalid_api_key"));
}

#[tokio::test]
async fn voices_lists_three_personas() {
    let server = create_test_server();

    let response = server.get("/v1/voices").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let voices = body.as_array().unwrap();
    assert_eq!(voices.len(), 3);
    assert_eq!(voices[0]["value"], "sarcastic guy");
    assert_eq!(voices[1]["label"], "Rude Grandma");
    assert_eq!(voices[2]["value"], "British villain");
}

// ============ Social Endpoint Tests ============

#[tokio::test]
async fn reaction_by_name_is_acknowledged() {
    let server = create_test_server();

    let response = server
        .post("/v1/reactions")
        .json(&json!({ "reaction": "fire" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["reaction"], "🔥");
    assert_eq!(body["message"], "You reacted with 🔥!");
}

#[tokio::test]
async fn reaction_by_emoji_is_acknowledged() {
    let server = create_test_server();

    let response = server
        .post("/v1/reactions")
        .json(&json!({ "reaction": "😂" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "You reacted with 😂!");
}

#[tokio::test]
async fn unknown_reaction_rejected() {
    let server = create_test_server();

    let response = server
        .post("/v1/reactions")
        .json(&json!({ "reaction": "👍" }))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "validation_error");
    assert_eq!(body["error"], "Unknown reaction: 👍");
}

#[tokio::test]
async fn malformed_social_bodies_get_json_errors() {
    let server = create_test_server();

    for route in ["/v1/reactions", "/v1/share"] {
        let response = server.post(route).json(&json!({ "text": 42 })).await;

        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "validation_error", "route {route}");
    }
}

#[tokio::test]
async fn share_builds_payload() {
    let server = create_test_server();

    let response = server
        .post("/v1/share")
        .json(&json!({
            "text": "Nice duck collection.",
            "url": "https://roast.example/r/1"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["title"], "Check out my roast!");
    assert_eq!(body["text"], "Nice duck collection.");
    assert_eq!(body["url"], "https://roast.example/r/1");
}

#[tokio::test]
async fn share_defaults_to_public_url() {
    let server = create_test_server();

    let response = server
        .post("/v1/share")
        .json(&json!({ "text": "Nice duck collection." }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["url"], "http://localhost:3000");
}

#[tokio::test]
async fn share_without_roast_rejected() {
    let server = create_test_server();

    let response = server.post("/v1/share").json(&json!({ "text": "" })).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "validation_error");
}

#[tokio::test]
async fn profile_stats_are_static() {
    let server = create_test_server();

    let response = server.get("/v1/profile/stats").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["received_roasts"], 10);
    assert_eq!(body["given_roasts"], 5);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = create_test_server();

    let response = server.get("/v1/nonexistent").await;

    response.assert_status_not_found();
}
