//! In-process fake of the detect/translate service used by unit tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

/// A request the fake received
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: &'static str,
    pub body: Value,
}

/// Behaviour of the fake service
#[derive(Debug, Clone)]
pub struct FakeService {
    /// Language reported by `/detect`
    pub detected: String,
    /// Text -> translation; unknown text is echoed back
    pub dictionary: HashMap<String, String>,
    /// Raw `/detect` body overriding `detected`
    pub detect_body: Option<Value>,
    /// Raw `/translate` body overriding the dictionary
    pub translate_body: Option<Value>,
    /// `/translate` answers 500 for this text
    pub fail_on: Option<String>,
    /// Verbatim 200 body for both endpoints, served as-is even when not JSON
    pub raw_body: Option<String>,
}

impl Default for FakeService {
    fn default() -> Self {
        Self {
            detected: "en".to_string(),
            dictionary: HashMap::new(),
            detect_body: None,
            translate_body: None,
            fail_on: None,
            raw_body: None,
        }
    }
}

impl FakeService {
    pub fn with_translations(pairs: &[(&str, &str)]) -> Self {
        Self {
            dictionary: pairs
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            ..Default::default()
        }
    }
}

struct Shared {
    service: FakeService,
    calls: Mutex<Vec<RecordedCall>>,
}

/// Handle to a running fake
pub struct RunningFake {
    pub url: String,
    shared: Arc<Shared>,
}

impl RunningFake {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.shared.calls.lock().unwrap().clone()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        self.calls().iter().filter(|c| c.endpoint == endpoint).count()
    }
}

async fn detect(State(shared): State<Arc<Shared>>, Json(body): Json<Value>) -> Response {
    shared.calls.lock().unwrap().push(RecordedCall {
        endpoint: "detect",
        body,
    });

    if let Some(raw) = &shared.service.raw_body {
        return (StatusCode::OK, raw.clone()).into_response();
    }

    let response = shared
        .service
        .detect_body
        .clone()
        .unwrap_or_else(|| json!([{"language": shared.service.detected, "confidence": 0.9}]));
    Json(response).into_response()
}

async fn translate(
    State(shared): State<Arc<Shared>>,
    Json(body): Json<Value>,
) -> Response {
    let text = body["q"].as_str().unwrap_or_default().to_string();
    shared.calls.lock().unwrap().push(RecordedCall {
        endpoint: "translate",
        body,
    });

    if shared.service.fail_on.as_deref() == Some(text.as_str()) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "translation engine crashed"})),
        )
            .into_response();
    }

    if let Some(raw) = &shared.service.raw_body {
        return (StatusCode::OK, raw.clone()).into_response();
    }

    if let Some(raw) = &shared.service.translate_body {
        return (StatusCode::OK, Json(raw.clone())).into_response();
    }

    let translated = shared
        .service
        .dictionary
        .get(&text)
        .cloned()
        .unwrap_or(text);
    (StatusCode::OK, Json(json!({"translatedText": translated}))).into_response()
}

/// Bind the fake on an ephemeral port
pub async fn spawn(service: FakeService) -> RunningFake {
    let shared = Arc::new(Shared {
        service,
        calls: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/detect", post(detect))
        .route("/translate", post(translate))
        .with_state(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    RunningFake {
        url: format!("http://{}", addr),
        shared,
    }
}
