#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use herald::app::notifications::NotificationStore;
use herald::config::notifications::NotificationPolicy;
use herald::domain::notification::NotificationId;
use herald::infra::effects::EffectDispatcher;
use herald::infra::haptics::{HapticFeedback, ImpactStyle, NotificationFeedback};
use herald::AppState;

// ---------------------------------------------------------------------------
// Recording collaborators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticEvent {
    Notification(NotificationFeedback),
    Impact(ImpactStyle),
}

#[derive(Default)]
pub struct RecordingHaptics {
    events: Mutex<Vec<HapticEvent>>,
}

impl RecordingHaptics {
    pub fn events(&self) -> Vec<HapticEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl HapticFeedback for RecordingHaptics {
    fn notification_occurred(&self, feedback: NotificationFeedback) {
        self.events
            .lock()
            .unwrap()
            .push(HapticEvent::Notification(feedback));
    }

    fn impact_occurred(&self, style: ImpactStyle) {
        self.events.lock().unwrap().push(HapticEvent::Impact(style));
    }
}

#[derive(Default)]
pub struct RecordingEffects {
    dispatched: Mutex<Vec<(NotificationId, String)>>,
}

impl RecordingEffects {
    pub fn dispatched(&self) -> Vec<(NotificationId, String)> {
        self.dispatched.lock().unwrap().clone()
    }
}

impl EffectDispatcher for RecordingEffects {
    fn dispatch(&self, notification_id: &NotificationId, effect: &str) {
        self.dispatched
            .lock()
            .unwrap()
            .push((notification_id.clone(), effect.to_string()));
    }
}

// ---------------------------------------------------------------------------
// TestApp — one per test, so timers belong to that test's runtime
// ---------------------------------------------------------------------------

pub struct TestApp {
    router: Router,
    pub store: NotificationStore,
    pub haptics: Arc<RecordingHaptics>,
    pub effects: Arc<RecordingEffects>,
}

pub struct TestResponse {
    pub status: StatusCode,
    body_bytes: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body_bytes).unwrap_or(Value::Null)
    }

    pub fn error_message(&self) -> String {
        self.json()["error"].as_str().unwrap_or("").to_string()
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_policy(NotificationPolicy::default())
    }

    pub fn with_policy(policy: NotificationPolicy) -> Self {
        let haptics = Arc::new(RecordingHaptics::default());
        let effects = Arc::new(RecordingEffects::default());
        let store = NotificationStore::with_collaborators(policy, haptics.clone(), effects.clone());

        let state = AppState {
            notifications: store.clone(),
        };
        let router = herald::http::router(state);

        TestApp {
            router,
            store,
            haptics,
            effects,
        }
    }

    // ------------------------------------------------------------------
    // Low-level request helper
    // ------------------------------------------------------------------
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder()
            .method(method)
            .uri(path)
            .header("host", "localhost");

        let request = if let Some(body) = body {
            builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap()
        } else {
            builder.body(Body::empty()).unwrap()
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot failed");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to collect body")
            .to_bytes();

        TestResponse { status, body_bytes }
    }

    /// Sends `body` verbatim with a JSON content type.
    pub async fn post_raw_json(&self, path: &str, body: &'static str) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header("host", "localhost")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot failed");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to collect body")
            .to_bytes();

        TestResponse { status, body_bytes }
    }

    /// Opens an SSE stream and returns its first frame as text.
    pub async fn first_stream_frame(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .header("host", "localhost")
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot failed");

        let status = response.status();
        let mut body = response.into_body();
        let frame = body
            .frame()
            .await
            .expect("stream ended before first frame")
            .expect("failed to read frame");
        let data = frame.into_data().expect("first frame is not data");

        (status, String::from_utf8_lossy(&data).into_owned())
    }

    // ------------------------------------------------------------------
    // Convenience HTTP helpers
    // ------------------------------------------------------------------
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path, None).await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn post(&self, path: &str) -> TestResponse {
        self.request(Method::POST, path, None).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request(Method::DELETE, path, None).await
    }

    // ------------------------------------------------------------------
    // Fixtures
    // ------------------------------------------------------------------
    pub async fn create_notification(&self, body: Value) -> String {
        let resp = self.post_json("/v1/notifications", body).await;
        assert_eq!(resp.status, StatusCode::OK, "create failed: {:?}", resp.json());
        resp.json()["id"].as_str().unwrap().to_string()
    }

    pub async fn list_titles(&self) -> Vec<String> {
        let resp = self.get("/v1/notifications").await;
        assert_eq!(resp.status, StatusCode::OK);
        resp.json()["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["title"].as_str().unwrap().to_string())
            .collect()
    }
}
