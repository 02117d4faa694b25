use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures::Stream;
use serde::{Deserialize, Serialize};

use crate::app::presets::GameEvent;
use crate::domain::notification::{
    Badge, Notification, NotificationAction, NotificationId, NotificationSpec,
};
use crate::http::AppError;
use crate::AppState;

const MAX_TITLE_LEN: usize = 120;
const MAX_MESSAGE_LEN: usize = 1000;
const MAX_ACTIONS: usize = 4;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
pub struct NotificationList {
    pub items: Vec<Notification>,
    pub badge: Badge,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: NotificationId,
}

#[derive(Deserialize)]
pub struct InvokeActionRequest {
    pub close: Option<bool>,
}

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_notifications(State(state): State<AppState>) -> Json<NotificationList> {
    let items = state.notifications.notifications();
    let badge = Badge::new(items.len(), state.notifications.policy().badge_cap);
    Json(NotificationList { items, badge })
}

/// One `snapshot` event right away, then one per store mutation.
pub async fn stream_notifications(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let receiver = state.notifications.subscribe();
    let badge_cap = state.notifications.policy().badge_cap;

    let stream = futures::stream::unfold((receiver, true), move |(mut receiver, first)| async move {
        if !first && receiver.changed().await.is_err() {
            return None;
        }
        let items = receiver.borrow_and_update().clone();
        let badge = Badge::new(items.len(), badge_cap);
        let event = Event::default()
            .event("snapshot")
            .json_data(NotificationList { items, badge });
        Some((event, (receiver, false)))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

pub async fn create_notification(
    State(state): State<AppState>,
    Json(payload): Json<NotificationSpec>,
) -> Result<Json<CreatedResponse>, AppError> {
    validate_spec(&payload)?;

    let id = state.notifications.add_notification(payload);
    Ok(Json(CreatedResponse { id }))
}

fn validate_spec(spec: &NotificationSpec) -> Result<(), AppError> {
    if spec.title.trim().is_empty() {
        return Err(AppError::bad_request("title is required"));
    }
    if spec.title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::bad_request("title must be at most 120 characters"));
    }
    if let Some(message) = &spec.message {
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(AppError::bad_request("message must be at most 1000 characters"));
        }
    }
    if spec.actions.len() > MAX_ACTIONS {
        return Err(AppError::bad_request("at most 4 actions are allowed"));
    }
    if spec.actions.iter().any(|action| action.label.trim().is_empty()) {
        return Err(AppError::bad_request("action label is required"));
    }
    Ok(())
}

pub async fn remove_notification(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> StatusCode {
    state.notifications.remove_notification(&NotificationId::from(id));
    StatusCode::NO_CONTENT
}

pub async fn dismiss_notification(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> StatusCode {
    state.notifications.dismiss(&NotificationId::from(id));
    StatusCode::NO_CONTENT
}

pub async fn clear_notifications(State(state): State<AppState>) -> StatusCode {
    state.notifications.clear_all();
    StatusCode::NO_CONTENT
}

pub async fn dismiss_all_notifications(State(state): State<AppState>) -> StatusCode {
    state.notifications.dismiss_all();
    StatusCode::NO_CONTENT
}

pub async fn invoke_notification_action(
    Path((id, index)): Path<(String, usize)>,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<NotificationAction>, AppError> {
    // A bare POST closes the notification; a body must be well-formed.
    let close = if body.is_empty() {
        true
    } else {
        let Json(request) = Json::<InvokeActionRequest>::from_bytes(&body)?;
        request.close.unwrap_or(true)
    };
    let id = NotificationId::from(id);

    state
        .notifications
        .invoke_action(&id, index, close)
        .map(Json)
        .ok_or_else(|| AppError::not_found("notification action not found"))
}

pub async fn publish_game_event(
    State(state): State<AppState>,
    Json(event): Json<GameEvent>,
) -> Result<Json<CreatedResponse>, AppError> {
    let spec = NotificationSpec::from(&event);
    validate_spec(&spec)?;

    let id = state.notifications.add_notification(spec);
    tracing::info!(event = event.name(), notification_id = %id, "game event published");
    Ok(Json(CreatedResponse { id }))
}
