use axum::{routing::delete, routing::get, routing::post, Router};

use crate::AppState;
use crate::http::handlers;

pub fn health() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health))
}

pub fn notifications() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::list_notifications))
        .route("/notifications", post(handlers::create_notification))
        .route("/notifications", delete(handlers::clear_notifications))
        .route("/notifications/stream", get(handlers::stream_notifications))
        .route(
            "/notifications/dismiss-all",
            post(handlers::dismiss_all_notifications),
        )
        .route("/notifications/:id", delete(handlers::remove_notification))
        .route(
            "/notifications/:id/dismiss",
            post(handlers::dismiss_notification),
        )
        .route(
            "/notifications/:id/actions/:index",
            post(handlers::invoke_notification_action),
        )
}

pub fn events() -> Router<AppState> {
    Router::new().route("/events", post(handlers::publish_game_event))
}
