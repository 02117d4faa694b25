use axum::Router;

use crate::AppState;

mod error;
mod handlers;
mod routes;

pub use error::AppError;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health())
        .nest(
            "/v1",
            Router::new()
                .merge(routes::notifications())
                .merge(routes::events()),
        )
        .with_state(state)
}
