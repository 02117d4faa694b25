use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use herald::app::notifications::NotificationStore;
use herald::config::AppConfig;
use herald::{http, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let notifications = NotificationStore::new(config.notification_policy());
    let state = AppState {
        notifications: notifications.clone(),
    };

    let mut app: Router = http::router(state).layer(TraceLayer::new_for_http());
    if config.cors_allow_any {
        app = app.layer(CorsLayer::permissive());
    }

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!(
        default_duration_ms = config.default_duration_ms,
        badge_cap = config.badge_cap,
        "listening on {}",
        config.http_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Nothing outlives the process; drop pending toasts and their timers.
    let discarded = notifications.clear_all();
    tracing::info!(discarded = discarded, "notification store torn down");

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = match signal(SignalKind::terminate()) {
            Ok(stream) => Some(stream),
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                None
            }
        };

        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(err) = result {
                    tracing::error!(error = %err, "failed to listen for Ctrl+C");
                }
            }
            Some(_) = async {
                match terminate.as_mut() {
                    Some(stream) => stream.recv().await,
                    None => std::future::pending().await,
                }
            } => {}
        }
    }

    #[cfg(not(unix))]
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for Ctrl+C");
    }

    tracing::info!("shutdown requested, draining connections");
}
