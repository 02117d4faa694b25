pub mod app;
pub mod config;
pub mod domain;
pub mod http;
pub mod infra;

use crate::app::notifications::NotificationStore;

#[derive(Clone)]
pub struct AppState {
    pub notifications: NotificationStore,
}
