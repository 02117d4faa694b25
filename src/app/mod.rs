pub mod notifications;
pub mod presets;
pub(crate) mod scheduler;
