pub mod effects;
pub mod haptics;
