// src/predictions/mod.rs

pub mod definitions;
pub mod errors;
pub mod events;
pub mod navigation;
pub mod plugin;
pub mod resources;

pub(crate) mod systems;

pub use errors::PredictionError;
pub use plugin::PredictionsPlugin;
