use bevy::prelude::*;
use climatetex::config::GlobeConfig;

/// Configuration loaded from `climate_globe.toml` at startup.
#[derive(Resource, Clone, Deref)]
pub struct GlobeSettings(pub GlobeConfig);
