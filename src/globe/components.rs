use bevy::prelude::*;

#[derive(Component)]
pub struct GlobeEntity;

/// Accumulated rotation about the vertical axis. Only `spin_globe` writes it.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct GlobeSpin {
    /// Radians since spawn; f64 so the per-frame step survives long sessions
    pub angle: f64,
    pub step: f64,
}
