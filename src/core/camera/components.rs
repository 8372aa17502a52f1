use bevy::prelude::*;

#[derive(Component, Reflect)]
#[reflect(Component)]
pub struct MainCamera;

/// Camera position expressed around a fixed target. Panning is not supported,
/// so the target never moves.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct OrbitCamera {
    pub target: Vec3,
    /// Angle around the vertical axis, 0 looks down -Z from +Z
    pub yaw: f32,
    /// Elevation above the equator plane
    pub pitch: f32,
    pub distance: f32,
}
