mod logic;
mod systems;

use crate::scene::systems::*;
use bevy::prelude::*;

/// Lights, window sizing and the fixed-height viewport the globe is drawn into.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (apply_window_config, spawn_lights))
            .add_systems(Update, fit_camera_viewport);
    }
}
