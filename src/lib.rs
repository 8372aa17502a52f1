mod core;
mod globe;
mod inputs;
mod scene;

use crate::core::camera::CameraPlugin;
use crate::core::settings::GlobeSettings;
use crate::globe::GlobePlugin;
use crate::inputs::InputsPlugin;
use crate::scene::ScenePlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;

/// Everything needed to show the climate globe: config, camera, lights, the
/// globe itself and the panel feeding it region and metrics.
pub struct ClimateGlobePlugin;

impl Plugin for ClimateGlobePlugin {
    fn build(&self, app: &mut App) {
        let config = climatetex::get_config();
        let [r, g, b] = config.scene.clear_color;

        app.insert_resource(ClearColor(Color::srgb_u8(r, g, b)))
            .insert_resource(GlobeSettings(config))
            .add_plugins((CameraPlugin, ScenePlugin, GlobePlugin, InputsPlugin));

        #[cfg(debug_assertions)]
        {
            app.add_plugins((
                FrameTimeDiagnosticsPlugin::default(),
                LogDiagnosticsPlugin::default(),
            ));
        }
    }
}
