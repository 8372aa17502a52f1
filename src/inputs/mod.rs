mod logic;
mod systems;

use crate::core::settings::GlobeSettings;
use crate::inputs::systems::*;
use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

/// Side panel standing in for the host page: it owns the region picker and
/// metric fields and writes them into `ClimateInputs`.
pub struct InputsPlugin;

impl Plugin for InputsPlugin {
    fn build(&self, app: &mut App) {
        let region_names = app.world().resource::<GlobeSettings>().region_names();

        app.add_plugins(EguiPlugin::default())
            .insert_resource(RegionChoices(region_names))
            .add_systems(EguiPrimaryContextPass, render_inputs_panel);
    }
}
