pub mod components;
mod logic;
pub mod resources;
mod systems;

use crate::core::settings::GlobeSettings;
use crate::globe::components::GlobeSpin;
use crate::globe::resources::*;
use crate::globe::systems::*;
use bevy::prelude::*;
use climatetex::TexturePainter;

/// The textured, slowly spinning sphere.
///
/// The texture is repainted whenever `ClimateInputs` differs from what was
/// last painted; rotation advances a fixed step every frame.
pub struct GlobePlugin;

impl Plugin for GlobePlugin {
    fn build(&self, app: &mut App) {
        let settings = app.world().resource::<GlobeSettings>().clone();

        app.insert_resource(ClimateInputs::from_config(&settings.inputs))
            .insert_resource(GlobePainter(TexturePainter::from_config(&settings)))
            .insert_resource(DecorationRng::new(settings.texture.decoration_seed))
            .init_resource::<PreviousClimateInputs>()
            .init_resource::<TextureSummary>()
            .register_type::<GlobeSpin>()
            .add_systems(Startup, spawn_globe)
            .add_systems(Update, (regenerate_globe_texture, spin_globe));
    }
}
