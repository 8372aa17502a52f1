use crate::core::settings::GlobeSettings;
use crate::globe::components::{GlobeEntity, GlobeSpin};
use crate::globe::logic::{
    advance_rotation, needs_regeneration, render_angle, roughness_from_shininess,
};
use crate::globe::resources::*;
use bevy::asset::{Assets, RenderAssetUsages};
use bevy::pbr::{MeshMaterial3d, StandardMaterial};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use climatetex::ClimateTexture;

pub fn spawn_globe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<GlobeSettings>,
) {
    let globe = &settings.globe;
    let mesh = meshes.add(Sphere::new(globe.radius).mesh().uv(globe.sectors, globe.stacks));

    // The texture is bound by the first regeneration
    let [r, g, b] = globe.specular_color;
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        specular_tint: Color::srgb_u8(r, g, b),
        perceptual_roughness: roughness_from_shininess(globe.shininess),
        metallic: 0.0,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::default(),
        GlobeEntity,
        GlobeSpin {
            angle: 0.0,
            step: globe.rotation_per_frame as f64,
        },
    ));

    info!(
        "Globe spawned (radius {}, {}x{} segments)",
        globe.radius, globe.sectors, globe.stacks
    );
}

/// Repaint and rebind the globe texture, once per change of `ClimateInputs`.
pub fn regenerate_globe_texture(
    inputs: Res<ClimateInputs>,
    mut previous: ResMut<PreviousClimateInputs>,
    painter: Res<GlobePainter>,
    mut rng: ResMut<DecorationRng>,
    mut summary: ResMut<TextureSummary>,
    mut images: ResMut<Assets<Image>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    globe_q: Query<&MeshMaterial3d<StandardMaterial>, With<GlobeEntity>>,
) {
    if !needs_regeneration(previous.0.as_ref(), &inputs) {
        return;
    }
    let Ok(material_handle) = globe_q.single() else {
        return;
    };
    let Some(material) = materials.get_mut(&material_handle.0) else {
        return;
    };

    let texture = painter.paint(&inputs.region, &inputs.metrics, &mut rng.0);
    summary.record(&texture);
    info!(
        "Globe texture repainted: region {:?}, {} band, highlight {:?}, {} dots, {} markers",
        inputs.region,
        texture.band.label(),
        texture.highlight,
        texture.dots,
        texture.markers
    );
    debug!("Sea level {} parsed, not visualised", texture.sea_level);

    // Replacing the handle drops the previous image; a fresh one is uploaded
    material.base_color_texture = Some(images.add(climate_texture_image(texture)));
    previous.0 = Some(inputs.clone());
}

pub fn spin_globe(mut globe_q: Query<(&mut Transform, &mut GlobeSpin), With<GlobeEntity>>) {
    for (mut transform, mut spin) in &mut globe_q {
        spin.angle = advance_rotation(spin.angle, spin.step);
        transform.rotation = Quat::from_rotation_y(render_angle(spin.angle));
    }
}

fn climate_texture_image(texture: ClimateTexture) -> Image {
    let (width, height) = texture.image.dimensions();
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        texture.image.into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}
