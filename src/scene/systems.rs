use crate::core::camera::components::MainCamera;
use crate::core::settings::GlobeSettings;
use crate::scene::logic::{
    POINT_LIGHT_RANGE, ambient_brightness, fit_viewport, point_light_lumens,
};
use bevy::camera::Viewport;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub fn apply_window_config(
    settings: Res<GlobeSettings>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    let scene = &settings.scene;
    window
        .resolution
        .set(scene.window_width as f32, scene.window_height as f32);
}

pub fn spawn_lights(mut commands: Commands, settings: Res<GlobeSettings>) {
    let scene = &settings.scene;

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: ambient_brightness(scene.ambient_intensity),
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: point_light_lumens(scene.point_light_intensity),
            range: POINT_LIGHT_RANGE,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(scene.point_light_position)),
    ));

    info!(
        "Lights spawned (ambient {:.2}, point {:.2} at {:?})",
        scene.ambient_intensity, scene.point_light_intensity, scene.point_light_position
    );
}

/// Keep the globe viewport full width and fixed height as the window changes.
pub fn fit_camera_viewport(
    settings: Res<GlobeSettings>,
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    mut cameras: Query<&mut Camera, With<MainCamera>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let physical = UVec2::new(
        window.resolution.physical_width(),
        window.resolution.physical_height(),
    );
    let Some(rect) = fit_viewport(
        physical,
        window.resolution.scale_factor(),
        settings.scene.viewport_height,
    ) else {
        return;
    };

    for mut camera in &mut cameras {
        let current = camera
            .viewport
            .as_ref()
            .map(|viewport| (viewport.physical_position, viewport.physical_size));
        if current == Some((rect.position, rect.size)) {
            continue;
        }
        camera.viewport = Some(Viewport {
            physical_position: rect.position,
            physical_size: rect.size,
            ..default()
        });
        debug!("Globe viewport set to {}x{}", rect.size.x, rect.size.y);
    }
}
