use crate::core::camera::components::{MainCamera, OrbitCamera};
use crate::core::camera::logic::{
    OrbitInput, orbit_from_position, orbit_translation, update_orbit, wheel_notches,
};
use crate::core::settings::GlobeSettings;
use bevy::input::ButtonInput;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

pub fn spawn_camera(mut commands: Commands, settings: Res<GlobeSettings>) {
    let camera = &settings.camera;
    let position = Vec3::from_array(camera.position);
    let orbit = update_orbit(
        orbit_from_position(position, Vec3::ZERO),
        &OrbitInput::none(),
        camera,
    );

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            ..default()
        }),
        Transform::from_translation(orbit_translation(&orbit)).looking_at(orbit.target, Vec3::Y),
        MainCamera,
        orbit,
    ));

    info!("Camera spawned at distance {:.2}", orbit.distance);
}

pub fn orbit_control(
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mut contexts: EguiContexts,
    settings: Res<GlobeSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut camera_q: Query<(&Camera, &mut Transform, &mut OrbitCamera), With<MainCamera>>,
) {
    // Drain both readers every frame so stale input never replays later
    let drag_delta: Vec2 = mouse_motion.read().map(|ev| ev.delta).sum();
    let wheel: f32 = mouse_wheel
        .read()
        .map(|ev| wheel_notches(ev.unit, ev.y))
        .sum();

    let Ok((camera, mut transform, mut orbit)) = camera_q.single_mut() else {
        return;
    };

    let over_panel = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
        .unwrap_or(false);
    let over_globe = windows
        .single()
        .ok()
        .and_then(|window| window.cursor_position())
        .zip(camera.logical_viewport_rect())
        .is_some_and(|(cursor, viewport)| viewport.contains(cursor));
    let pointer_free = over_globe && !over_panel;

    let input = OrbitInput {
        dragging: pointer_free && mouse_input.pressed(MouseButton::Left),
        drag_delta,
        wheel_notches: if pointer_free { wheel } else { 0.0 },
    };

    let next = update_orbit(*orbit, &input, &settings.camera);
    if next != *orbit {
        *orbit = next;
        *transform = Transform::from_translation(orbit_translation(&next))
            .looking_at(next.target, Vec3::Y);
    }
}
