use crate::core::camera::components::OrbitCamera;
use bevy::input::mouse::MouseScrollUnit;
use bevy::math::{Vec2, Vec3};
use climatetex::config::CameraConfig;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Keeps the camera off the poles, where `looking_at` loses its up vector.
pub const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;

/// Pixel-based scroll devices report roughly this much per wheel notch
const PIXELS_PER_NOTCH: f32 = 100.0;

pub struct OrbitInput {
    pub dragging: bool,
    pub drag_delta: Vec2,
    /// Positive zooms in
    pub wheel_notches: f32,
}

impl OrbitInput {
    pub fn none() -> Self {
        Self {
            dragging: false,
            drag_delta: Vec2::ZERO,
            wheel_notches: 0.0,
        }
    }
}

pub fn wheel_notches(unit: MouseScrollUnit, y: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => y,
        MouseScrollUnit::Pixel => y / PIXELS_PER_NOTCH,
    }
}

pub fn orbit_from_position(position: Vec3, target: Vec3) -> OrbitCamera {
    let offset = position - target;
    let distance = offset.length();
    if distance <= f32::EPSILON {
        return OrbitCamera {
            target,
            yaw: 0.0,
            pitch: 0.0,
            distance: 0.0,
        };
    }
    OrbitCamera {
        target,
        yaw: offset.x.atan2(offset.z),
        pitch: (offset.y / distance).asin().clamp(-MAX_PITCH, MAX_PITCH),
        distance,
    }
}

pub fn orbit_translation(orbit: &OrbitCamera) -> Vec3 {
    let (sin_yaw, cos_yaw) = orbit.yaw.sin_cos();
    let (sin_pitch, cos_pitch) = orbit.pitch.sin_cos();
    orbit.target
        + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * orbit.distance
}

/// Yaw added per frame by auto-rotation: speed 1 is one orbit per 3600 frames.
pub fn auto_rotate_step(speed: f32) -> f32 {
    TAU / 60.0 / 60.0 * speed
}

pub fn clamp_distance(distance: f32, config: &CameraConfig) -> f32 {
    // max/min instead of clamp so a misordered config cannot panic
    distance.max(config.min_distance).min(config.max_distance)
}

/// Apply one frame of pointer input to the orbit.
pub fn update_orbit(orbit: OrbitCamera, input: &OrbitInput, config: &CameraConfig) -> OrbitCamera {
    let mut next = orbit;

    if config.enable_rotate && input.dragging && input.drag_delta.length_squared() > 0.0 {
        next.yaw -= input.drag_delta.x * config.rotate_sensitivity;
        next.pitch = (next.pitch + input.drag_delta.y * config.rotate_sensitivity)
            .clamp(-MAX_PITCH, MAX_PITCH);
    } else if config.auto_rotate {
        next.yaw -= auto_rotate_step(config.auto_rotate_speed);
    }

    if config.enable_zoom && input.wheel_notches != 0.0 {
        next.distance *= config.zoom_scale.powf(input.wheel_notches);
    }
    next.distance = clamp_distance(next.distance, config);

    next
}
