use bevy::math::UVec2;

/// Ambient brightness (cd/m²) for intensity 1.0
pub const FULL_AMBIENT_BRIGHTNESS: f32 = 500.0;
/// Point light power (lm) for intensity 1.0
pub const FULL_POINT_LIGHT_LUMENS: f32 = 10_000_000.0;
/// Far enough that the light never falls off before reaching the globe
pub const POINT_LIGHT_RANGE: f32 = 100.0;

pub fn ambient_brightness(intensity: f32) -> f32 {
    intensity.max(0.0) * FULL_AMBIENT_BRIGHTNESS
}

pub fn point_light_lumens(intensity: f32) -> f32 {
    intensity.max(0.0) * FULL_POINT_LIGHT_LUMENS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportRect {
    pub position: UVec2,
    pub size: UVec2,
}

/// Full window width, `logical_height` tall (capped at the window), anchored top-left.
///
/// Returns `None` for a zero-sized (minimised) window, where no viewport is valid.
pub fn fit_viewport(
    physical_size: UVec2,
    scale_factor: f32,
    logical_height: f32,
) -> Option<ViewportRect> {
    if physical_size.x == 0 || physical_size.y == 0 {
        return None;
    }
    let wanted = (logical_height.max(1.0) * scale_factor).round() as u32;
    Some(ViewportRect {
        position: UVec2::ZERO,
        size: UVec2::new(physical_size.x, wanted.clamp(1, physical_size.y)),
    })
}
