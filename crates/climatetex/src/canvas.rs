// Minimal 2D drawing on an RGBA raster: gradient fill plus alpha-blended
// rectangles, discs and triangles. Shapes are rasterised by pixel centre.

use crate::region::RegionRect;
use glam::Vec2;
use image::{Pixel, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// A colour with straight (non-premultiplied) opacity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: [u8; 3],
    pub alpha: f32,
}

impl Fill {
    pub const fn new(color: [u8; 3], alpha: f32) -> Self {
        Self { color, alpha }
    }

    fn to_rgba(self) -> Option<Rgba<u8>> {
        // NaN opacity paints nothing
        if self.alpha.is_nan() || self.alpha <= 0.0 {
            return None;
        }
        let alpha = (self.alpha.min(1.0) * 255.0).round() as u8;
        let [r, g, b] = self.color;
        Some(Rgba([r, g, b, alpha]))
    }
}

/// Top-to-bottom linear gradient over the whole raster, sampled at pixel centres.
pub fn fill_vertical_gradient(image: &mut RgbaImage, top: [u8; 3], bottom: [u8; 3]) {
    let height = image.height().max(1) as f32;
    for (_, y, pixel) in image.enumerate_pixels_mut() {
        let t = (y as f32 + 0.5) / height;
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        *pixel = Rgba([
            mix(top[0], bottom[0]),
            mix(top[1], bottom[1]),
            mix(top[2], bottom[2]),
            255,
        ]);
    }
}

pub fn fill_rect(image: &mut RgbaImage, rect: RegionRect, fill: Fill) {
    let Some(src) = fill.to_rgba() else {
        return;
    };
    let x_end = rect.x.saturating_add(rect.width).min(image.width());
    let y_end = rect.y.saturating_add(rect.height).min(image.height());
    for y in rect.y..y_end {
        for x in rect.x..x_end {
            image.get_pixel_mut(x, y).blend(&src);
        }
    }
}

pub fn fill_circle(image: &mut RgbaImage, center: Vec2, radius: f32, fill: Fill) {
    let Some(src) = fill.to_rgba() else {
        return;
    };
    let min = center - Vec2::splat(radius);
    let max = center + Vec2::splat(radius);
    let radius_sq = radius * radius;
    for_each_pixel_in(image, min, max, |image, x, y, centre| {
        if centre.distance_squared(center) <= radius_sq {
            image.get_pixel_mut(x, y).blend(&src);
        }
    });
}

pub fn fill_triangle(image: &mut RgbaImage, a: Vec2, b: Vec2, c: Vec2, fill: Fill) {
    let Some(src) = fill.to_rgba() else {
        return;
    };
    let area = edge(a, b, c);
    if area == 0.0 {
        return;
    }
    let min = a.min(b).min(c);
    let max = a.max(b).max(c);
    for_each_pixel_in(image, min, max, |image, x, y, p| {
        let w0 = edge(b, c, p) / area;
        let w1 = edge(c, a, p) / area;
        let w2 = edge(a, b, p) / area;
        if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
            image.get_pixel_mut(x, y).blend(&src);
        }
    });
}

fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Visit every in-bounds pixel whose box overlaps `[min, max]`, passing its centre.
fn for_each_pixel_in(
    image: &mut RgbaImage,
    min: Vec2,
    max: Vec2,
    mut visit: impl FnMut(&mut RgbaImage, u32, u32, Vec2),
) {
    let (width, height) = image.dimensions();
    if !(min.is_finite() && max.is_finite()) || width == 0 || height == 0 {
        return;
    }
    let x0 = min.x.floor().max(0.0) as u32;
    let y0 = min.y.floor().max(0.0) as u32;
    let x1 = (max.x.ceil().max(0.0) as u32).min(width);
    let y1 = (max.y.ceil().max(0.0) as u32).min(height);
    for y in y0..y1 {
        for x in x0..x1 {
            let centre = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            visit(image, x, y, centre);
        }
    }
}
