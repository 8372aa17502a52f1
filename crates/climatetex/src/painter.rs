use crate::canvas::{Fill, fill_circle, fill_rect, fill_triangle, fill_vertical_gradient};
use crate::config::{GlobeConfig, TextureConfig};
use crate::metrics::{ClimateMetrics, TemperatureBand};
use crate::region::{RegionConfig, RegionRect, find_region};
use glam::Vec2;
use image::RgbaImage;
use rand::Rng;

/// One freshly painted globe surface plus what went into it.
#[derive(Debug, Clone)]
pub struct ClimateTexture {
    pub image: RgbaImage,
    pub band: TemperatureBand,
    pub highlight: Option<RegionRect>,
    pub dots: usize,
    pub markers: usize,
    /// Parsed for completeness; nothing is drawn from it yet
    pub sea_level: f64,
}

/// Paints equirectangular climate textures. Holds no state between paints.
#[derive(Debug, Clone)]
pub struct TexturePainter {
    texture: TextureConfig,
    regions: Vec<RegionConfig>,
}

impl Default for TexturePainter {
    fn default() -> Self {
        Self::from_config(&GlobeConfig::default())
    }
}

impl TexturePainter {
    pub fn new(texture: TextureConfig, regions: Vec<RegionConfig>) -> Self {
        Self { texture, regions }
    }

    pub fn from_config(config: &GlobeConfig) -> Self {
        Self::new(config.texture.clone(), config.regions.clone())
    }

    pub fn band_color(&self, band: TemperatureBand) -> [u8; 3] {
        match band {
            TemperatureBand::Hot => self.texture.hot_color,
            TemperatureBand::Mid => self.texture.mid_color,
            TemperatureBand::Cool => self.texture.cool_color,
        }
    }

    pub fn dot_count(&self, precipitation: f64) -> usize {
        decoration_count(
            precipitation * self.texture.dots.per_unit,
            self.texture.max_decorations,
        )
    }

    pub fn marker_count(&self, extreme_events: f64) -> usize {
        decoration_count(
            extreme_events / self.texture.markers.events_per_marker,
            self.texture.max_decorations,
        )
    }

    pub fn dot_fill(&self, precipitation: f64) -> Fill {
        let dots = &self.texture.dots;
        let alpha = (dots.base_alpha + precipitation as f32 * dots.alpha_per_unit).clamp(0.0, 1.0);
        Fill::new(dots.color, alpha)
    }

    /// Paint a texture for `selected_region` and `metrics`.
    ///
    /// Only decoration placement draws from `rng`; the gradient and the
    /// highlight depend on the inputs alone.
    pub fn paint<R: Rng>(
        &self,
        selected_region: &str,
        metrics: &ClimateMetrics,
        rng: &mut R,
    ) -> ClimateTexture {
        let config = &self.texture;
        let mut image = RgbaImage::new(config.width, config.height);

        let temperature = metrics.temperature();
        let sea_level = metrics.sea_level();
        let band = TemperatureBand::classify(temperature, config.hot_above, config.mid_above);
        fill_vertical_gradient(&mut image, self.band_color(band), config.water_color);

        let highlight = find_region(&self.regions, selected_region);
        if let Some(rect) = highlight {
            fill_rect(&mut image, rect, config.highlight);
        }

        let precipitation = metrics.precipitation();
        let dots = self.dot_count(precipitation);
        let dot_fill = self.dot_fill(precipitation);
        for _ in 0..dots {
            let center = random_point(rng, config.width, config.height);
            fill_circle(&mut image, center, config.dots.radius, dot_fill);
        }

        let markers = self.marker_count(metrics.extreme_events());
        let half_width = config.markers.width / 2.0;
        for _ in 0..markers {
            let apex = random_point(rng, config.width, config.height);
            fill_triangle(
                &mut image,
                apex,
                apex + Vec2::new(half_width, config.markers.height),
                apex + Vec2::new(-half_width, config.markers.height),
                config.markers.fill,
            );
        }

        ClimateTexture {
            image,
            band,
            highlight,
            dots,
            markers,
            sea_level,
        }
    }
}

/// `floor(amount)` capped at `max`; NaN and non-positive amounts give zero.
fn decoration_count(amount: f64, max: usize) -> usize {
    if amount.is_nan() || amount <= 0.0 {
        return 0;
    }
    // Float-to-int casts saturate, so +inf lands on the cap
    (amount.floor() as usize).min(max)
}

fn random_point<R: Rng>(rng: &mut R, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        rng.random::<f32>() * width as f32,
        rng.random::<f32>() * height as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn metrics(temperature: &str, precipitation: &str, extreme_events: &str) -> ClimateMetrics {
        ClimateMetrics::new(temperature, precipitation, "0.1", extreme_events)
    }

    fn assert_close(actual: &[u8], expected: [u8; 3]) {
        for channel in 0..3 {
            let diff = (actual[channel] as i16 - expected[channel] as i16).abs();
            assert!(diff <= 1, "pixel {:?} expected about {:?}", actual, expected);
        }
    }

    #[test]
    fn test_asia_hot_example() {
        let painter = TexturePainter::default();
        let texture = painter.paint(
            "Asia",
            &ClimateMetrics::new("2.5", "0.3", "0.1", "4"),
            &mut rng(),
        );

        assert_eq!(texture.band, TemperatureBand::Hot);
        assert_eq!(texture.highlight, Some(RegionRect::new(600, 50, 250, 200)));
        assert_eq!(texture.dots, 30);
        assert_eq!(texture.markers, 2);
        assert_eq!(texture.sea_level, 0.1);
        assert_eq!(texture.image.dimensions(), (1024, 512));
    }

    #[test]
    fn test_degraded_inputs_example() {
        let painter = TexturePainter::default();
        let texture = painter.paint(
            "Mars",
            &ClimateMetrics::new("abc", "-1", "0", "0"),
            &mut rng(),
        );

        assert_eq!(texture.band, TemperatureBand::Cool);
        assert_eq!(texture.highlight, None);
        assert_eq!(texture.dots, 0);
        assert_eq!(texture.markers, 0);
        assert_close(texture.image.get_pixel(0, 0).0.as_slice(), [0x22, 0xc5, 0x5e]);
    }

    #[rstest]
    #[case("2.5", [0xef, 0x44, 0x44])]
    #[case("1.5", [0xf9, 0x73, 0x16])]
    #[case("2", [0xf9, 0x73, 0x16])]
    #[case("1", [0x22, 0xc5, 0x5e])]
    #[case("-0.5", [0x22, 0xc5, 0x5e])]
    #[case("n/a", [0x22, 0xc5, 0x5e])]
    #[case("inf", [0x22, 0xc5, 0x5e])]
    #[case("infinity", [0x22, 0xc5, 0x5e])]
    #[case("nan", [0x22, 0xc5, 0x5e])]
    #[case("Infinity", [0xef, 0x44, 0x44])]
    fn test_gradient_top_follows_band(#[case] temperature: &str, #[case] top: [u8; 3]) {
        let painter = TexturePainter::default();
        let texture = painter.paint("Global", &metrics(temperature, "0", "0"), &mut rng());

        assert_close(texture.image.get_pixel(0, 0).0.as_slice(), top);
        assert_close(texture.image.get_pixel(1023, 0).0.as_slice(), top);
        assert_close(texture.image.get_pixel(512, 511).0.as_slice(), [0x3b, 0x82, 0xf6]);
    }

    #[rstest]
    #[case("North America")]
    #[case("Europe")]
    #[case("Asia")]
    #[case("Africa")]
    #[case("South America")]
    #[case("Oceania")]
    fn test_highlight_brightens_region_bounds(#[case] region: &str) {
        let painter = TexturePainter::default();
        let plain = painter.paint("Global", &metrics("0", "0", "0"), &mut rng());
        let lit = painter.paint(region, &metrics("0", "0", "0"), &mut rng());
        let rect = lit.highlight.unwrap();

        for (x, y, pixel) in lit.image.enumerate_pixels() {
            let base = plain.image.get_pixel(x, y);
            if rect.contains(x, y) {
                let expected = base.0.map(|c| (c as f32 + (255.0 - c as f32) * 0.2).round() as u8);
                assert_close(pixel.0.as_slice(), [expected[0], expected[1], expected[2]]);
            } else {
                assert_eq!(pixel, base, "pixel ({x}, {y}) outside {rect:?} changed");
            }
        }
    }

    #[rstest]
    #[case("Global")]
    #[case("Atlantis")]
    #[case("")]
    fn test_no_highlight_leaves_gradient_untouched(#[case] region: &str) {
        let painter = TexturePainter::default();
        let plain = painter.paint("Global", &metrics("3", "0", "0"), &mut rng());
        let other = painter.paint(region, &metrics("3", "0", "0"), &mut rng());

        assert_eq!(other.highlight, None);
        assert_eq!(other.image, plain.image);
    }

    #[rstest]
    #[case("0.3", 30)]
    #[case("0", 0)]
    #[case("0.015", 1)]
    #[case("1.25", 125)]
    #[case("-1", 0)]
    #[case("wet", 0)]
    #[case("inf", 0)]
    fn test_dot_count(#[case] precipitation: &str, #[case] expected: usize) {
        let painter = TexturePainter::default();
        let texture = painter.paint("Global", &metrics("0", precipitation, "0"), &mut rng());
        assert_eq!(texture.dots, expected);
    }

    #[rstest]
    #[case("4", 2)]
    #[case("5", 2)]
    #[case("1.9", 0)]
    #[case("2", 1)]
    #[case("-4", 0)]
    #[case("many", 0)]
    fn test_marker_count(#[case] extreme_events: &str, #[case] expected: usize) {
        let painter = TexturePainter::default();
        let texture = painter.paint("Global", &metrics("0", "0", extreme_events), &mut rng());
        assert_eq!(texture.markers, expected);
    }

    #[test]
    fn test_decorations_are_capped() {
        let painter = TexturePainter::default();
        assert_eq!(painter.dot_count(1e12), 100_000);
        assert_eq!(painter.marker_count(f64::MAX), 100_000);
        assert_eq!(painter.dot_count(f64::INFINITY), 100_000);
        assert_eq!(painter.marker_count(f64::INFINITY), 100_000);
        assert_eq!(painter.dot_count(f64::NEG_INFINITY), 0);
        assert_eq!(painter.dot_count(f64::NAN), 0);
    }

    #[rstest]
    #[case(0.3, 0.115)]
    #[case(0.0, 0.1)]
    #[case(40.0, 1.0)]
    #[case(-10.0, 0.0)]
    fn test_dot_opacity_scales_with_precipitation(#[case] precipitation: f64, #[case] alpha: f32) {
        let fill = TexturePainter::default().dot_fill(precipitation);
        assert!((fill.alpha - alpha).abs() < 1e-6, "alpha was {}", fill.alpha);
        assert_eq!(fill.color, [255, 255, 255]);
    }

    #[test]
    fn test_decorations_change_pixels() {
        let painter = TexturePainter::default();
        let plain = painter.paint("Global", &metrics("0", "0", "0"), &mut rng());
        let busy = painter.paint("Global", &metrics("0", "2", "40"), &mut rng());
        assert_ne!(busy.image, plain.image);

        // Markers are amber: some pixel gains red over its base
        let amber = busy
            .image
            .enumerate_pixels()
            .any(|(x, y, pixel)| pixel[0] > plain.image.get_pixel(x, y)[0] + 40);
        assert!(amber);
    }

    #[test]
    fn test_same_inputs_same_intent() {
        let painter = TexturePainter::default();
        let inputs = metrics("1.7", "0.5", "6");
        let first = painter.paint("Europe", &inputs, &mut StdRng::seed_from_u64(1));
        let second = painter.paint("Europe", &inputs, &mut StdRng::seed_from_u64(2));

        assert_eq!(first.band, second.band);
        assert_eq!(first.highlight, second.highlight);
        assert_eq!((first.dots, first.markers), (second.dots, second.markers));

        // Same seed reproduces the exact raster
        let again = painter.paint("Europe", &inputs, &mut StdRng::seed_from_u64(1));
        assert_eq!(again.image, first.image);
    }

    #[rstest]
    #[case(64, 32)]
    #[case(1, 1)]
    fn test_raster_size_comes_from_config(#[case] width: u32, #[case] height: u32) {
        let mut config = GlobeConfig::default();
        config.texture.width = width;
        config.texture.height = height;
        let painter = TexturePainter::from_config(&config);
        let texture = painter.paint("Asia", &metrics("9", "3", "9"), &mut rng());
        assert_eq!(texture.image.dimensions(), (width, height));
    }
}
