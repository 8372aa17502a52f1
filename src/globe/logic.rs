use crate::globe::resources::ClimateInputs;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::TAU;

pub fn needs_regeneration(previous: Option<&ClimateInputs>, current: &ClimateInputs) -> bool {
    previous != Some(current)
}

pub fn advance_rotation(angle: f64, step: f64) -> f64 {
    angle + step
}

/// Angle to hand to the transform, folded into one turn.
pub fn render_angle(angle: f64) -> f32 {
    angle.rem_euclid(TAU) as f32
}

/// Blinn-Phong exponent to perceptual roughness, `sqrt(2 / (n + 2))`.
pub fn roughness_from_shininess(shininess: f32) -> f32 {
    (2.0 / (shininess.max(0.0) + 2.0)).sqrt().clamp(0.089, 1.0)
}

pub fn decoration_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climatetex::ClimateMetrics;
    use rand::Rng;
    use rstest::rstest;

    fn inputs(region: &str, temperature: &str) -> ClimateInputs {
        ClimateInputs {
            region: region.to_string(),
            metrics: ClimateMetrics::new(temperature, "0.3", "0.1", "4"),
        }
    }

    #[test]
    fn test_first_paint_always_happens() {
        assert!(needs_regeneration(None, &inputs("Global", "1.0")));
    }

    #[test]
    fn test_identical_inputs_do_not_repaint() {
        let previous = inputs("Asia", "2.5");
        assert!(!needs_regeneration(Some(&previous), &inputs("Asia", "2.5")));
    }

    #[rstest]
    #[case(inputs("Europe", "2.5"))]
    #[case(inputs("Asia", "2.6"))]
    #[case(inputs("Asia", "2.50"))]
    fn test_any_change_repaints(#[case] current: ClimateInputs) {
        let previous = inputs("Asia", "2.5");
        assert!(needs_regeneration(Some(&previous), &current));
    }

    #[test]
    fn test_rotation_is_monotonic_and_frame_based() {
        let mut angle = 0.0;
        for _ in 0..1000 {
            let next = advance_rotation(angle, 0.001);
            assert!(next > angle);
            angle = next;
        }
        assert!((angle - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_survives_large_angles() {
        // After days of frames an f32 accumulator would no longer move
        let angle = 100_000.0;
        assert!(advance_rotation(angle, 0.001) > angle);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(TAU + 0.5, 0.5)]
    #[case(-0.5, TAU - 0.5)]
    fn test_render_angle_folds(#[case] angle: f64, #[case] expected: f64) {
        assert!((render_angle(angle) as f64 - expected).abs() < 1e-5);
    }

    #[rstest]
    #[case(5.0, (2.0f32 / 7.0).sqrt())]
    #[case(0.0, 1.0)]
    #[case(1_000_000.0, 0.089)]
    fn test_roughness_from_shininess(#[case] shininess: f32, #[case] expected: f32) {
        assert!((roughness_from_shininess(shininess) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = decoration_rng(Some(9));
        let mut b = decoration_rng(Some(9));
        let xs: Vec<u32> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }
}
