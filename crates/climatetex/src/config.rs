use crate::canvas::Fill;
use crate::metrics::ClimateMetrics;
use crate::region::{GLOBAL_REGION, RegionConfig, default_regions};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};

pub const CONFIG_PATH: &str = "climate_globe.toml";

static CONFIG: OnceLock<Mutex<GlobeConfig>> = OnceLock::new();

/// Get a copy of the current configuration, loading it on first use.
///
/// A missing or invalid file is reported and replaced by the defaults, the
/// globe should still come up with the reference look.
pub fn get_config() -> GlobeConfig {
    let config_mutex = CONFIG.get_or_init(|| {
        let config = GlobeConfig::load_from_file(CONFIG_PATH).unwrap_or_else(|err| {
            log::warn!("Using default globe config, could not load {CONFIG_PATH}: {err}");
            GlobeConfig::default()
        });
        Mutex::new(config)
    });
    config_mutex
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub texture: TextureConfig,
    pub globe: GlobeMeshConfig,
    pub scene: SceneConfig,
    pub camera: CameraConfig,
    pub inputs: InputsConfig,
    pub regions: Vec<RegionConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    pub width: u32,
    pub height: u32,
    /// Temperatures strictly above this are "hot"
    pub hot_above: f64,
    /// Temperatures strictly above this (and not hot) are "mid"
    pub mid_above: f64,
    pub hot_color: [u8; 3],
    pub mid_color: [u8; 3],
    pub cool_color: [u8; 3],
    /// Bottom stop of the background gradient
    pub water_color: [u8; 3],
    pub highlight: Fill,
    pub dots: DotConfig,
    pub markers: MarkerConfig,
    /// Upper bound for dots and for markers, each
    pub max_decorations: usize,
    /// Fixed seed for decoration placement; random when absent
    pub decoration_seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    pub color: [u8; 3],
    pub radius: f32,
    /// Dots per unit of precipitation
    pub per_unit: f64,
    pub base_alpha: f32,
    /// Added opacity per unit of precipitation
    pub alpha_per_unit: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub fill: Fill,
    pub width: f32,
    pub height: f32,
    /// Extreme events represented by one marker
    pub events_per_marker: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeMeshConfig {
    pub radius: f32,
    pub sectors: u32,
    pub stacks: u32,
    pub specular_color: [u8; 3],
    /// Phong exponent, mapped to roughness for the PBR material
    pub shininess: f32,
    /// Radians added around the vertical axis every rendered frame
    pub rotation_per_frame: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Logical height of the globe viewport; width always spans the window
    pub viewport_height: f32,
    pub clear_color: [u8; 3],
    /// 0..1, relative to full ambient brightness
    pub ambient_intensity: f32,
    pub point_light_position: [f32; 3],
    /// 0..1, relative to full point light power
    pub point_light_intensity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub fov_degrees: f32,
    pub enable_rotate: bool,
    pub enable_zoom: bool,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    /// One unit is a full orbit every 60 seconds at 60 fps
    pub auto_rotate_speed: f32,
    /// Radians per pixel of drag
    pub rotate_sensitivity: f32,
    /// Distance scale per wheel notch
    pub zoom_scale: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    pub region: String,
    pub metrics: ClimateMetrics,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            texture: TextureConfig::default(),
            globe: GlobeMeshConfig::default(),
            scene: SceneConfig::default(),
            camera: CameraConfig::default(),
            inputs: InputsConfig::default(),
            regions: default_regions(),
        }
    }
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 512,
            hot_above: 2.0,
            mid_above: 1.0,
            hot_color: [0xef, 0x44, 0x44],
            mid_color: [0xf9, 0x73, 0x16],
            cool_color: [0x22, 0xc5, 0x5e],
            water_color: [0x3b, 0x82, 0xf6],
            highlight: Fill::new([255, 255, 255], 0.2),
            dots: DotConfig::default(),
            markers: MarkerConfig::default(),
            max_decorations: 100_000,
            decoration_seed: None,
        }
    }
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            color: [255, 255, 255],
            radius: 1.0,
            per_unit: 100.0,
            base_alpha: 0.1,
            alpha_per_unit: 1.0 / 20.0,
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            fill: Fill::new([255, 200, 0], 0.3),
            width: 10.0,
            height: 10.0,
            events_per_marker: 2.0,
        }
    }
}

impl Default for GlobeMeshConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            sectors: 64,
            stacks: 64,
            specular_color: [0x33, 0x33, 0x33],
            shininess: 5.0,
            rotation_per_frame: 0.001,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            viewport_height: 600.0,
            clear_color: [0x0f, 0x17, 0x2a],
            ambient_intensity: 0.5,
            point_light_position: [10.0, 10.0, 10.0],
            point_light_intensity: 1.0,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 6.0],
            fov_degrees: 45.0,
            enable_rotate: true,
            enable_zoom: true,
            min_distance: 4.0,
            max_distance: 8.0,
            auto_rotate: false,
            auto_rotate_speed: 0.5,
            rotate_sensitivity: 0.005,
            zoom_scale: 0.95,
        }
    }
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            region: GLOBAL_REGION.to_string(),
            metrics: ClimateMetrics::default(),
        }
    }
}

impl GlobeConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GlobeConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Region names offered to the user, the global sentinel first.
    pub fn region_names(&self) -> Vec<String> {
        std::iter::once(GLOBAL_REGION.to_string())
            .chain(self.regions.iter().map(|region| region.name.clone()))
            .collect()
    }
}
