pub mod canvas;
pub mod config;
pub mod metrics;
pub mod painter;
pub mod region;

pub use config::get_config;
pub use metrics::{ClimateMetrics, TemperatureBand};
pub use painter::{ClimateTexture, TexturePainter};
pub use region::{GLOBAL_REGION, RegionRect};
