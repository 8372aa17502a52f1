use crate::globe::logic::decoration_rng;
use bevy::prelude::*;
use climatetex::config::InputsConfig;
use climatetex::{ClimateMetrics, ClimateTexture, RegionRect, TemperatureBand, TexturePainter};
use rand::rngs::StdRng;

/// Region and metrics currently shown on the globe. Anything may write it;
/// the globe repaints when the value actually changes.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ClimateInputs {
    pub region: String,
    pub metrics: ClimateMetrics,
}

impl ClimateInputs {
    pub fn from_config(inputs: &InputsConfig) -> Self {
        Self {
            region: inputs.region.clone(),
            metrics: inputs.metrics.clone(),
        }
    }
}

/// The inputs the current texture was painted from; `None` before the first paint.
#[derive(Resource, Default)]
pub struct PreviousClimateInputs(pub Option<ClimateInputs>);

#[derive(Resource, Deref)]
pub struct GlobePainter(pub TexturePainter);

/// Random source for decoration placement.
#[derive(Resource)]
pub struct DecorationRng(pub StdRng);

impl DecorationRng {
    pub fn new(seed: Option<u64>) -> Self {
        Self(decoration_rng(seed))
    }
}

/// What the last repaint produced, for display.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct TextureSummary {
    pub band: Option<TemperatureBand>,
    pub highlight: Option<RegionRect>,
    pub dots: usize,
    pub markers: usize,
    pub regenerations: u64,
}

impl TextureSummary {
    pub fn record(&mut self, texture: &ClimateTexture) {
        self.band = Some(texture.band);
        self.highlight = texture.highlight;
        self.dots = texture.dots;
        self.markers = texture.markers;
        self.regenerations += 1;
    }
}
