use serde::{Deserialize, Serialize};

/// Region name meaning "whole planet": no highlight is drawn.
pub const GLOBAL_REGION: &str = "Global";

/// Axis-aligned highlight area in raster pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RegionRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionConfig {
    pub name: String,
    pub rect: RegionRect,
}

impl RegionConfig {
    fn new(name: &str, rect: RegionRect) -> Self {
        Self {
            name: name.to_string(),
            rect,
        }
    }
}

pub fn default_regions() -> Vec<RegionConfig> {
    vec![
        RegionConfig::new("North America", RegionRect::new(200, 50, 300, 150)),
        RegionConfig::new("Europe", RegionRect::new(450, 50, 150, 100)),
        RegionConfig::new("Asia", RegionRect::new(600, 50, 250, 200)),
        RegionConfig::new("Africa", RegionRect::new(450, 150, 150, 200)),
        RegionConfig::new("South America", RegionRect::new(300, 200, 150, 200)),
        RegionConfig::new("Oceania", RegionRect::new(700, 250, 200, 150)),
    ]
}

/// Find the highlight for `selected`. The global sentinel and unknown names both give `None`.
pub fn find_region(regions: &[RegionConfig], selected: &str) -> Option<RegionRect> {
    if selected == GLOBAL_REGION {
        return None;
    }
    regions
        .iter()
        .find(|region| region.name == selected)
        .map(|region| region.rect)
}
