use crate::globe::resources::TextureSummary;

pub fn summary_lines(summary: &TextureSummary) -> Vec<String> {
    let band = summary.band.map(|band| band.label()).unwrap_or("-");
    let highlight = match summary.highlight {
        Some(rect) => format!(
            "{}x{} at ({}, {})",
            rect.width, rect.height, rect.x, rect.y
        ),
        None => "none".to_string(),
    };
    vec![
        format!("Band: {band}"),
        format!("Highlight: {highlight}"),
        format!("Rain dots: {}", summary.dots),
        format!("Event markers: {}", summary.markers),
        format!("Repaints: {}", summary.regenerations),
    ]
}
