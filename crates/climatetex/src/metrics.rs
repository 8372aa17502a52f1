use serde::{Deserialize, Serialize};

/// The four climate readings driving the globe texture.
///
/// Values are kept as the decimal strings the caller supplied and are only
/// parsed while painting, so a malformed reading degrades the picture instead
/// of being rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateMetrics {
    /// Temperature anomaly in °C
    pub temperature: String,
    /// Relative precipitation change, used as an intensity multiplier
    pub precipitation: String,
    /// Sea level rise; parsed but not drawn
    pub sea_level: String,
    /// Extreme event count or rate
    pub extreme_events: String,
}

impl ClimateMetrics {
    pub fn new(
        temperature: impl Into<String>,
        precipitation: impl Into<String>,
        sea_level: impl Into<String>,
        extreme_events: impl Into<String>,
    ) -> Self {
        Self {
            temperature: temperature.into(),
            precipitation: precipitation.into(),
            sea_level: sea_level.into(),
            extreme_events: extreme_events.into(),
        }
    }

    pub fn temperature(&self) -> f64 {
        parse_metric(&self.temperature)
    }

    pub fn precipitation(&self) -> f64 {
        parse_metric(&self.precipitation)
    }

    pub fn sea_level(&self) -> f64 {
        parse_metric(&self.sea_level)
    }

    pub fn extreme_events(&self) -> f64 {
        parse_metric(&self.extreme_events)
    }
}

impl Default for ClimateMetrics {
    fn default() -> Self {
        Self::new("1.5", "0.3", "0.2", "4")
    }
}

/// Lenient decimal parse: anything that is not a number becomes NaN.
///
/// Surrounding whitespace is ignored and, like a browser's `parseFloat`, the
/// longest numeric prefix is used ("2.5°C" reads as 2.5). The only spelled-out
/// value accepted is a signed or unsigned `Infinity`; "inf" and "nan" are NaN.
pub fn parse_metric(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let (sign, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    // Only digits reach `str::parse`, which would otherwise accept "inf" and "nan"
    let prefix_len = numeric_prefix_len(trimmed);
    trimmed[..prefix_len].parse::<f64>().unwrap_or(f64::NAN)
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut idx = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        idx = 1;
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while idx < bytes.len() {
        match bytes[idx] {
            b'0'..=b'9' => {
                seen_digit = true;
                end = idx + 1;
            }
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        idx += 1;
    }

    if !seen_digit {
        return 0;
    }

    // Optional exponent, only taken when it has digits
    if idx < bytes.len() && matches!(bytes[idx], b'e' | b'E') {
        let mut exp_idx = idx + 1;
        if matches!(bytes.get(exp_idx), Some(b'+') | Some(b'-')) {
            exp_idx += 1;
        }
        let digits_start = exp_idx;
        while exp_idx < bytes.len() && bytes[exp_idx].is_ascii_digit() {
            exp_idx += 1;
        }
        if exp_idx > digits_start {
            end = exp_idx;
        }
    }

    end
}

/// Discrete colour class of the texture's top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureBand {
    Hot,
    Mid,
    Cool,
}

impl TemperatureBand {
    /// NaN never passes a threshold, so unreadable temperatures land in `Cool`.
    pub fn classify(temperature: f64, hot_above: f64, mid_above: f64) -> Self {
        if temperature > hot_above {
            TemperatureBand::Hot
        } else if temperature > mid_above {
            TemperatureBand::Mid
        } else {
            TemperatureBand::Cool
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureBand::Hot => "hot",
            TemperatureBand::Mid => "mid",
            TemperatureBand::Cool => "cool",
        }
    }
}
