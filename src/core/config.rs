//! Starfield configuration
//!
//! Everything the orchestration needs is passed in explicitly. Overrides come
//! from env vars (CLI) or a JSON blob on the page (browser); bad values fall
//! back to defaults with a warning.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::star::{Viewport, DEFAULT_COUNT};

/// Output formats supported by the CLI
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Summary,
    Svg,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" => Some(Self::Summary),
            "svg" => Some(Self::Svg),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Drawable area, sampled once at startup
    pub viewport: Viewport,
    /// Number of stars; non-positive means an empty field
    pub count: i64,
    /// Paint fps / star count in the corner (browser only)
    pub show_stats: bool,
    /// Export format (CLI only)
    pub format: OutputFormat,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            count: DEFAULT_COUNT,
            show_stats: false,
            format: OutputFormat::default(),
        }
    }
}

impl StarfieldConfig {
    /// Parse a JSON override; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Option<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| {
                warn!(error = %e, "Failed to parse starfield config");
            })
            .ok()?;
        if Viewport::new(config.viewport.width, config.viewport.height).is_none() {
            warn!(
                width = config.viewport.width,
                height = config.viewport.height,
                "Config viewport is not positive"
            );
            return None;
        }
        Some(config)
    }

    /// Build from `STARFIELD_*` style lookups.
    ///
    /// `get` returns the raw value for a key such as `"STARFIELD_WIDTH"`.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let number = |key: &str, default: f32| -> f32 {
            match get(key) {
                Some(raw) => match raw.trim().parse::<f32>() {
                    Ok(v) if v.is_finite() && v > 0.0 => v,
                    _ => {
                        warn!(key, value = %raw, default, "Invalid dimension, using default");
                        default
                    }
                },
                None => default,
            }
        };

        let viewport = Viewport {
            width: number("STARFIELD_WIDTH", defaults.viewport.width),
            height: number("STARFIELD_HEIGHT", defaults.viewport.height),
        };

        let count = match get("STARFIELD_COUNT") {
            Some(raw) => raw.trim().parse::<i64>().unwrap_or_else(|_| {
                warn!(value = %raw, default = defaults.count, "Invalid star count, using default");
                defaults.count
            }),
            None => defaults.count,
        };

        let format = match get("STARFIELD_FORMAT") {
            Some(raw) => OutputFormat::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Unknown output format, using summary");
                defaults.format
            }),
            None => defaults.format,
        };

        Self {
            viewport,
            count,
            show_stats: get("STARFIELD_STATS").is_some(),
            format,
        }
    }

    /// Build from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StarfieldConfig::default();
        assert_eq!(config.count, 10_000);
        assert_eq!(config.viewport, Viewport { width: 1920.0, height: 1080.0 });
        assert!(!config.show_stats);
        assert_eq!(config.format, OutputFormat::Summary);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = StarfieldConfig::from_lookup(lookup(&[
            ("STARFIELD_WIDTH", "1000"),
            ("STARFIELD_HEIGHT", " 800 "),
            ("STARFIELD_COUNT", "5"),
            ("STARFIELD_FORMAT", "SVG"),
            ("STARFIELD_STATS", "1"),
        ]));
        assert_eq!(config.viewport, Viewport { width: 1000.0, height: 800.0 });
        assert_eq!(config.count, 5);
        assert_eq!(config.format, OutputFormat::Svg);
        assert!(config.show_stats);
    }

    #[test]
    fn test_from_lookup_bad_values_fall_back() {
        let config = StarfieldConfig::from_lookup(lookup(&[
            ("STARFIELD_WIDTH", "-5"),
            ("STARFIELD_HEIGHT", "tall"),
            ("STARFIELD_COUNT", "many"),
            ("STARFIELD_FORMAT", "png"),
        ]));
        assert_eq!(config, StarfieldConfig::default());
    }

    #[test]
    fn test_from_lookup_keeps_negative_count() {
        let config = StarfieldConfig::from_lookup(lookup(&[("STARFIELD_COUNT", "-1")]));
        assert_eq!(config.count, -1);
    }

    #[test]
    fn test_from_json_partial() {
        let config = StarfieldConfig::from_json(r#"{"count": 250, "show_stats": true}"#).unwrap();
        assert_eq!(config.count, 250);
        assert!(config.show_stats);
        assert_eq!(config.viewport, Viewport::default());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(StarfieldConfig::from_json("not json").is_none());
        assert!(StarfieldConfig::from_json(r#"{"viewport": {"width": 0, "height": 10}}"#).is_none());
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse(" Summary"), Some(OutputFormat::Summary));
        assert_eq!(OutputFormat::parse("gif"), None);
    }
}
