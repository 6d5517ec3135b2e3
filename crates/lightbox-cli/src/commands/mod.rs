pub mod config;
pub mod replay;
pub mod size;

use std::path::Path;

use anyhow::{Context, Result};
use lightbox_core::config::ViewerConfig;
use lightbox_core::geometry::ViewportBounds;

/// Parse a `WIDTHxHEIGHT` viewport argument.
pub fn parse_viewport(s: &str) -> Result<ViewportBounds, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: f64 = w.trim().parse().map_err(|_| format!("invalid width '{w}'"))?;
    let height: f64 = h.trim().parse().map_err(|_| format!("invalid height '{h}'"))?;
    if width <= 0.0 || height <= 0.0 {
        return Err(format!("viewport must be positive, got {width}x{height}"));
    }
    Ok(ViewportBounds::new(width, height))
}

/// Load a viewer config from TOML, or the default when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: ViewerConfig = toml::from_str(&contents).context("Invalid viewer config")?;
    config.validate()?;
    Ok(config)
}
