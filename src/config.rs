//! Renderer configuration.
//!
//! Loaded from YAML; every field is optional and falls back to the defaults
//! of the batch renderer (600x600 white canvas, 1000 curve steps).
//!
//! ```yaml
//! canvas_width: 800
//! canvas_height: 600
//! background: { r: 240, g: 240, b: 240 }
//! curve_steps: 2000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::render::DEFAULT_CURVE_STEPS;

/// Settings for the script-driven renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Canvas width used until a script issues `resetCanvas`.
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,

    /// Canvas height used until a script issues `resetCanvas`.
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,

    /// Fill color of a freshly saved canvas.
    #[serde(default = "default_background")]
    pub background: Rgba,

    /// Parameter steps per sampled curve.
    #[serde(default = "default_curve_steps")]
    pub curve_steps: usize,
}

fn default_canvas_width() -> u32 {
    600
}
fn default_canvas_height() -> u32 {
    600
}
fn default_background() -> Rgba {
    Rgba::WHITE
}
fn default_curve_steps() -> usize {
    DEFAULT_CURVE_STEPS
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            background: default_background(),
            curve_steps: default_curve_steps(),
        }
    }
}

impl RenderConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::Config(format!("line {line}: {e}"))
        })?;

        Framebuffer::byte_len(config.canvas_width, config.canvas_height)?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults on any error.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = RenderConfig::default();

        assert_eq!(config.canvas_width, 600);
        assert_eq!(config.canvas_height, 600);
        assert_eq!(config.background, Rgba::WHITE);
        assert_eq!(config.curve_steps, 1000);
    }

    #[test]
    fn test_config_parse_partial() {
        let config = RenderConfig::parse("curve_steps: 250").unwrap();

        assert_eq!(config.curve_steps, 250);
        assert_eq!(config.canvas_width, 600);
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r"
canvas_width: 320
canvas_height: 200
background: { r: 0, g: 0, b: 0 }
curve_steps: 64
";

        let config = RenderConfig::parse(yaml).unwrap();

        assert_eq!(config.canvas_width, 320);
        assert_eq!(config.canvas_height, 200);
        assert_eq!(config.background, Rgba::BLACK);
        assert_eq!(config.curve_steps, 64);
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r"
canvas_width: 100
canvas_height: tall
";

        let err = RenderConfig::parse(yaml).unwrap_err();
        assert!(err.to_string().contains('3'), "error should include line number: {err}");
    }

    #[test]
    fn test_config_rejects_zero_canvas() {
        assert!(RenderConfig::parse("canvas_width: 0").is_err());
    }

    #[test]
    fn test_config_rejects_oversized_canvas() {
        let err = RenderConfig::parse("canvas_width: 4294967295\ncanvas_height: 4294967295").unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "canvas_height: 480").unwrap();

        let config = RenderConfig::load(file.path()).unwrap();
        assert_eq!(config.canvas_height, 480);
    }

    #[test]
    fn test_config_load_or_default() {
        let config = RenderConfig::load_or_default("/nonexistent/path");
        assert_eq!(config, RenderConfig::default());
    }
}
