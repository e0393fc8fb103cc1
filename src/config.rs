//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::frame::{builtin_frames, FrameSpec};
use crate::output::DEFAULT_OUTPUT_DIR;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory the frames are written to.
    pub output_dir: Option<PathBuf>,

    /// Frame catalogue; replaces the built-in frames when non-empty.
    #[serde(default)]
    pub frames: Vec<FrameSpec>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Output directory, preferring an explicit override.
    #[must_use]
    pub fn output_dir(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// The frame catalogue to generate.
    #[must_use]
    pub fn frames(&self) -> Vec<FrameSpec> {
        if self.frames.is_empty() {
            builtin_frames()
        } else {
            self.frames.clone()
        }
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `FRAMEGEN_CONFIG` environment variable
/// 3. `~/.config/framegen/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("FRAMEGEN_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/framegen/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/framegen/config.toml")
    } else {
        PathBuf::from("framegen.toml")
    }
}
