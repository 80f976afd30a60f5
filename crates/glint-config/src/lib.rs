//! Configuration file handling for glint.
//!
//! Settings live in `config.toml` inside the platform config directory
//! (`~/.config/glint/` on Linux). Every field is optional; a missing file
//! means all defaults.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use glint_effects::{ParticleConfig, TrailConfig};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "glint.log";

/// Frame rates outside this range are clamped.
const FPS_RANGE: (u32, u32) = (1, 240);

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed RNG seed; fresh entropy on every run when absent.
    pub seed: Option<u64>,
    /// Target frames per second.
    pub fps: u32,
    /// Show the hover card demonstrating tilt and magnetic offset.
    pub show_card: bool,
    pub particles: ParticleConfig,
    pub trail: TrailConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            fps: 60,
            show_card: true,
            particles: ParticleConfig::default(),
            trail: TrailConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("no config directory on this platform, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Serialize to TOML, e.g. to seed a config file.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Time between frames at the configured rate.
    pub fn frame_interval(&self) -> Duration {
        let fps = self.fps.clamp(FPS_RANGE.0, FPS_RANGE.1);
        Duration::from_secs(1) / fps
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "glint")
}

/// Where `config.toml` is looked up when no path is given.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Where the log file is written.
pub fn default_log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE))
}
