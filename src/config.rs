use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "nearlink.toml";

/// Top-level nearlink configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NearlinkConfig {
    /// Point layout and input settings.
    #[serde(default)]
    pub points: PointsToml,

    /// Selection and ranking settings.
    #[serde(default)]
    pub select: SelectToml,

    /// Streaming execution settings.
    #[serde(default)]
    pub stream: StreamToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointsToml {
    pub input: Option<PathBuf>,
    /// When set, the input must hold exactly this many points.
    pub count: Option<usize>,
    #[serde(default = "default_dims")]
    pub dims: usize,
    #[serde(default = "default_bit_width")]
    pub bit_width: u32,
}

impl Default for PointsToml {
    fn default() -> Self {
        Self {
            input: None,
            count: None,
            dims: default_dims(),
            bit_width: default_bit_width(),
        }
    }
}

fn default_dims() -> usize {
    3
}
fn default_bit_width() -> u32 {
    24
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectToml {
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for SelectToml {
    fn default() -> Self {
        Self {
            k: default_k(),
            top: default_top(),
        }
    }
}

fn default_k() -> usize {
    1000
}
fn default_top() -> usize {
    3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StreamToml {
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default = "default_schedule")]
    pub schedule: String,
}

impl Default for StreamToml {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            batch_size: default_batch_size(),
            capacity: default_capacity(),
            schedule: default_schedule(),
        }
    }
}

fn default_mode() -> String {
    "batch".to_string()
}
fn default_batch_size() -> usize {
    4
}
fn default_capacity() -> usize {
    16
}
fn default_schedule() -> String {
    "points".to_string()
}

/// Loads the configuration file.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG`] is read if
/// present and built-in defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<NearlinkConfig> {
    let path = match path {
        Some(p) => p,
        None if Path::new(DEFAULT_CONFIG).exists() => Path::new(DEFAULT_CONFIG),
        None => return Ok(NearlinkConfig::default()),
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
