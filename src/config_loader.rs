use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::models::common::HighDimError;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub output: OutputConfig,
    pub seed: Option<u64>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Defaults {
    pub count: usize,
    pub dimension: usize,
    pub mean: f64,
    pub standard_deviation: f64,
    pub projected: Option<usize>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub root_dir: PathBuf,
    pub histogram_bins: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            count: 50,
            dimension: 400,
            mean: 0.0,
            standard_deviation: 1.0,
            projected: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            histogram_bins: 10,
        }
    }
}

pub fn parse_config(contents: &str) -> Result<Config, HighDimError> {
    Ok(toml::from_str(contents)?)
}

/// Reads `path`. A missing file is not an error; the built-in defaults are
/// used instead.
pub fn load_config(path: &Path) -> Result<Config, HighDimError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!(
                "config file {} not found, using built-in defaults",
                path.display()
            );
            Ok(Config::default())
        }
        Err(e) => Err(HighDimError::Config(format!("{}: {}", path.display(), e))),
    }
}
