use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::errors::BenchError;
use crate::types::SampleFormat;

pub const DEFAULT_ITERATIONS: usize = 25;

/// Optional settings file. Every key may be omitted.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub iterations: Option<usize>,
    pub warmup: Option<usize>,
    #[serde(default)]
    pub samples: SamplePaths,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplePaths {
    pub fit: Option<PathBuf>,
    pub gpx: Option<PathBuf>,
}

impl FileConfig {
    /// Configured path for `format`; `None` means the embedded sample.
    pub fn sample_path(&self, format: SampleFormat) -> Option<&Path> {
        match format {
            SampleFormat::Fit => self.samples.fit.as_deref(),
            SampleFormat::Gpx => self.samples.gpx.as_deref(),
        }
    }
}

/// `<config_dir>/fitgpx-bench/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fitgpx-bench").join("config.toml"))
}

pub fn parse_config(path: &Path, contents: &str) -> Result<FileConfig, BenchError> {
    toml::from_str(contents).map_err(|e| BenchError::ConfigParse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

/// Load the config file.
///
/// An explicit path must exist. The default path is optional, and a missing
/// file there yields an empty config.
pub fn load_config(explicit: Option<&Path>) -> Result<FileConfig, BenchError> {
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => match default_config_path() {
            Some(p) => (p, false),
            None => return Ok(FileConfig::default()),
        },
    };

    if !required && !path.is_file() {
        debug!("no config file at {}", path.display());
        return Ok(FileConfig::default());
    }

    let contents = std::fs::read_to_string(&path).map_err(|source| BenchError::ConfigRead {
        path: path.clone(),
        source,
    })?;
    debug!("using config file {}", path.display());
    parse_config(&path, &contents)
}
