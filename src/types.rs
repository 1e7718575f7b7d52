use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Sample file formats the benchmark knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Fit,
    Gpx,
}

impl SampleFormat {
    /// Label used in result records and text output.
    pub fn label(self) -> &'static str {
        match self {
            SampleFormat::Fit => "FIT",
            SampleFormat::Gpx => "GPX",
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input bytes for one benchmark case, read once and never mutated.
#[derive(Debug, Clone)]
pub struct Sample {
    pub format: SampleFormat,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl Sample {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Latency summary for one (format, parser, iteration count) run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub format: String,
    pub parser: String,
    pub iterations: usize,
    pub mean_ms: f64,
    pub p50_ms: f64,
    pub p95_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}
