use std::path::PathBuf;

use crate::types::SampleFormat;

#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("Iteration count must be at least 1")]
    InvalidIterations,

    #[error("Cannot summarize an empty set of timings")]
    NoSamples,

    #[error("Expected {iterations} timings, got {timings}")]
    TimingCountMismatch { iterations: usize, timings: usize },

    #[error("Failed to read sample file {path}: {source}")]
    SampleRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{format} decode error: {detail}")]
    Decode { format: SampleFormat, detail: String },

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {detail}")]
    ConfigParse { path: PathBuf, detail: String },
}
