pub mod config;
pub mod decoders;
pub mod display;
pub mod errors;
pub mod handler;
pub mod runner;
pub mod samples;
pub mod stats;
pub mod types;

use std::path::Path;

use log::LevelFilter;

use crate::decoders::decoder_for;
use crate::errors::BenchError;
use crate::runner::BenchPlan;
use crate::types::{Sample, SampleFormat};

/// Load one sample per format and pair it with that format's decoder.
///
/// A `None` path selects the embedded sample. Files are read before any
/// timing starts, so a missing file fails the run up front.
pub fn build_plan(
    iterations: usize,
    warmup: usize,
    inputs: &[(SampleFormat, Option<&Path>)],
) -> Result<BenchPlan, BenchError> {
    let mut plan = BenchPlan::new(iterations).warmup(warmup);
    for &(format, path) in inputs {
        let sample: Sample = samples::resolve(format, path)?;
        plan = plan.case(decoder_for(format), sample);
    }
    Ok(plan)
}

/// Map a `-v` count onto a log level: warn, info, debug, then trace.
pub fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. `RUST_LOG` overrides `default_level`.
pub fn init_logging(default_level: LevelFilter) {
    let env = env_logger::Env::default().default_filter_or(default_level.as_str());
    // A second init (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(env).try_init();
}
