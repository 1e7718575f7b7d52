use std::time::{Duration, Instant};

use log::{debug, info};

use crate::decoders::Decoder;
use crate::errors::BenchError;
use crate::stats::summarize;
use crate::types::{BenchmarkResult, Sample};

/// Decode `input` `iterations` times, timing each call.
///
/// Stops at the first decode error and returns it; no partial timings are
/// kept. `warmup` calls run first and are not recorded.
pub fn timed_run<D: Decoder + ?Sized>(
    decoder: &D,
    input: &[u8],
    iterations: usize,
    warmup: usize,
) -> Result<Vec<Duration>, BenchError> {
    if iterations == 0 {
        return Err(BenchError::InvalidIterations);
    }

    for _ in 0..warmup {
        decoder.decode(input)?;
    }

    let mut durations = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let start = Instant::now();
        decoder.decode(input)?;
        durations.push(start.elapsed());
    }

    Ok(durations)
}

/// One decoder paired with the sample it decodes.
pub struct BenchCase {
    pub decoder: Box<dyn Decoder>,
    pub sample: Sample,
}

/// Ordered list of cases sharing one iteration count.
///
/// Cases run one after another, never concurrently, so timings are not
/// skewed by contention between them.
pub struct BenchPlan {
    iterations: usize,
    warmup: usize,
    cases: Vec<BenchCase>,
}

impl BenchPlan {
    pub fn new(iterations: usize) -> Self {
        BenchPlan {
            iterations,
            warmup: 0,
            cases: Vec::new(),
        }
    }

    pub fn warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    pub fn case(mut self, decoder: Box<dyn Decoder>, sample: Sample) -> Self {
        self.cases.push(BenchCase { decoder, sample });
        self
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn cases(&self) -> &[BenchCase] {
        &self.cases
    }

    /// Run every case in order. The first failure aborts the whole plan.
    pub fn run(&self) -> Result<Vec<BenchmarkResult>, BenchError> {
        if self.iterations == 0 {
            return Err(BenchError::InvalidIterations);
        }

        let mut results = Vec::with_capacity(self.cases.len());
        for case in &self.cases {
            let format = case.decoder.format();
            debug!(
                "running {}/{} for {} iterations ({} bytes)",
                format,
                case.decoder.parser(),
                self.iterations,
                case.sample.len()
            );

            let durations =
                timed_run(case.decoder.as_ref(), &case.sample.bytes, self.iterations, self.warmup)?;
            let result = summarize(format.label(), case.decoder.parser(), self.iterations, &durations)?;

            info!("{}/{} done: mean={:.3}ms", result.format, result.parser, result.mean_ms);
            results.push(result);
        }

        Ok(results)
    }
}
