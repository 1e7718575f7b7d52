use std::time::Duration;

use crate::errors::BenchError;
use crate::types::BenchmarkResult;

/// Convert a duration to fractional milliseconds without truncating to whole ms.
pub fn to_ms(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1e6
}

/// Nearest-rank quantile over an ascending slice: `sorted[floor((n - 1) * q)]`.
///
/// No interpolation between neighbours, so small samples snap to an observed
/// value. `sorted` must be non-empty.
pub fn nearest_rank(sorted: &[Duration], q: f64) -> Duration {
    let idx = ((sorted.len() - 1) as f64 * q) as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// Reduce per-call timings into a `BenchmarkResult`.
///
/// The mean is taken over the full-precision `Duration` sum and only then
/// converted to milliseconds.
pub fn summarize(
    format: &str,
    parser: &str,
    iterations: usize,
    durations: &[Duration],
) -> Result<BenchmarkResult, BenchError> {
    if durations.is_empty() {
        return Err(BenchError::NoSamples);
    }
    if iterations != durations.len() {
        return Err(BenchError::TimingCountMismatch {
            iterations,
            timings: durations.len(),
        });
    }

    let mut sorted = durations.to_vec();
    sorted.sort_unstable();

    let total: Duration = sorted.iter().sum();
    let mean_ms = to_ms(total) / iterations as f64;

    Ok(BenchmarkResult {
        format: format.to_string(),
        parser: parser.to_string(),
        iterations,
        mean_ms,
        p50_ms: to_ms(nearest_rank(&sorted, 0.50)),
        p95_ms: to_ms(nearest_rank(&sorted, 0.95)),
        min_ms: to_ms(sorted[0]),
        max_ms: to_ms(sorted[sorted.len() - 1]),
    })
}
