use owo_colors::{OwoColorize, Stream};

use crate::types::{BenchmarkResult, Sample, SampleFormat};

/// One summary line per result, values to two decimals.
pub fn format_text(results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    for r in results {
        out.push_str(&format_result_line(r));
        out.push('\n');
    }
    out
}

pub fn format_result_line(r: &BenchmarkResult) -> String {
    format!(
        "{}/{}: mean={:.2}ms p50={:.2}ms p95={:.2}ms min={:.2}ms max={:.2}ms",
        r.format, r.parser, r.mean_ms, r.p50_ms, r.p95_ms, r.min_ms, r.max_ms
    )
}

/// Pretty-printed JSON array of results.
pub fn format_json(results: &[BenchmarkResult]) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(results)?;
    out.push('\n');
    Ok(out)
}

/// GPX relative to FIT, for mean latency and input size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub fit_bytes: usize,
    pub gpx_bytes: usize,
    pub speedup: Option<f64>,
    pub size_ratio: Option<f64>,
}

impl Comparison {
    /// Build a comparison when both a FIT and a GPX result are present.
    pub fn from_run(results: &[BenchmarkResult], samples: &[&Sample]) -> Option<Comparison> {
        let fit = results.iter().find(|r| r.format == SampleFormat::Fit.label())?;
        let gpx = results.iter().find(|r| r.format == SampleFormat::Gpx.label())?;
        let fit_size = samples.iter().find(|s| s.format == SampleFormat::Fit)?.len();
        let gpx_size = samples.iter().find(|s| s.format == SampleFormat::Gpx)?.len();

        Some(Comparison {
            fit_bytes: fit_size,
            gpx_bytes: gpx_size,
            speedup: ratio(gpx.mean_ms, fit.mean_ms),
            size_ratio: ratio(gpx_size as f64, fit_size as f64),
        })
    }
}

fn ratio(num: f64, den: f64) -> Option<f64> {
    if den > 0.0 { Some(num / den) } else { None }
}

fn format_ratio(r: Option<f64>) -> String {
    match r {
        Some(v) => format!("{:.2}x", v),
        None => "n/a".to_string(),
    }
}

/// Comparison block printed after the text results.
pub fn format_comparison(cmp: &Comparison) -> String {
    let speedup = format_ratio(cmp.speedup);
    let size = format_ratio(cmp.size_ratio);

    let mut out = String::new();
    out.push_str(&format!("Sample size: FIT={}B GPX={}B\n", cmp.fit_bytes, cmp.gpx_bytes));
    out.push_str(&format!(
        "Speedup (GPX/FIT mean): {}\n",
        speedup.if_supports_color(Stream::Stdout, |s| s.yellow())
    ));
    out.push_str(&format!(
        "File size ratio (GPX/FIT): {}\n",
        size.if_supports_color(Stream::Stdout, |s| s.yellow())
    ));
    out
}
