//! Serverless-style entry point.
//!
//! Each invocation runs a benchmark plan, writes one JSON line per result for
//! log aggregation, and returns a small status object. Nothing is carried
//! between invocations.

use std::io::Write;
use std::time::Instant;

use chrono::Utc;
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::errors::BenchError;
use crate::runner::BenchPlan;
use crate::stats::to_ms;
use crate::types::BenchmarkResult;

pub const HANDLER_ITERATIONS: usize = 25;
pub const LANG: &str = "Rust";

/// Deployment facts attached to every log line.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationContext {
    pub commit: String,
    pub memory_mb: u32,
}

impl InvocationContext {
    /// Read `COMMIT_SHA` and `AWS_LAMBDA_FUNCTION_MEMORY_SIZE`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("COMMIT_SHA").ok(),
            std::env::var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE").ok(),
        )
    }

    pub fn from_vars(commit: Option<String>, memory: Option<String>) -> Self {
        InvocationContext {
            commit: commit
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "dev".to_string()),
            memory_mb: memory.and_then(|m| m.trim().parse().ok()).unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerStatus {
    pub ok: bool,
    pub count: usize,
}

#[derive(Serialize)]
struct LogLine<'a> {
    lang: &'static str,
    ts: i64,
    memory_mb: u32,
    commit: &'a str,
    #[serde(flatten)]
    result: &'a BenchmarkResult,
}

/// Render one result as a single-line JSON log record.
pub fn format_log_line(
    ctx: &InvocationContext,
    ts: i64,
    result: &BenchmarkResult,
) -> serde_json::Result<String> {
    serde_json::to_string(&LogLine {
        lang: LANG,
        ts,
        memory_mb: ctx.memory_mb,
        commit: &ctx.commit,
        result,
    })
}

/// Run `plan` and log each result as a JSON line to `out`.
///
/// Failing to serialize or write a line is logged and skipped; only a
/// benchmark failure fails the invocation.
pub fn handle<W: Write>(
    ctx: &InvocationContext,
    plan: &BenchPlan,
    out: &mut W,
) -> Result<HandlerStatus, BenchError> {
    let start = Instant::now();
    let ts = Utc::now().timestamp_millis();
    info!("start ts={} commit={} memory_mb={}", ts, ctx.commit, ctx.memory_mb);

    let t0 = Instant::now();
    let results = plan.run().inspect_err(|e| error!("benchmark run failed: {}", e))?;
    info!("run done in {:.2}ms", to_ms(t0.elapsed()));

    for result in &results {
        match format_log_line(ctx, ts, result) {
            Ok(line) => {
                if let Err(e) = writeln!(out, "{}", line) {
                    error!("failed to write log line for {}/{}: {}", result.format, result.parser, e);
                }
            }
            Err(e) => error!("failed to serialize {}/{}: {}", result.format, result.parser, e),
        }
    }

    info!("total handler time {:.2}ms", to_ms(start.elapsed()));
    Ok(HandlerStatus {
        ok: true,
        count: results.len(),
    })
}
