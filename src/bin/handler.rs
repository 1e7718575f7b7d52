use std::path::PathBuf;
use std::process;

use anyhow::Result;
use log::LevelFilter;

use fitgpx_bench::handler::{self, HANDLER_ITERATIONS, InvocationContext};
use fitgpx_bench::types::SampleFormat;

/// Sample path override; unset means the embedded sample.
fn sample_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var).filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn run() -> Result<()> {
    fitgpx_bench::init_logging(LevelFilter::Info);

    let ctx = InvocationContext::from_env();
    let fit = sample_path("FITGPX_FIT_SAMPLE");
    let gpx = sample_path("FITGPX_GPX_SAMPLE");

    let plan = fitgpx_bench::build_plan(
        HANDLER_ITERATIONS,
        0,
        &[(SampleFormat::Fit, fit.as_deref()), (SampleFormat::Gpx, gpx.as_deref())],
    )?;

    let stdout = std::io::stdout();
    let status = handler::handle(&ctx, &plan, &mut stdout.lock())?;
    println!("{}", serde_json::to_string(&status)?);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
