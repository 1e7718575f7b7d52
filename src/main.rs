use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::Parser;
use log::debug;

use fitgpx_bench::config::{self, DEFAULT_ITERATIONS};
use fitgpx_bench::display::{self, Comparison};
use fitgpx_bench::types::{Sample, SampleFormat};

#[derive(Parser)]
#[command(name = "fitgpx-bench", version, about = "Compare FIT and GPX decoding latency")]
struct Cli {
    /// Iterations per format [default: 25]
    #[arg(short = 'n', long = "iterations")]
    iterations: Option<usize>,

    /// Print results as an indented JSON array
    #[arg(long)]
    json: bool,

    /// FIT sample file
    #[arg(long)]
    fit: Option<PathBuf>,

    /// GPX sample file
    #[arg(long)]
    gpx: Option<PathBuf>,

    /// Unmeasured decode calls before timing starts [default: 0]
    #[arg(long)]
    warmup: Option<usize>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    fitgpx_bench::init_logging(fitgpx_bench::verbosity_level(cli.verbose));

    let cfg = config::load_config(cli.config.as_deref())?;
    let iterations = cli.iterations.or(cfg.iterations).unwrap_or(DEFAULT_ITERATIONS);
    let warmup = cli.warmup.or(cfg.warmup).unwrap_or(0);

    // Explicit paths select formats. With none given, run both from the
    // config file, or the embedded samples where it names no path.
    let inputs: Vec<(SampleFormat, Option<&Path>)> = if cli.fit.is_none() && cli.gpx.is_none() {
        [SampleFormat::Fit, SampleFormat::Gpx]
            .into_iter()
            .map(|f| (f, cfg.sample_path(f)))
            .collect()
    } else {
        [(SampleFormat::Fit, cli.fit.as_deref()), (SampleFormat::Gpx, cli.gpx.as_deref())]
            .into_iter()
            .filter(|(_, p)| p.is_some())
            .collect()
    };
    debug!("iterations={} warmup={} inputs={:?}", iterations, warmup, inputs);

    let plan = fitgpx_bench::build_plan(iterations, warmup, &inputs)?;
    let results = plan.run()?;

    if cli.json {
        print!("{}", display::format_json(&results)?);
        return Ok(());
    }

    print!("{}", display::format_text(&results));

    let samples: Vec<&Sample> = plan.cases().iter().map(|c| &c.sample).collect();
    if let Some(cmp) = Comparison::from_run(&results, &samples) {
        println!();
        print!("{}", display::format_comparison(&cmp));
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
