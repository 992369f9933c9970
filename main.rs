use std::io::{self, Write};
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_freq::chart;
use word_freq::config::{Cli, OutputFormat};
use word_freq::{Fetcher, Pipeline};

fn main() {
    if let Err(err) = run() {
        eprintln!("{}: {err:#}", env!("CARGO_PKG_NAME"));
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let run_start = Instant::now();
    let config = cli.analyzer_config().context("invalid alphabet settings")?;
    let pipeline = Pipeline::new(&config).context("failed to build normalizer")?;
    let fetcher = Fetcher::new(cli.timeout()).context("failed to set up fetcher")?;

    // Documents are counted one at a time and merged; none is held past its count.
    let mut counts = word_freq::FrequencyMap::new();
    for source in cli.sources() {
        let text = fetcher
            .fetch(&source)
            .with_context(|| format!("could not load {source}"))?;
        counts.merge(&pipeline.count(&text));
    }
    let report = pipeline.rank(&counts);

    let rendered = match cli.format {
        OutputFormat::Text => chart::render_text(&report, cli.width),
        OutputFormat::Json => chart::render_json(&report),
    }
    .context("nothing to chart")?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if cli.format == OutputFormat::Json {
        writeln!(stdout)?;
    }
    stdout.flush()?;

    info!(elapsed = ?run_start.elapsed(), "done");
    Ok(())
}
