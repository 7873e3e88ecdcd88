//! Binary entrypoint for showreel.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use showreel::config::Configuration;
use showreel::events::{NavCommand, SurfaceUpdate, VisibilitySample};
use showreel::tasks;

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "showreel", about = "Headless slideshow and counter engine")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "showreel.yaml")]
    config: PathBuf,

    /// Override the auto-advance interval (ms)
    #[arg(long, value_name = "MILLIS")]
    interval_ms: Option<u64>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("showreel={}", level).parse().unwrap());
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = Configuration::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?
        .validated()
        .context("validating configuration")?
        .with_advance_interval(cli.interval_ms.map(Duration::from_millis))
        .context("applying --interval-ms")?;

    let advance_interval = cfg.slideshow.advance_interval;
    info!(
        slides = cfg.slideshow.slides.len(),
        counters = cfg.counters.len(),
        interval = %humantime::format_duration(advance_interval),
        "starting engine"
    );

    let (nav_tx, nav_rx) = mpsc::channel::<NavCommand>(16);
    let (visibility_tx, visibility_rx) = mpsc::channel::<VisibilitySample>(16);
    let (surface_tx, surface_rx) = mpsc::channel::<SurfaceUpdate>(64);
    let cancel = CancellationToken::new();

    let slideshow = tokio::spawn(tasks::slideshow::run(
        cfg.slideshow.slides.len(),
        advance_interval,
        nav_rx,
        surface_tx.clone(),
        cancel.clone(),
    ));
    let counters = tokio::spawn(tasks::counters::run(
        cfg.counters.clone(),
        visibility_rx,
        surface_tx,
        cancel.clone(),
    ));
    let surface = tokio::spawn(tasks::surface::run(
        cfg.slideshow.slides.clone(),
        surface_rx,
        cancel.clone(),
    ));
    let session = tokio::spawn(tasks::session::run(
        cfg.session.clone(),
        nav_tx,
        visibility_tx,
        cancel.clone(),
    ));

    tokio::signal::ctrl_c().await.context("waiting for ctrl-c")?;
    info!("shutting down");
    cancel.cancel();
    for handle in [slideshow, counters, surface, session] {
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!(%err, "task ended with error"),
            Err(err) => warn!(%err, "task panicked"),
        }
    }
    Ok(())
}
