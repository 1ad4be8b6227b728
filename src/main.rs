//! Binary entrypoint: drives the carousel from terminal input.

use std::path::PathBuf;

use anyhow::{Context, Result};
use carousel::config::Configuration;
use carousel::events::CarouselCommand;
use carousel::tasks::{controller, terminal};
use carousel::view::TextView;
use clap::{ArgAction, Parser};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "carousel", version, about = "Terminal-driven image carousel")]
struct Args {
    /// Path to YAML config (defaults to the built-in slide deck)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,
    /// Override the autoplay interval (ms)
    #[arg(long = "interval-ms", value_name = "MILLIS")]
    interval_ms: Option<u64>,
    /// Deterministic RNG seed for random navigation
    #[arg(long = "seed", value_name = "SEED")]
    seed: Option<u64>,
    /// Start autoplay immediately
    #[arg(long = "autoplay")]
    autoplay: bool,
    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) {
    // map -v to the default level; RUST_LOG still wins when set
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let Args {
        config,
        interval_ms,
        seed,
        autoplay,
        verbose,
    } = Args::parse();
    init_tracing(verbose);

    let mut cfg = match &config {
        Some(path) => Configuration::from_yaml_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Configuration::default(),
    };
    if let Some(ms) = interval_ms {
        cfg.autoplay_interval_ms = ms;
    }
    if seed.is_some() {
        cfg.random_seed = seed;
    }
    cfg.autoplay_on_start |= autoplay;
    let cfg = cfg.validated().context("invalid configuration values")?;
    let source = config
        .as_ref()
        .map_or_else(|| "built-in".to_string(), |p| p.display().to_string());
    tracing::info!(
        slides = cfg.slides.len(),
        interval_ms = cfg.autoplay_interval_ms,
        %source,
        "loaded configuration"
    );

    let (cmd_tx, cmd_rx) = mpsc::channel::<CarouselCommand>(32); // Input + autoplay -> Controller
    let cancel = CancellationToken::new();

    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::warn!("ctrl-c handler failed: {err}");
                return;
            }
            tracing::info!("ctrl-c received; initiating shutdown");
            cancel.cancel();
        });
    }

    let controller = controller::Controller::from_config(
        &cfg,
        TextView::stdout(),
        cmd_tx.clone(),
        cancel.child_token(),
    )?;

    let mut tasks = JoinSet::new();

    tasks.spawn({
        let cancel = cancel.clone();
        async move {
            controller::run(controller, cmd_rx, cancel)
                .await
                .context("controller task failed")
        }
    });

    let lines = terminal::spawn_stdin_reader()?;
    tasks.spawn({
        let to_controller = cmd_tx;
        let cancel = cancel.clone();
        async move {
            terminal::run(lines, to_controller, cancel)
                .await
                .context("terminal input task failed")
        }
    });

    while let Some(res) = tasks.join_next().await {
        match res {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task error: {e:?}"),
            Err(e) => tracing::error!("join error: {e}"),
        }
        cancel.cancel();
    }

    Ok(())
}
