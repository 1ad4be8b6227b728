use std::io::{self, BufRead};
use std::thread;

use anyhow::{Context, Result};
use tokio::select;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::events::{CarouselCommand, Control};

/// Parses one line of terminal input into a carousel command.
///
/// Accepts control names (with a few short aliases) or `key <code>`.
pub fn parse_command_line(line: &str) -> Option<CarouselCommand> {
    let line = line.trim();
    if let Some(code) = line.strip_prefix("key ") {
        return code.trim().parse::<u32>().ok().map(CarouselCommand::Key);
    }
    let control = match line {
        "prev" => Control::Previous,
        "toggle" | "play" | "pause" => Control::ToggleAutoplay,
        "toolbar" => Control::ToggleToolbar,
        other => other.parse().ok()?,
    };
    Some(CarouselCommand::Activate(control))
}

/// Reads stdin on a dedicated OS thread and hands each line to the runtime.
///
/// A plain thread is used so a pending read never holds up runtime shutdown.
/// The returned channel closes at EOF.
pub fn spawn_stdin_reader() -> Result<Receiver<String>> {
    let (tx, rx) = mpsc::channel::<String>(16);
    thread::Builder::new()
        .name("carousel-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!("stdin reader failed: {err}");
                        break;
                    }
                }
            }
        })
        .context("failed to spawn stdin reader thread")?;
    Ok(rx)
}

/// Turns input lines into commands and forwards them to the controller.
///
/// Cancels `cancel` when the input closes so the rest of the pipeline shuts
/// down with it.
pub async fn run(
    mut lines: Receiver<String>,
    to_controller: Sender<CarouselCommand>,
    cancel: CancellationToken,
) -> Result<()> {
    loop {
        select! {
            _ = cancel.cancelled() => break,

            next = lines.recv() => {
                match next {
                    Some(line) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        match parse_command_line(&line) {
                            Some(cmd) => {
                                if to_controller.send(cmd).await.is_err() {
                                    warn!("controller channel closed");
                                    break;
                                }
                            }
                            None => debug!(line = %line.trim(), "ignoring unrecognised input line"),
                        }
                    }
                    None => {
                        info!("input closed; initiating shutdown");
                        cancel.cancel();
                        break;
                    }
                }
            }
        }
    }
    Ok(())
}
