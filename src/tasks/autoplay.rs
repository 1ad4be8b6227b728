use std::time::Duration;

use tokio::select;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::events::CarouselCommand;

/// Handle to a running autoplay ticker.
///
/// The ticker sends `CarouselCommand::Tick` into the controller's command
/// channel once per period, first after one full period. Stopping or
/// dropping the handle cancels it.
#[derive(Debug)]
pub struct AutoplayTimer {
    generation: u64,
    period: Duration,
    cancel: CancellationToken,
    _task: JoinHandle<()>,
}

impl AutoplayTimer {
    /// Must be called from within a tokio runtime. `period` must be non-zero.
    pub fn spawn(
        generation: u64,
        period: Duration,
        ticks: Sender<CarouselCommand>,
        parent: &CancellationToken,
    ) -> Self {
        let cancel = parent.child_token();
        let handle = tokio::spawn(run(generation, period, ticks, cancel.clone()));
        Self {
            generation,
            period,
            cancel,
            _task: handle,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn stop(self) {
        self.cancel.cancel();
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run(
    generation: u64,
    period: Duration,
    ticks: Sender<CarouselCommand>,
    cancel: CancellationToken,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                select! {
                    biased;
                    _ = cancel.cancelled() => break,
                    res = ticks.send(CarouselCommand::Tick { generation }) => {
                        if res.is_err() {
                            debug!(generation, "command channel closed; autoplay ticker exiting");
                            break;
                        }
                    }
                }
            }
        }
    }
    debug!(generation, "autoplay ticker stopped");
}
