use std::time::Duration;

use anyhow::{Context, Result};
use tokio::select;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::Configuration;
use crate::error::CarouselError;
use crate::events::{AutoplayState, CarouselCommand, Control, ToolbarState};
use crate::input::{Action, InputRouter};
use crate::model::Carousel;
use crate::tasks::autoplay::AutoplayTimer;
use crate::view::View;

/// Owns the carousel state and is the only place it changes.
///
/// Every navigation re-renders the current slide; every autoplay operation
/// reports the resulting state, even when it was a no-op.
#[derive(Debug)]
pub struct Controller<V> {
    carousel: Carousel,
    router: InputRouter,
    view: V,
    interval: Duration,
    autoplay: Option<AutoplayTimer>,
    generation: u64,
    toolbar: ToolbarState,
    autoplay_on_start: bool,
    ticks: Sender<CarouselCommand>,
    cancel: CancellationToken,
}

impl<V: View> Controller<V> {
    /// `ticks` must feed the same channel the controller's run loop reads.
    pub fn new(
        carousel: Carousel,
        router: InputRouter,
        view: V,
        interval: Duration,
        ticks: Sender<CarouselCommand>,
        cancel: CancellationToken,
    ) -> Result<Self, CarouselError> {
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(Self {
            carousel,
            router,
            view,
            interval,
            autoplay: None,
            generation: 0,
            toolbar: ToolbarState::Shown,
            autoplay_on_start: false,
            ticks,
            cancel,
        })
    }

    pub fn from_config(
        cfg: &Configuration,
        view: V,
        ticks: Sender<CarouselCommand>,
        cancel: CancellationToken,
    ) -> Result<Self> {
        let slides = cfg.slide_deck();
        let carousel = match cfg.random_seed {
            Some(seed) => Carousel::with_seed(slides, seed),
            None => Carousel::new(slides),
        }
        .context("failed to build carousel from configuration")?;
        let controller = Self::new(
            carousel,
            InputRouter::new(cfg.key_bindings),
            view,
            cfg.autoplay_interval(),
            ticks,
            cancel,
        )
        .context("failed to build carousel controller")?
        .with_toolbar(ToolbarState::from_visible(cfg.toolbar_visible))
        .with_autoplay_on_start(cfg.autoplay_on_start);
        Ok(controller)
    }

    pub fn with_toolbar(mut self, toolbar: ToolbarState) -> Self {
        self.toolbar = toolbar;
        self
    }

    pub fn with_autoplay_on_start(mut self, enabled: bool) -> Self {
        self.autoplay_on_start = enabled;
        self
    }

    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        AutoplayState::from_active(self.autoplay.is_some())
    }

    /// Generation of the running autoplay timer, if any.
    pub fn autoplay_generation(&self) -> Option<u64> {
        self.autoplay.as_ref().map(AutoplayTimer::generation)
    }

    pub fn toolbar(&self) -> ToolbarState {
        self.toolbar
    }

    pub fn render(&mut self) {
        let slide = self.carousel.current();
        self.view
            .render_slide(self.carousel.index(), self.carousel.len(), slide);
    }

    pub fn go_to_next(&mut self) -> usize {
        let index = self.carousel.go_to_next();
        self.render();
        index
    }

    pub fn go_to_previous(&mut self) -> usize {
        let index = self.carousel.go_to_previous();
        self.render();
        index
    }

    pub fn go_to_random(&mut self) -> usize {
        let before = self.carousel.index();
        let index = self.carousel.go_to_random();
        if index == before {
            debug!(index, "single-slide deck; random navigation kept current slide");
        }
        self.render();
        index
    }

    /// Starts autoplay with the given period unless a timer already runs.
    pub fn start_autoplay(&mut self, interval: Duration) -> Result<AutoplayState, CarouselError> {
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        if self.autoplay.is_none() {
            self.generation += 1;
            let timer =
                AutoplayTimer::spawn(self.generation, interval, self.ticks.clone(), &self.cancel);
            info!(
                generation = timer.generation(),
                interval_ms = timer.period().as_millis() as u64,
                "autoplay started"
            );
            self.autoplay = Some(timer);
        } else {
            debug!("autoplay already running");
        }
        let state = self.autoplay_state();
        self.view.autoplay_changed(state);
        Ok(state)
    }

    pub fn stop_autoplay(&mut self) -> AutoplayState {
        match self.autoplay.take() {
            Some(timer) => {
                info!(generation = timer.generation(), "autoplay stopped");
                timer.stop();
            }
            None => debug!("autoplay already stopped"),
        }
        let state = self.autoplay_state();
        self.view.autoplay_changed(state);
        state
    }

    pub fn toggle_autoplay(&mut self) -> AutoplayState {
        if self.autoplay.is_some() {
            return self.stop_autoplay();
        }
        let interval = self.interval;
        // The configured interval was checked non-zero in `new`.
        self.start_autoplay(interval)
            .unwrap_or_else(|_| self.autoplay_state())
    }

    pub fn toggle_toolbar(&mut self) -> ToolbarState {
        self.toolbar = self.toolbar.toggled();
        self.view.toolbar_changed(self.toolbar);
        self.toolbar
    }

    pub fn on_activate(&mut self, control: Control) {
        let action = self.router.on_activate(control);
        self.apply(action);
    }

    pub fn on_key(&mut self, code: u32) {
        match self.router.on_key(code) {
            Some(action) => self.apply(action),
            None => debug!(code, "ignoring unbound key"),
        }
    }

    pub fn handle(&mut self, command: CarouselCommand) {
        match self.router.route(command) {
            Some(action) => self.apply(action),
            None => debug!(command = ?command, "ignoring unrecognised input"),
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Control(Control::Next) => {
                self.go_to_next();
            }
            Action::Control(Control::Previous) => {
                self.go_to_previous();
            }
            Action::Control(Control::Random) => {
                self.go_to_random();
            }
            Action::Control(Control::ToggleAutoplay) => {
                self.toggle_autoplay();
            }
            Action::Control(Control::ToggleToolbar) => {
                self.toggle_toolbar();
            }
            Action::AutoplayTick { generation } => self.on_tick(generation),
        }
    }

    fn on_tick(&mut self, generation: u64) {
        if self.autoplay_generation() == Some(generation) {
            self.go_to_next();
        } else {
            // Tick was queued before its timer was stopped.
            debug!(generation, "dropping stale autoplay tick");
        }
    }

    /// Cancels any running timer without notifying the view.
    pub fn shutdown(&mut self) {
        if let Some(timer) = self.autoplay.take() {
            debug!(generation = timer.generation(), "stopping autoplay on shutdown");
            timer.stop();
        }
    }
}

/// Drives the controller from its command channel until cancelled.
///
/// Renders the first slide on entry, then handles one command at a time.
pub async fn run<V: View>(
    mut controller: Controller<V>,
    mut commands: Receiver<CarouselCommand>,
    cancel: CancellationToken,
) -> Result<()> {
    controller.render();
    if controller.autoplay_on_start {
        let interval = controller.interval;
        controller
            .start_autoplay(interval)
            .context("failed to start autoplay")?;
    }

    loop {
        select! {
            biased;
            _ = cancel.cancelled() => break,

            maybe_cmd = commands.recv() => {
                match maybe_cmd {
                    Some(cmd) => controller.handle(cmd),
                    // The controller keeps a tick sender, so the channel stays
                    // open while it lives; shutdown arrives through `cancel`.
                    None => break,
                }
            }
        }
    }

    controller.shutdown();
    Ok(())
}
