use std::io::{self, Write};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::events::{AutoplayState, ToolbarState, ViewEvent};
use crate::model::Slide;

/// Rendering side of the carousel.
///
/// The controller calls these after each state change. Failures are the
/// view's own business; none of these methods can reject a transition.
pub trait View {
    fn render_slide(&mut self, index: usize, total: usize, slide: &Slide);
    fn autoplay_changed(&mut self, state: AutoplayState);
    fn toolbar_changed(&mut self, state: ToolbarState);
}

/// Writes one line per state change, e.g. to a terminal.
#[derive(Debug)]
pub struct TextView<W> {
    out: W,
}

impl TextView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
            warn!("failed to write carousel view output: {err}");
        }
    }
}

impl<W: Write> View for TextView<W> {
    fn render_slide(&mut self, index: usize, total: usize, slide: &Slide) {
        info!(index, total, image = %slide.image, "slide shown");
        self.emit(format_args!(
            "[{}/{}] {} | {}",
            index + 1,
            total,
            slide.image,
            slide.caption
        ));
    }

    fn autoplay_changed(&mut self, state: AutoplayState) {
        info!(state = ?state, "autoplay changed");
        self.emit(format_args!(
            "[{}] {}",
            state.icon(),
            state.button_label()
        ));
    }

    fn toolbar_changed(&mut self, state: ToolbarState) {
        info!(state = ?state, "toolbar changed");
        let label = if state.is_visible() { "shown" } else { "hidden" };
        self.emit(format_args!("[{}] toolbar {}", state.icon(), label));
    }
}

/// Forwards every state change to another task as a [`ViewEvent`].
#[derive(Debug, Clone)]
pub struct ChannelView {
    tx: mpsc::UnboundedSender<ViewEvent>,
}

impl ChannelView {
    pub fn new(tx: mpsc::UnboundedSender<ViewEvent>) -> Self {
        Self { tx }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ViewEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    fn forward(&self, event: ViewEvent) {
        if self.tx.send(event).is_err() {
            debug!("view receiver dropped; discarding carousel update");
        }
    }
}

impl View for ChannelView {
    fn render_slide(&mut self, index: usize, total: usize, slide: &Slide) {
        self.forward(ViewEvent::SlideShown {
            index,
            total,
            slide: slide.clone(),
        });
    }

    fn autoplay_changed(&mut self, state: AutoplayState) {
        self.forward(ViewEvent::AutoplayChanged(state));
    }

    fn toolbar_changed(&mut self, state: ToolbarState) {
        self.forward(ViewEvent::ToolbarChanged(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_view_writes_one_line_per_change() {
        let mut view = TextView::new(Vec::new());
        view.render_slide(2, 6, &Slide::new("images/3.jpg", "Lever de soleil"));
        view.autoplay_changed(AutoplayState::Running);
        view.toolbar_changed(ToolbarState::Hidden);

        let text = String::from_utf8(view.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[3/6] images/3.jpg | Lever de soleil",
                "[pause] Stop carousel",
                "[arrow-right] toolbar hidden",
            ]
        );
    }

    #[test]
    fn channel_view_survives_dropped_receiver() {
        let (mut view, rx) = ChannelView::channel();
        view.autoplay_changed(AutoplayState::Stopped);
        drop(rx);
        view.autoplay_changed(AutoplayState::Running);
    }
}
