use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::Slide;

/// Logical controls a view can activate (the toolbar buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Next,
    Previous,
    Random,
    ToggleAutoplay,
    ToggleToolbar,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Next,
        Control::Previous,
        Control::Random,
        Control::ToggleAutoplay,
        Control::ToggleToolbar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Random => "random",
            Self::ToggleAutoplay => "toggle-autoplay",
            Self::ToggleToolbar => "toggle-toolbar",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown control: {0}")]
pub struct UnknownControl(pub String);

impl FromStr for Control {
    type Err = UnknownControl;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|control| control.as_str() == trimmed)
            .ok_or_else(|| UnknownControl(trimmed.to_string()))
    }
}

/// Everything the controller task reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    Activate(Control),
    Key(u32),
    /// Emitted by the autoplay timer; `generation` identifies which timer fired.
    Tick { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayState {
    Stopped,
    Running,
}

impl AutoplayState {
    pub fn from_active(active: bool) -> Self {
        if active { Self::Running } else { Self::Stopped }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Tooltip for the play/pause button: it names the action a click performs.
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Stopped => "Start carousel",
            Self::Running => "Stop carousel",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Stopped => "play",
            Self::Running => "pause",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarState {
    Shown,
    Hidden,
}

impl ToolbarState {
    pub fn from_visible(visible: bool) -> Self {
        if visible { Self::Shown } else { Self::Hidden }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Shown)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Shown => Self::Hidden,
            Self::Hidden => Self::Shown,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Shown => "arrow-down",
            Self::Hidden => "arrow-right",
        }
    }
}

/// State changes pushed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    SlideShown {
        index: usize,
        total: usize,
        slide: Slide,
    },
    AutoplayChanged(AutoplayState),
    ToolbarChanged(ToolbarState),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_parse_from_their_names() {
        for control in Control::ALL {
            assert_eq!(control.as_str().parse::<Control>(), Ok(control));
        }
        assert_eq!(" next\n".parse::<Control>(), Ok(Control::Next));
    }

    #[test]
    fn unknown_control_is_reported() {
        let err = "fast-forward".parse::<Control>().unwrap_err();
        assert_eq!(err, UnknownControl("fast-forward".to_string()));
        assert_eq!(err.to_string(), "unknown control: fast-forward");
    }

    #[test]
    fn autoplay_presentation_names_the_next_action() {
        assert_eq!(AutoplayState::Stopped.button_label(), "Start carousel");
        assert_eq!(AutoplayState::Stopped.icon(), "play");
        assert_eq!(AutoplayState::Running.button_label(), "Stop carousel");
        assert_eq!(AutoplayState::Running.icon(), "pause");
        assert!(AutoplayState::from_active(true).is_running());
    }

    #[test]
    fn toolbar_toggles_between_states() {
        let shown = ToolbarState::from_visible(true);
        assert_eq!(shown.icon(), "arrow-down");
        let hidden = shown.toggled();
        assert!(!hidden.is_visible());
        assert_eq!(hidden.icon(), "arrow-right");
        assert_eq!(hidden.toggled(), ToolbarState::Shown);
    }
}
