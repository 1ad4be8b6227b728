//! Maps raw input onto carousel actions.
//!
//! The router holds no carousel state; it only decides which transition a
//! stimulus stands for. Anything it does not recognise maps to `None`.

use crate::config::KeyBindingsConfig;
use crate::events::{CarouselCommand, Control};

/// A transition the controller should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Control(Control),
    AutoplayTick { generation: u64 },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputRouter {
    keys: KeyBindingsConfig,
}

impl InputRouter {
    pub fn new(keys: KeyBindingsConfig) -> Self {
        Self { keys }
    }

    pub fn on_activate(&self, control: Control) -> Action {
        Action::Control(control)
    }

    pub fn on_key(&self, code: u32) -> Option<Action> {
        let control = if code == self.keys.previous {
            Control::Previous
        } else if code == self.keys.next {
            Control::Next
        } else if code == self.keys.toggle_autoplay {
            Control::ToggleAutoplay
        } else {
            return None;
        };
        Some(self.on_activate(control))
    }

    pub fn route(&self, command: CarouselCommand) -> Option<Action> {
        match command {
            CarouselCommand::Activate(control) => Some(self.on_activate(control)),
            CarouselCommand::Key(code) => self.on_key(code),
            CarouselCommand::Tick { generation } => Some(Action::AutoplayTick { generation }),
        }
    }
}
