use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

pub use config_model::{KeyBindingsConfig, SlideConfig, default_slides};

use crate::model::Slide;

pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 2000;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Configuration {
    /// Ordered slide deck; defaults to the shipped images.
    pub slides: Vec<SlideConfig>,
    /// Delay between automatic advances while autoplay runs, in ms.
    pub autoplay_interval_ms: u64,
    /// Start cycling as soon as the carousel comes up.
    pub autoplay_on_start: bool,
    /// Fixed seed for random navigation (useful for tests and demos).
    pub random_seed: Option<u64>,
    pub toolbar_visible: bool,
    pub key_bindings: KeyBindingsConfig,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            slides: default_slides(),
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            autoplay_on_start: false,
            random_seed: None,
            toolbar_visible: true,
            key_bindings: KeyBindingsConfig::default(),
        }
    }
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            !self.slides.is_empty(),
            "slides must contain at least one entry"
        );
        for (idx, slide) in self.slides.iter().enumerate() {
            slide.validate(&format!("slides[{idx}]"))?;
        }
        ensure!(
            self.autoplay_interval_ms > 0,
            "autoplay-interval-ms must be greater than zero"
        );
        self.key_bindings
            .validate()
            .context("invalid key-bindings")?;
        Ok(self)
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn slide_deck(&self) -> Vec<Slide> {
        self.slides.iter().cloned().map(Slide::from).collect()
    }
}
