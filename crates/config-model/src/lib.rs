use anyhow::{Result, ensure};
use serde::Deserialize;

pub use keys::{
    DEFAULT_NEXT_KEY, DEFAULT_PREVIOUS_KEY, DEFAULT_TOGGLE_AUTOPLAY_KEY, KeyBindingsConfig,
};
pub use slides::{SlideConfig, default_slides};

mod slides {
    use super::*;

    /// One carousel entry as written in the config file.
    #[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
    #[serde(rename_all = "kebab-case", deny_unknown_fields)]
    pub struct SlideConfig {
        pub image: String,
        #[serde(default)]
        pub caption: String,
    }

    impl SlideConfig {
        pub fn new(image: impl Into<String>, caption: impl Into<String>) -> Self {
            Self {
                image: image.into(),
                caption: caption.into(),
            }
        }

        pub fn validate(&self, prefix: &str) -> Result<()> {
            ensure!(
                !self.image.trim().is_empty(),
                "{}.image must not be blank",
                prefix
            );
            Ok(())
        }
    }

    /// The slide deck shipped with the carousel when no config file names one.
    pub fn default_slides() -> Vec<SlideConfig> {
        [
            ("images/1.jpg", "Frères pandas"),
            ("images/2.jpg", "Yoga on the top"),
            ("images/3.jpg", "Lever de soleil"),
            ("images/4.jpg", "Ciel étoilé"),
            ("images/5.jpg", "Tea time"),
            ("images/6.jpg", "Ca va péter le bide"),
        ]
        .into_iter()
        .map(|(image, caption)| SlideConfig::new(image, caption))
        .collect()
    }
}

mod keys {
    use super::*;

    pub const DEFAULT_PREVIOUS_KEY: u32 = 37;
    pub const DEFAULT_NEXT_KEY: u32 = 39;
    pub const DEFAULT_TOGGLE_AUTOPLAY_KEY: u32 = 32;

    /// Key codes (DOM `keyCode` numbering) bound to carousel controls.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
    #[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
    pub struct KeyBindingsConfig {
        pub previous: u32,
        pub next: u32,
        pub toggle_autoplay: u32,
    }

    impl Default for KeyBindingsConfig {
        fn default() -> Self {
            Self {
                previous: DEFAULT_PREVIOUS_KEY,
                next: DEFAULT_NEXT_KEY,
                toggle_autoplay: DEFAULT_TOGGLE_AUTOPLAY_KEY,
            }
        }
    }

    impl KeyBindingsConfig {
        pub fn validate(&self) -> Result<()> {
            ensure!(
                self.previous != self.next,
                "key-bindings.previous and key-bindings.next must differ (both {})",
                self.previous
            );
            ensure!(
                self.toggle_autoplay != self.previous && self.toggle_autoplay != self.next,
                "key-bindings.toggle-autoplay ({}) collides with a navigation key",
                self.toggle_autoplay
            );
            Ok(())
        }
    }
}
