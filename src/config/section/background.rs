//! `[background]` section configuration.
//!
//! Controls how the flat background sampled from the top-left pixel is
//! stripped before cropping.
//!
//! # Example
//!
//! ```toml
//! [background]
//! enable = true        # Strip the background color
//! tolerance = 10       # Max per-channel difference still counted as background
//! mode = "global"      # "global" clears every match, "connected" only border-reachable ones
//! ```

use serde::{Deserialize, Serialize};

/// Default per-channel tolerance.
pub const DEFAULT_TOLERANCE: u8 = 10;

/// Background removal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Strip the background. When false, cropping is skipped as well.
    pub enable: bool,

    /// Maximum absolute difference per RGB channel.
    pub tolerance: u8,

    /// Which matching pixels get cleared.
    pub mode: BackgroundMode,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            enable: true,
            tolerance: DEFAULT_TOLERANCE,
            mode: BackgroundMode::default(),
        }
    }
}

/// Background removal strategy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    /// Clear every pixel matching the background color.
    #[default]
    Global,
    /// Clear only matching pixels connected to the image border.
    Connected,
}
