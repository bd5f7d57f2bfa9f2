//! `[crop]` section configuration.
//!
//! ```toml
//! [crop]
//! enable = true   # Trim fully transparent margins before squaring
//! ```

use serde::{Deserialize, Serialize};

/// Crop-to-content settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    pub enable: bool,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_crop_config() {
        assert!(test_parse_config("").crop.enable);
        assert!(!test_parse_config("[crop]\nenable = false").crop.enable);
    }
}
