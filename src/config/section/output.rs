//! `[output]` section configuration.
//!
//! Where the generated assets go and at which sizes.
//!
//! # Example
//!
//! ```toml
//! [output]
//! dir = "public"                 # Relative to the config file
//! ico = "favicon.ico"
//! ico_sizes = [16, 32, 48, 64]   # Frames embedded in the icon
//! filter = "lanczos3"            # Resampling filter
//!
//! [[output.png]]
//! name = "logo192.png"
//! size = 192
//!
//! [[output.png]]
//! name = "logo512.png"
//! size = 512
//! ```

use std::collections::HashSet;
use std::path::PathBuf;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Largest edge an ICO directory entry can describe.
pub const MAX_ICO_SIZE: u32 = 256;

/// Asset output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory.
    pub dir: PathBuf,

    /// Icon file name, relative to `dir`.
    pub ico: PathBuf,

    /// Square frame sizes embedded in the icon.
    pub ico_sizes: Vec<u32>,

    /// Square PNG renditions.
    pub png: Vec<PngTarget>,

    /// Resampling filter for every rendition.
    pub filter: ResizeFilter,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public"),
            ico: PathBuf::from("favicon.ico"),
            ico_sizes: vec![16, 32, 48, 64],
            png: vec![
                PngTarget::new("logo192.png", 192),
                PngTarget::new("logo512.png", 512),
            ],
            filter: ResizeFilter::default(),
        }
    }
}

/// A single square PNG rendition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PngTarget {
    /// File name, relative to `[output] dir`.
    pub name: PathBuf,
    /// Edge length in pixels.
    pub size: u32,
}

impl PngTarget {
    pub fn new(name: impl Into<PathBuf>, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Resampling filter, mapped onto `image::imageops::FilterType`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Gaussian,
    Triangle,
    Nearest,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::Nearest => FilterType::Nearest,
        }
    }
}

impl OutputConfig {
    /// Icon sizes in ascending order with duplicates removed.
    pub fn unique_ico_sizes(&self) -> Vec<u32> {
        let mut sizes = self.ico_sizes.clone();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Absolute icon path (valid after config normalization).
    pub fn ico_path(&self) -> PathBuf {
        self.dir.join(&self.ico)
    }

    /// Validate sizes and file names.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.ico.as_os_str().is_empty() {
            diag.error("output.ico", "icon file name is empty");
        }

        if self.ico_sizes.is_empty() {
            diag.error_with_hint(
                "output.ico_sizes",
                "no icon sizes configured",
                "use e.g. ico_sizes = [16, 32, 48, 64]",
            );
        }
        for &size in &self.ico_sizes {
            if size == 0 || size > MAX_ICO_SIZE {
                diag.error_with_hint(
                    "output.ico_sizes",
                    format!("icon size {size} is out of range"),
                    format!("icon frames must be between 1 and {MAX_ICO_SIZE} pixels"),
                );
            }
        }

        let mut seen = HashSet::new();
        seen.insert(self.ico.clone());
        for target in &self.png {
            if target.name.as_os_str().is_empty() {
                diag.error("output.png.name", "PNG file name is empty");
            } else if !seen.insert(target.name.clone()) {
                diag.error(
                    "output.png.name",
                    format!("`{}` is written more than once", target.name.display()),
                );
            }
            if target.size == 0 {
                diag.error(
                    "output.png.size",
                    format!("`{}` has size 0", target.name.display()),
                );
            }
        }
    }
}
