//! Configuration section definitions.
//!
//! Each module corresponds to a section in `faviconize.toml`:
//!
//! | Module       | TOML Section     | Purpose                             |
//! |--------------|------------------|-------------------------------------|
//! | `background` | `[background]`   | Background color stripping          |
//! | `crop`       | `[crop]`         | Trim to visible content             |
//! | `output`     | `[output]`       | Output directory, sizes, filter     |

pub mod background;
pub mod crop;
pub mod output;

pub use background::{BackgroundConfig, BackgroundMode};
pub use crop::CropConfig;
pub use output::OutputConfig;
