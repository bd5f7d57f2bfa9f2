//! Image processing for favicon generation.
//!
//! # Modules
//!
//! - [`background`]: Flat background removal
//! - [`crop`]: Bounding box and crop-to-content
//! - [`canvas`]: Centering on a transparent square
//! - [`emit`]: ICO / PNG output
//! - [`inspect`]: Diagnostic report

pub mod background;
pub mod canvas;
pub mod crop;
pub mod emit;
mod error;
pub mod inspect;
mod load;

pub use error::AssetError;
pub use load::open_image;
