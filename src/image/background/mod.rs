//! Remove a flat background from images.
//!
//! The background color is the top-left pixel. Every pixel whose RGB
//! channels all lie within the tolerance of it is cleared to transparent
//! black, either everywhere (`global`) or only where it is reachable from
//! the border (`connected`).

mod floodfill;
mod mask;
mod process;

use image::Rgba;

pub use process::remove_background;

/// Replacement for removed pixels.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
