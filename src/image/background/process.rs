use image::{Rgba, RgbaImage};

use crate::config::BackgroundMode;
use crate::image::background::TRANSPARENT;
use crate::image::background::floodfill::clear_edge_connected;
use crate::image::background::mask::{BackgroundMask, build_background_mask};

/// Outcome of a background removal pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundRemoval {
    /// Color sampled from the top-left pixel.
    pub color: Rgba<u8>,
    /// Number of pixels made transparent.
    pub cleared: usize,
}

/// The background color: whatever sits at (0, 0).
///
/// `None` for an image without pixels.
pub fn sample_background(img: &RgbaImage) -> Option<Rgba<u8>> {
    (img.width() > 0 && img.height() > 0).then(|| *img.get_pixel(0, 0))
}

/// Replace background-colored pixels with transparent black, in place.
///
/// A pixel is background when each of its RGB channels is within
/// `tolerance` of the sampled color. Non-matching pixels are left untouched,
/// including their alpha. Zero-sized images pass through and yield `None`.
pub fn remove_background(
    img: &mut RgbaImage,
    tolerance: u8,
    mode: BackgroundMode,
) -> Option<BackgroundRemoval> {
    let color = sample_background(img)?;
    let mask = build_background_mask(img, &color, tolerance);

    let cleared = match mode {
        BackgroundMode::Global => clear_all(img, &mask),
        BackgroundMode::Connected => clear_edge_connected(img, &mask),
    };

    Some(BackgroundRemoval { color, cleared })
}

fn clear_all(img: &mut RgbaImage, mask: &BackgroundMask) -> usize {
    let mut cleared = 0;
    for (pixel, &is_background) in img.pixels_mut().zip(&mask.matches) {
        if is_background {
            *pixel = TRANSPARENT;
            cleared += 1;
        }
    }
    cleared
}
