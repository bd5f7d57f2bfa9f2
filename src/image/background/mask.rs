use image::{Rgba, RgbaImage};
use rayon::prelude::*;

/// Per-pixel "matches the background color" flags, row-major.
pub(super) struct BackgroundMask {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) matches: Vec<bool>,
}

impl BackgroundMask {
    #[inline]
    pub(super) fn is_background(&self, x: u32, y: u32) -> bool {
        self.matches[pixel_index(self.width, x, y)]
    }
}

const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// Whether every RGB channel of `pixel` lies within `tolerance` of `bg`.
///
/// Inclusive on both ends; alpha takes no part in the decision.
#[inline]
pub(super) fn matches_background(pixel: &[u8], bg: &Rgba<u8>, tolerance: u8) -> bool {
    pixel[..3]
        .iter()
        .zip(&bg.0[..3])
        .all(|(channel, bg_channel)| channel.abs_diff(*bg_channel) <= tolerance)
}

/// Classify every pixel of `img` against the background color.
pub(super) fn build_background_mask(
    img: &RgbaImage,
    bg: &Rgba<u8>,
    tolerance: u8,
) -> BackgroundMask {
    let (width, height) = img.dimensions();
    let len = width as usize * height as usize;
    let raw = img.as_raw();

    let matches = if len >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_exact(4)
            .map(|pixel| matches_background(pixel, bg, tolerance))
            .collect()
    } else {
        raw.chunks_exact(4)
            .map(|pixel| matches_background(pixel, bg, tolerance))
            .collect()
    };

    BackgroundMask {
        width,
        height,
        matches,
    }
}

#[inline]
pub(super) fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    #[test]
    fn tolerance_is_inclusive() {
        let bg = Rgba([100, 100, 100, 255]);
        assert!(matches_background(&[110, 90, 100, 255], &bg, 10));
        assert!(!matches_background(&[111, 100, 100, 255], &bg, 10));
        assert!(!matches_background(&[100, 100, 89, 255], &bg, 10));
    }

    #[test]
    fn zero_tolerance_requires_exact_rgb() {
        let bg = Rgba([7, 8, 9, 255]);
        assert!(matches_background(&[7, 8, 9, 0], &bg, 0));
        assert!(!matches_background(&[7, 8, 10, 255], &bg, 0));
    }

    #[test]
    fn alpha_is_ignored() {
        let bg = Rgba([255, 255, 255, 255]);
        assert!(matches_background(&[255, 255, 255, 3], &bg, 0));
    }

    #[test]
    fn parallel_and_serial_paths_agree() {
        // 256 * 160 = 40960 pixels, above the parallel threshold
        let mut img = RgbaImage::new(256, 160);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255]);
        }
        let bg = Rgba([20, 20, 40, 255]);

        let mask = build_background_mask(&img, &bg, 12);
        assert_eq!(mask.matches.len(), 256 * 160);
        for (x, y, pixel) in img.enumerate_pixels() {
            assert_eq!(
                mask.is_background(x, y),
                matches_background(&pixel.0, &bg, 12),
                "({x}, {y})"
            );
        }
    }
}
