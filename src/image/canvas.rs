//! Center an image on a transparent square canvas.

use image::{Rgba, RgbaImage};

/// Side length and paste offset for centering a `width` x `height` image.
///
/// Offsets use floor division, so when the padding is odd the extra pixel
/// ends up on the right/bottom.
pub const fn square_offset(width: u32, height: u32) -> (u32, u32, u32) {
    let side = if width > height { width } else { height };
    (side, (side - width) / 2, (side - height) / 2)
}

/// Paste `img` centered onto a fully transparent `max(w, h)` square canvas.
///
/// The source alpha acts as the paste mask, so transparent source pixels
/// leave the canvas untouched.
pub fn center_on_square(img: &RgbaImage) -> RgbaImage {
    let (side, offset_x, offset_y) = square_offset(img.width(), img.height());
    let mut canvas = RgbaImage::new(side, side);

    for (x, y, src) in img.enumerate_pixels() {
        let dst = canvas.get_pixel_mut(x + offset_x, y + offset_y);
        *dst = paste_masked(*src, *dst);
    }

    canvas
}

/// Blend `src` over `dst` using `src`'s alpha as mask, on all four channels.
#[inline]
fn paste_masked(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let mask = u32::from(src[3]);
    match mask {
        0 => dst,
        255 => src,
        _ => {
            let blend = |s: u8, d: u8| {
                ((u32::from(s) * mask + u32::from(d) * (255 - mask) + 127) / 255) as u8
            };
            Rgba([
                blend(src[0], dst[0]),
                blend(src[1], dst[1]),
                blend(src[2], dst[2]),
                blend(src[3], dst[3]),
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgba<u8> = Rgba([10, 120, 240, 255]);

    #[test]
    fn offset_for_landscape() {
        assert_eq!(square_offset(100, 60), (100, 0, 20));
    }

    #[test]
    fn offset_for_portrait_odd_padding() {
        // 7 pixels of padding: 3 left, 4 right
        assert_eq!(square_offset(4, 11), (11, 3, 0));
    }

    #[test]
    fn square_input_is_not_padded() {
        assert_eq!(square_offset(32, 32), (32, 0, 0));
    }

    #[test]
    fn padding_differs_by_at_most_one() {
        for width in 1..40 {
            for height in 1..40 {
                let (side, x, y) = square_offset(width, height);
                let right = side - width - x;
                let bottom = side - height - y;
                assert!(right - x <= 1, "{width}x{height}");
                assert!(bottom - y <= 1, "{width}x{height}");
            }
        }
    }

    #[test]
    fn canvas_is_transparent_outside_source() {
        let img = RgbaImage::from_pixel(6, 2, INK);
        let canvas = center_on_square(&img);

        assert_eq!(canvas.dimensions(), (6, 6));
        for (x, y, pixel) in canvas.enumerate_pixels() {
            if (2..4).contains(&y) {
                assert_eq!(*pixel, INK, "({x}, {y})");
            } else {
                assert_eq!(*pixel, Rgba([0, 0, 0, 0]), "({x}, {y})");
            }
        }
    }

    #[test]
    fn transparent_source_pixels_do_not_become_black() {
        let mut img = RgbaImage::from_pixel(2, 4, INK);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 0]));

        let canvas = center_on_square(&img);

        // source (0, 0) lands at canvas (1, 0)
        assert_eq!(*canvas.get_pixel(1, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*canvas.get_pixel(2, 0), INK);
    }

    #[test]
    fn partial_alpha_blends_with_transparent_canvas() {
        let blended = paste_masked(Rgba([255, 255, 255, 128]), Rgba([0, 0, 0, 0]));
        assert_eq!(blended, Rgba([128, 128, 128, 64]));
    }
}
