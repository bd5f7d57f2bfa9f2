//! Trim fully transparent margins.

use std::fmt;

use image::{RgbaImage, imageops};

/// Smallest rectangle holding every pixel with non-zero alpha.
///
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub const fn width(&self) -> u32 {
        self.right - self.left
    }

    pub const fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Whether the box spans the whole `width` x `height` image.
    pub const fn covers(&self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.right == width && self.bottom == height
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Scan for the bounding box of visible content.
///
/// Returns `None` when every pixel is fully transparent.
pub fn content_bounds(img: &RgbaImage) -> Option<BoundingBox> {
    let mut bounds: Option<BoundingBox> = None;

    for (y, row) in img.rows().enumerate() {
        let y = y as u32;
        let mut visible = row
            .enumerate()
            .filter(|(_, pixel)| pixel[3] != 0)
            .map(|(x, _)| x as u32);

        let Some(first) = visible.next() else {
            continue;
        };
        let last = visible.last().unwrap_or(first);

        bounds = Some(match bounds {
            None => BoundingBox {
                left: first,
                top: y,
                right: last + 1,
                bottom: y + 1,
            },
            Some(b) => BoundingBox {
                left: b.left.min(first),
                top: b.top,
                right: b.right.max(last + 1),
                bottom: y + 1,
            },
        });
    }

    bounds
}

/// Crop to the visible content.
///
/// An image without visible pixels is returned unchanged together with
/// `None`; there is nothing to crop to.
pub fn crop_to_content(img: RgbaImage) -> (RgbaImage, Option<BoundingBox>) {
    let Some(bounds) = content_bounds(&img) else {
        return (img, None);
    };

    if bounds.covers(img.width(), img.height()) {
        return (img, Some(bounds));
    }

    let cropped = imageops::crop_imm(
        &img,
        bounds.left,
        bounds.top,
        bounds.width(),
        bounds.height(),
    )
    .to_image();
    (cropped, Some(bounds))
}
