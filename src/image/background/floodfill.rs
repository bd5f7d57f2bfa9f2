use image::RgbaImage;

use crate::image::background::TRANSPARENT;
use crate::image::background::mask::{BackgroundMask, pixel_index};

/// Clear background pixels reachable from the image border.
///
/// Scanline fill over the 4-connected background region: each popped seed
/// is widened to the full horizontal run, then one seed per run is pushed
/// for the rows above and below. Returns the number of cleared pixels.
pub(super) fn clear_edge_connected(output: &mut RgbaImage, mask: &BackgroundMask) -> usize {
    let width = mask.width;
    let height = mask.height;
    if width == 0 || height == 0 {
        return 0;
    }

    debug_assert_eq!(output.dimensions(), (width, height));

    let mut filled = vec![false; width as usize * height as usize];
    let mut stack = Vec::with_capacity((width as usize + height as usize) * 2);

    push_runs(&mut stack, mask, &filled, 0, width - 1, 0);
    if height > 1 {
        push_runs(&mut stack, mask, &filled, 0, width - 1, height - 1);
    }
    for y in 1..height.saturating_sub(1) {
        stack.push((0, y));
        if width > 1 {
            stack.push((width - 1, y));
        }
    }

    let mut cleared = 0;
    while let Some((seed_x, y)) = stack.pop() {
        if !fillable(mask, &filled, seed_x, y) {
            continue;
        }

        let mut left = seed_x;
        while left > 0 && fillable(mask, &filled, left - 1, y) {
            left -= 1;
        }
        let mut right = seed_x;
        while right + 1 < width && fillable(mask, &filled, right + 1, y) {
            right += 1;
        }

        for x in left..=right {
            filled[pixel_index(width, x, y)] = true;
            output.put_pixel(x, y, TRANSPARENT);
        }
        cleared += (right - left + 1) as usize;

        if y > 0 {
            push_runs(&mut stack, mask, &filled, left, right, y - 1);
        }
        if y + 1 < height {
            push_runs(&mut stack, mask, &filled, left, right, y + 1);
        }
    }

    cleared
}

#[inline]
fn fillable(mask: &BackgroundMask, filled: &[bool], x: u32, y: u32) -> bool {
    mask.is_background(x, y) && !filled[pixel_index(mask.width, x, y)]
}

/// Push the first pixel of every fillable run in `left..=right` on row `y`.
#[inline]
fn push_runs(
    stack: &mut Vec<(u32, u32)>,
    mask: &BackgroundMask,
    filled: &[bool],
    left: u32,
    right: u32,
    y: u32,
) {
    let mut in_run = false;
    for x in left..=right {
        let open = fillable(mask, filled, x, y);
        if open && !in_run {
            stack.push((x, y));
        }
        in_run = open;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use image::{Rgba, RgbaImage};

    use super::clear_edge_connected;
    use crate::image::background::TRANSPARENT;
    use crate::image::background::mask::BackgroundMask;

    #[test]
    fn matches_reference_bfs_on_random_masks() {
        for seed in 0_u64..48 {
            let width = 29_u32;
            let height = 17_u32;
            let len = width as usize * height as usize;
            let mut rng = Lcg::new(seed.wrapping_mul(2_654_435_761).wrapping_add(11));

            let matches = (0..len).map(|_| rng.next_u32() % 100 < 55).collect();
            let mask = BackgroundMask {
                width,
                height,
                matches,
            };

            let mut scanline = make_random_image(width, height, &mut rng);
            let mut reference = scanline.clone();

            let cleared = clear_edge_connected(&mut scanline, &mask);
            let expected = clear_reference_bfs(&mut reference, &mask);

            assert_eq!(scanline, reference, "seed={seed}");
            assert_eq!(cleared, expected, "seed={seed}");
        }
    }

    #[test]
    fn enclosed_island_survives() {
        // 5x5 all background except a ring around the center pixel
        let mut matches = vec![true; 25];
        for (x, y) in [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)] {
            matches[y * 5 + x] = false;
        }
        let mask = BackgroundMask {
            width: 5,
            height: 5,
            matches,
        };
        let mut img = RgbaImage::from_pixel(5, 5, Rgba([9, 9, 9, 255]));

        let cleared = clear_edge_connected(&mut img, &mask);

        assert_eq!(cleared, 16);
        assert_eq!(*img.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(img.get_pixel(2, 2)[3], 255);
        assert_eq!(img.get_pixel(1, 1)[3], 255);
    }

    #[test]
    fn empty_mask_is_noop() {
        let mask = BackgroundMask {
            width: 0,
            height: 0,
            matches: Vec::new(),
        };
        let mut img = RgbaImage::new(0, 0);
        assert_eq!(clear_edge_connected(&mut img, &mask), 0);
    }

    fn clear_reference_bfs(output: &mut RgbaImage, mask: &BackgroundMask) -> usize {
        let (width, height) = (mask.width, mask.height);
        let mut visited = vec![false; width as usize * height as usize];
        let mut queue = VecDeque::new();

        for x in 0..width {
            enqueue(&mut queue, &mut visited, mask, x, 0);
            enqueue(&mut queue, &mut visited, mask, x, height - 1);
        }
        for y in 0..height {
            enqueue(&mut queue, &mut visited, mask, 0, y);
            enqueue(&mut queue, &mut visited, mask, width - 1, y);
        }

        let mut cleared = 0;
        while let Some((x, y)) = queue.pop_front() {
            output.put_pixel(x, y, TRANSPARENT);
            cleared += 1;

            if x > 0 {
                enqueue(&mut queue, &mut visited, mask, x - 1, y);
            }
            if x + 1 < width {
                enqueue(&mut queue, &mut visited, mask, x + 1, y);
            }
            if y > 0 {
                enqueue(&mut queue, &mut visited, mask, x, y - 1);
            }
            if y + 1 < height {
                enqueue(&mut queue, &mut visited, mask, x, y + 1);
            }
        }
        cleared
    }

    fn enqueue(
        queue: &mut VecDeque<(u32, u32)>,
        visited: &mut [bool],
        mask: &BackgroundMask,
        x: u32,
        y: u32,
    ) {
        let i = y as usize * mask.width as usize + x as usize;
        if !visited[i] && mask.matches[i] {
            visited[i] = true;
            queue.push_back((x, y));
        }
    }

    fn make_random_image(width: u32, height: u32, rng: &mut Lcg) -> RgbaImage {
        RgbaImage::from_fn(width, height, |_, _| {
            let v = rng.next_u32().to_le_bytes();
            Rgba([v[0], v[1], v[2], v[3] | 1])
        })
    }

    struct Lcg {
        state: u64,
    }

    impl Lcg {
        fn new(seed: u64) -> Self {
            Self { state: seed }
        }

        fn next_u32(&mut self) -> u32 {
            self.state = self
                .state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1);
            (self.state >> 32) as u32
        }
    }
}
