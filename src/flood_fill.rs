//! Corner-seeded flood fill that clears border-connected background.
//!
//! The traversal starts from the four image corners and walks 4-connected
//! neighbours that the classifier accepts. Every dequeued pixel gets alpha 0;
//! RGB is left untouched. Corners are cleared unconditionally since they are
//! seeds, not classified pixels.

use crate::{classifier::is_background_candidate, types::FillStats};
use image::RgbaImage;
use std::collections::VecDeque;

/// Pixels already accepted as background and enqueued.
///
/// Only acceptance is recorded; a rejected neighbour stays unvisited and may
/// be evaluated again from another direction.
struct VisitedSet {
    width: usize,
    cells: Vec<bool>,
}

impl VisitedSet {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as usize,
            cells: vec![false; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width + x as usize
    }

    fn contains(&self, x: u32, y: u32) -> bool {
        self.cells.get(self.index(x, y)).copied().unwrap_or(false)
    }

    /// Returns `true` if the coordinate was not already present.
    fn insert(&mut self, x: u32, y: u32) -> bool {
        let idx = self.index(x, y);
        match self.cells.get_mut(idx) {
            Some(cell) if !*cell => {
                *cell = true;
                true
            },
            _ => false,
        }
    }
}

/// Seed coordinates in queue order: top-left, top-right, bottom-left, bottom-right.
///
/// Callers must ensure `width` and `height` are non-zero.
#[must_use]
pub fn corner_seeds(width: u32, height: u32) -> [(u32, u32); 4] {
    let right = width.saturating_sub(1);
    let bottom = height.saturating_sub(1);
    [(0, 0), (right, 0), (0, bottom), (right, bottom)]
}

/// In-bounds 4-connected neighbours in left, right, up, down order.
fn neighbors(x: u32, y: u32, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    [
        (x.checked_sub(1), Some(y)),
        (x.checked_add(1).filter(|&nx| nx < width), Some(y)),
        (Some(x), y.checked_sub(1)),
        (Some(x), y.checked_add(1).filter(|&ny| ny < height)),
    ]
    .into_iter()
    .filter_map(|(nx, ny)| Some((nx?, ny?)))
}

/// Make every border-connected background pixel of `image` fully transparent.
///
/// The image is mutated in place (alpha channel only). Zero-area images are
/// left alone and yield empty statistics.
///
/// # Examples
/// ```rust
/// use image::{Rgba, RgbaImage};
/// use logo_bgremove::flood_fill_background;
///
/// let mut image = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
/// image.put_pixel(1, 1, Rgba([0, 200, 0, 255]));
///
/// let stats = flood_fill_background(&mut image);
/// assert_eq!(stats.cleared_pixels, 8);
/// assert_eq!(image.get_pixel(1, 1)[3], 255);
/// ```
pub fn flood_fill_background(image: &mut RgbaImage) -> FillStats {
    let (width, height) = image.dimensions();
    let mut stats = FillStats::default();

    if width == 0 || height == 0 {
        return stats;
    }

    let mut visited = VisitedSet::new(width, height);
    let mut queue = VecDeque::new();

    for (x, y) in corner_seeds(width, height) {
        if visited.insert(x, y) {
            queue.push_back((x, y));
            stats.seeds += 1;
        }
    }

    while let Some((x, y)) = queue.pop_front() {
        image.get_pixel_mut(x, y)[3] = 0;
        stats.cleared_pixels += 1;

        for (nx, ny) in neighbors(x, y, width, height) {
            if visited.contains(nx, ny) {
                continue;
            }

            let [r, g, b, _] = image.get_pixel(nx, ny).0;
            if is_background_candidate(r, g, b) {
                visited.insert(nx, ny);
                queue.push_back((nx, ny));
            } else {
                stats.rejected_checks += 1;
            }
        }
    }

    stats
}
