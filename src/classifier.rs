//! Background pixel classification
//!
//! A pixel is a background candidate when it is bright and close to grey.
//! Saturation here is the simplified `(max - min) / max` purity measure over
//! the RGB channels, not full HSV saturation.

/// Pixels whose brightest channel is below this are considered too dark.
pub const DARK_FLOOR: u8 = 50;

/// Brightest channel must exceed this for a pixel to count as background.
pub const BRIGHTNESS_FLOOR: u8 = 150;

/// Saturation must stay strictly below this for a pixel to count as background.
pub const MAX_SATURATION: f64 = 0.25;

/// Decide whether a pixel may be continued through as background.
///
/// Pure function of the RGB channels; alpha is never consulted.
///
/// # Examples
/// ```rust
/// use logo_bgremove::is_background_candidate;
///
/// assert!(is_background_candidate(255, 255, 255));
/// assert!(!is_background_candidate(0, 200, 0));
/// ```
#[must_use]
#[inline]
pub fn is_background_candidate(r: u8, g: u8, b: u8) -> bool {
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);

    // The dark check is subsumed by the brightness floor but both are kept.
    if cmax < DARK_FLOOR {
        return false;
    }

    saturation(cmax, cmin) < MAX_SATURATION && cmax > BRIGHTNESS_FLOOR
}

/// Simplified saturation of a pixel given its brightest and darkest channel.
#[inline]
fn saturation(cmax: u8, cmin: u8) -> f64 {
    if cmax > 0 {
        f64::from(cmax - cmin) / f64::from(cmax)
    } else {
        0.0
    }
}
