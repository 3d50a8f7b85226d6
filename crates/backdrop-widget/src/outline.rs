#![forbid(unsafe_code)]

//! Rounded-rectangle reveal mask for the front panel.

use backdrop_core::geometry::{Rect, RoundedRect, Size};

/// Compute the clip applied to the front panel at animation fraction
/// `fraction`.
///
/// The clip spans `(0, 0)` to `(width, height + open_radius)`: the extra
/// `open_radius` of height sits below the visible bottom edge so the rounded
/// corner is never clipped away at full radius. The corner radius grows
/// linearly from 0 at fraction 0 to `open_radius` at fraction 1.
///
/// Recomputed on every tick; the panel's extent may change between layout
/// passes, so the mask is never cached.
#[must_use]
pub fn reveal_mask(size: Size, open_radius: i32, fraction: f32) -> RoundedRect {
    let fraction = fraction.clamp(0.0, 1.0);
    RoundedRect::new(
        Rect::new(0, 0, size.width, size.height + open_radius),
        open_radius as f32 * fraction,
    )
}
