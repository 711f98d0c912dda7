//! Bounding region of a workspace's scene for snapshot export.
//!
//! Computed fresh on every export request; never stored. The region is
//! anchored at the canvas origin (top-left of the exported image), so the
//! computation is a pure maximum-fold over element far corners.

use nodebench_core::constants::MIN_RASTER_EXTENT;

use crate::scene::{NodeElement, NoteElement};

/// Minimal origin-anchored rectangle containing a scene.
///
/// Width and height are each at least 1 canvas unit, so the derived raster
/// target is never degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    /// Width in canvas units.
    pub width: f64,
    /// Height in canvas units.
    pub height: f64,
}

impl BoundingRegion {
    /// Raster size in pixels at 1 canvas unit = 1 pixel (96 DPI
    /// equivalent), rounded up.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.ceil() as u32, self.height.ceil() as u32)
    }
}

/// Compute the bounding region over a workspace's nodes and notes.
///
/// Visits nodes first, then notes; the result is order-independent since
/// this is a pure max-fold. Connectors are most often within the bounding
/// box of the nodes and notes, so they are not considered.
///
/// Elements at negative coordinates do not shrink the region toward them;
/// they fall outside the origin-anchored export and are clipped.
pub fn compute_bounds<'a, N, M>(nodes: N, notes: M) -> BoundingRegion
where
    N: IntoIterator<Item = &'a NodeElement>,
    M: IntoIterator<Item = &'a NoteElement>,
{
    let mut width = MIN_RASTER_EXTENT;
    let mut height = MIN_RASTER_EXTENT;

    for n in nodes {
        width = width.max(n.x + n.width);
        height = height.max(n.y + n.height);
    }

    for n in notes {
        width = width.max(n.x + n.width);
        height = height.max(n.y + n.height);
    }

    BoundingRegion { width, height }
}
