//! Rasterized snapshot export of a workspace.
//!
//! The exporter computes the scene's bounding region, allocates an image
//! buffer of exactly that size, hands the buffer to a render surface, and
//! encodes the result as PNG at the destination path. The write handle is
//! released on every exit path; any I/O or encode failure collapses into
//! `ExportError::WriteFailed` and is reported to the caller rather than
//! raised as a fatal condition.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

use nodebench_core::error::ExportError;

use crate::bounds::compute_bounds;
use crate::workspace::Workspace;

/// A surface that can rasterize itself into an image buffer.
///
/// The buffer is pre-sized to the scene's bounding region; the surface
/// draws in canvas coordinates at 1 canvas unit = 1 pixel.
pub trait RenderSurface {
    /// Draw into the target buffer.
    fn render(&self, target: &mut RgbaImage);
}

/// Built-in render surface that flat-fills element rectangles.
///
/// Nodes are drawn slate, notes pale yellow, over a white background.
/// Host applications with a real renderer supply their own
/// [`RenderSurface`]; this one keeps export usable (and testable) without
/// any UI toolkit.
#[derive(Debug, Clone)]
pub struct SceneRenderer<'a> {
    workspace: &'a Workspace,
}

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const NODE_FILL: Rgba<u8> = Rgba([90, 100, 110, 255]);
const NOTE_FILL: Rgba<u8> = Rgba([250, 240, 170, 255]);

impl<'a> SceneRenderer<'a> {
    /// Create a renderer over the given workspace.
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }

    fn fill_rect(target: &mut RgbaImage, x: f64, y: f64, w: f64, h: f64, color: Rgba<u8>) {
        // Clip to the buffer; elements at negative coordinates fall
        // outside the origin-anchored export.
        let x0 = x.max(0.0) as u32;
        let y0 = y.max(0.0) as u32;
        let x1 = ((x + w).max(0.0).ceil() as u32).min(target.width());
        let y1 = ((y + h).max(0.0).ceil() as u32).min(target.height());
        for py in y0..y1 {
            for px in x0..x1 {
                target.put_pixel(px, py, color);
            }
        }
    }
}

impl RenderSurface for SceneRenderer<'_> {
    fn render(&self, target: &mut RgbaImage) {
        for pixel in target.pixels_mut() {
            *pixel = BACKGROUND;
        }
        for node in &self.workspace.nodes {
            Self::fill_rect(target, node.x, node.y, node.width, node.height, NODE_FILL);
        }
        for note in &self.workspace.notes {
            Self::fill_rect(target, note.x, note.y, note.width, note.height, NOTE_FILL);
        }
    }
}

/// Export a rasterized snapshot of the workspace's scene as PNG.
///
/// Creates or overwrites the file at `path`. The image is sized exactly to
/// the scene's bounding region (at least 1x1 pixel).
pub fn export_snapshot(
    workspace: &Workspace,
    surface: &dyn RenderSurface,
    path: &Path,
) -> Result<(), ExportError> {
    let region = compute_bounds(&workspace.nodes, &workspace.notes);
    let (width, height) = region.pixel_size();

    let mut buffer = RgbaImage::new(width, height);
    surface.render(&mut buffer);

    let write_failed = |reason: String| ExportError::WriteFailed {
        path: path.to_path_buf(),
        reason,
    };

    // Encode in memory first so the file handle is held only for the
    // write itself and released on every exit path.
    let mut encoded = Vec::new();
    PngEncoder::new(&mut encoded)
        .write_image(buffer.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(|e| write_failed(e.to_string()))?;

    let mut file = File::create(path).map_err(|e| write_failed(e.to_string()))?;
    file.write_all(&encoded)
        .map_err(|e| write_failed(e.to_string()))?;

    tracing::debug!(
        path = %path.display(),
        width,
        height,
        workspace = %workspace.name,
        "snapshot exported"
    );
    Ok(())
}
