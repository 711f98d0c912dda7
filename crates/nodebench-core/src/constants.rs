//! Shared constants for the NodeBench shell.

/// File extension of graph documents shown in the samples menu.
pub const GRAPH_FILE_EXTENSION: &str = "dyn";

/// Name of the samples directory relative to the application directory.
pub const SAMPLES_DIR_NAME: &str = "samples";

/// Minimum width/height of an exported raster in canvas units.
///
/// Guarantees a non-degenerate raster target even for an empty workspace.
pub const MIN_RASTER_EXTENT: f64 = 1.0;
