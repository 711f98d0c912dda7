//! # NodeBench Canvas
//!
//! The scene model of a NodeBench workspace (nodes and notes placed on a
//! canvas), per-workspace pan/zoom and session state, and rasterized
//! snapshot export of the visible graph.

pub mod bounds;
pub mod scene;
pub mod snapshot;
pub mod workspace;

pub use bounds::{compute_bounds, BoundingRegion};
pub use scene::{NodeElement, NoteElement, SceneElement};
pub use snapshot::{export_snapshot, RenderSurface, SceneRenderer};
pub use workspace::{Workspace, WorkspaceSession, WorkspaceSessionState};
