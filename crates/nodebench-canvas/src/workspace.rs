//! Workspaces and per-workspace session state.
//!
//! A workspace is one open canvas/graph document: its node and note sets,
//! pan offset, and zoom factor. Session state is the transient interaction
//! state of an open workspace (currently a single held-key flag); it is
//! created when the workspace is opened, destroyed when it is closed, and
//! deliberately NOT reset on tab switches.

use serde::{Deserialize, Serialize};

use crate::scene::{NodeElement, NoteElement};

/// Zoom bounds for a workspace viewport.
const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 50.0;

/// One open canvas/graph document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Display name of the document.
    pub name: String,
    /// Nodes placed on this canvas.
    pub nodes: Vec<NodeElement>,
    /// Notes placed on this canvas.
    pub notes: Vec<NoteElement>,
    /// Pan offset X in canvas units.
    pub offset_x: f64,
    /// Pan offset Y in canvas units.
    pub offset_y: f64,
    zoom: f64,
}

impl Workspace {
    /// Create an empty workspace at the origin with 100% zoom.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            notes: Vec::new(),
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }

    /// Current zoom factor (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom factor, constrained to 0.1..=50.0.
    ///
    /// Out-of-range values are ignored; the zoom factor stays positive.
    pub fn set_zoom(&mut self, zoom: f64) {
        if (MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
            self.zoom = zoom;
        }
    }

    /// Set the pan offset.
    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    /// Add a node to the canvas.
    pub fn add_node(&mut self, node: NodeElement) {
        self.nodes.push(node);
    }

    /// Add a note to the canvas.
    pub fn add_note(&mut self, note: NoteElement) {
        self.notes.push(note);
    }
}

/// Transient, per-workspace interaction flags.
///
/// Not persisted with the graph. Switching tabs never clears another
/// workspace's held-key state.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkspaceSessionState {
    /// Whether the cancel/escape key is currently depressed for this
    /// workspace.
    pub escape_held: bool,
}

/// A workspace together with its transient session state.
#[derive(Debug, Clone)]
pub struct WorkspaceSession {
    /// The open document.
    pub workspace: Workspace,
    /// Transient interaction state, alive as long as the workspace is open.
    pub state: WorkspaceSessionState,
}

impl WorkspaceSession {
    /// Open a session around a workspace with fresh session state.
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace,
            state: WorkspaceSessionState::default(),
        }
    }
}
