//! Input routing across open workspaces.
//!
//! Key presses are intercepted before they reach the active workspace, so
//! the router grabs them and forwards them to the current workspace's
//! session state. Selection changes re-announce the new active workspace's
//! pan offset and zoom so dependent views resynchronize after a tab
//! switch.

use nodebench_canvas::{Workspace, WorkspaceSession};
use nodebench_core::{ShellEvent, ShellEventBus};

/// Keyboard keys the shell distinguishes.
///
/// Only `Escape` is meaningful to the router; everything else passes
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// The cancel/escape key.
    Escape,
    /// Enter/return.
    Enter,
    /// Delete.
    Delete,
    /// Tab.
    Tab,
    /// A printable character.
    Character(char),
}

/// Routes input events to the currently active workspace.
///
/// Owns the ordered open-workspace list and the active index. Exactly one
/// workspace is active at any time and the active index is always a valid
/// position in the list.
pub struct WorkspaceInputRouter {
    sessions: Vec<WorkspaceSession>,
    active_index: usize,
    ui_locked: bool,
    bus: ShellEventBus,
}

impl WorkspaceInputRouter {
    /// Create a router with a single home workspace.
    pub fn new(bus: ShellEventBus) -> Self {
        Self {
            sessions: vec![WorkspaceSession::new(Workspace::new("Home"))],
            active_index: 0,
            ui_locked: false,
            bus,
        }
    }

    /// Number of open workspaces
    pub fn workspace_count(&self) -> usize {
        self.sessions.len()
    }

    /// Index of the active workspace
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Session at `index`, if open
    pub fn session(&self, index: usize) -> Option<&WorkspaceSession> {
        self.sessions.get(index)
    }

    /// The active workspace's session
    pub fn active_session(&self) -> &WorkspaceSession {
        &self.sessions[self.active_index]
    }

    /// The active workspace's session, mutably
    pub fn active_session_mut(&mut self) -> &mut WorkspaceSession {
        &mut self.sessions[self.active_index]
    }

    /// Whether drag interactions are currently suppressed
    pub fn ui_locked(&self) -> bool {
        self.ui_locked
    }

    /// Lock or unlock pointer-drag interactions
    pub fn set_ui_locked(&mut self, locked: bool) {
        self.ui_locked = locked;
    }

    /// Open a workspace, returning its index.
    ///
    /// The new workspace gets fresh session state and is not selected
    /// automatically.
    pub fn open_workspace(&mut self, workspace: Workspace) -> usize {
        self.sessions.push(WorkspaceSession::new(workspace));
        self.sessions.len() - 1
    }

    /// Close the workspace at `index`, destroying its session state.
    ///
    /// The last remaining workspace cannot be closed. If the active
    /// workspace closes, the selection moves to the previous tab and its
    /// offset/zoom are re-announced.
    pub fn close_workspace(&mut self, index: usize) -> bool {
        if index >= self.sessions.len() {
            tracing::warn!(index, "close request for unknown workspace");
            return false;
        }
        if self.sessions.len() == 1 {
            tracing::warn!("refusing to close the last open workspace");
            return false;
        }
        self.sessions.remove(index);
        if index < self.active_index {
            self.active_index -= 1;
        } else if index == self.active_index {
            let next = self.active_index.min(self.sessions.len() - 1);
            self.select_workspace(next);
        }
        true
    }

    /// Route a key state change to the active workspace.
    ///
    /// For the escape key, sets the active workspace's held flag to
    /// `pressed`. All other keys are not the router's concern.
    pub fn route_key(&mut self, key: KeyCode, pressed: bool) {
        if key != KeyCode::Escape {
            return;
        }
        self.sessions[self.active_index].state.escape_held = pressed;
    }

    /// Change the active workspace.
    ///
    /// Re-emits the new active workspace's current pan offset and zoom as
    /// change notifications; this completes fully before the call returns.
    /// Out-of-range indices are rejected.
    pub fn select_workspace(&mut self, index: usize) -> bool {
        if index >= self.sessions.len() {
            tracing::warn!(
                index,
                open = self.sessions.len(),
                "selection of unknown workspace rejected"
            );
            return false;
        }
        self.active_index = index;

        let workspace = &self.sessions[index].workspace;
        self.bus.publish(&ShellEvent::WorkspaceSelected { index });
        self.bus.publish(&ShellEvent::OffsetChanged {
            x: workspace.offset_x,
            y: workspace.offset_y,
        });
        self.bus.publish(&ShellEvent::ZoomChanged {
            zoom: workspace.zoom(),
        });
        true
    }

    /// Compute a dragged element's new position from the pointer.
    ///
    /// While the UI is locked, pointer movement is a no-op: the element's
    /// current position comes back unchanged (the drag is suppressed, not
    /// queued).
    pub fn route_drag(
        &self,
        current: (f64, f64),
        pointer: (f64, f64),
        grab_offset: (f64, f64),
    ) -> (f64, f64) {
        if self.ui_locked {
            return current;
        }
        (pointer.0 - grab_offset.0, pointer.1 - grab_offset.1)
    }
}
