//! Scene elements placed on a workspace canvas.
//!
//! A workspace owns two element kinds: nodes (computational units) and
//! notes (free-standing annotations). Both are positioned rectangles in
//! canvas coordinates; extents are kept non-negative by construction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A computational unit placed on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeElement {
    /// Stable identity of the node.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Canvas X position (top-left corner).
    pub x: f64,
    /// Canvas Y position (top-left corner).
    pub y: f64,
    /// Width in canvas units.
    pub width: f64,
    /// Height in canvas units.
    pub height: f64,
}

impl NodeElement {
    /// Create a node at the given position and extent.
    ///
    /// Extents are clamped to zero if negative.
    pub fn new(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// A free-standing annotation placed on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteElement {
    /// Stable identity of the note.
    pub id: Uuid,
    /// Annotation text.
    pub text: String,
    /// Canvas X position (top-left corner).
    pub x: f64,
    /// Canvas Y position (top-left corner).
    pub y: f64,
    /// Width in canvas units.
    pub width: f64,
    /// Height in canvas units.
    pub height: f64,
}

impl NoteElement {
    /// Create a note at the given position and extent.
    ///
    /// Extents are clamped to zero if negative.
    pub fn new(text: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// A positioned, sized item on a workspace canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SceneElement {
    /// A computational node.
    Node(NodeElement),
    /// An annotation.
    Note(NoteElement),
}

impl SceneElement {
    /// Canvas X position
    pub fn x(&self) -> f64 {
        match self {
            SceneElement::Node(n) => n.x,
            SceneElement::Note(n) => n.x,
        }
    }

    /// Canvas Y position
    pub fn y(&self) -> f64 {
        match self {
            SceneElement::Node(n) => n.y,
            SceneElement::Note(n) => n.y,
        }
    }

    /// Width in canvas units
    pub fn width(&self) -> f64 {
        match self {
            SceneElement::Node(n) => n.width,
            SceneElement::Note(n) => n.width,
        }
    }

    /// Height in canvas units
    pub fn height(&self) -> f64 {
        match self {
            SceneElement::Node(n) => n.height,
            SceneElement::Note(n) => n.height,
        }
    }

    /// Far corner of the element: `(x + width, y + height)`
    pub fn max_extent(&self) -> (f64, f64) {
        (self.x() + self.width(), self.y() + self.height())
    }
}

impl From<NodeElement> for SceneElement {
    fn from(n: NodeElement) -> Self {
        SceneElement::Node(n)
    }
}

impl From<NoteElement> for SceneElement {
    fn from(n: NoteElement) -> Self {
        SceneElement::Note(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_extent_is_clamped() {
        let node = NodeElement::new("Add", 10.0, 10.0, -5.0, -1.0);
        assert_eq!(node.width, 0.0);
        assert_eq!(node.height, 0.0);
    }

    #[test]
    fn test_max_extent() {
        let el: SceneElement = NoteElement::new("todo", 20.0, 5.0, 5.0, 5.0).into();
        assert_eq!(el.max_extent(), (25.0, 10.0));
    }
}
