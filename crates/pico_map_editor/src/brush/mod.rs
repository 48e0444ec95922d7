//! Brushes: pointer gestures turned into cell coordinates
//!
//! A brush only decides *where* to paint. What gets painted there is the
//! [`Arrangement`](crate::arrangement::Arrangement)'s business.
//!
//! Every brush is a two-state machine. `mouse_down` starts dragging,
//! `mouse_move` reports a preview, `mouse_up` reports the cells to commit, and
//! `clean_up` returns to idle. `clean_up` must run once per gesture, including
//! cancelled ones.

mod pen;
mod rectangle;

pub use pen::Pen;
pub use rectangle::{rectangle_cells, RectangleBrush};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::EditorError;

/// A cell position emitted by a brush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrushPaint {
    pub x: i32,
    pub y: i32,
}

impl BrushPaint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Gesture state shared by all brushes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushState {
    #[default]
    Idle,
    Dragging {
        anchor: BrushPaint,
    },
}

/// Available brushes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BrushKind {
    /// One cell per move event
    #[default]
    Pen,
    /// Box from the press position to the cursor
    #[serde(rename = "RectangleBrush")]
    Rectangle,
}

impl BrushKind {
    pub const ALL: [BrushKind; 2] = [BrushKind::Pen, BrushKind::Rectangle];

    pub fn name(&self) -> &'static str {
        match self {
            BrushKind::Pen => "Pen",
            BrushKind::Rectangle => "RectangleBrush",
        }
    }

    /// Create an idle brush of this kind
    pub fn create(self) -> Brush {
        match self {
            BrushKind::Pen => Brush::Pen(Pen::new()),
            BrushKind::Rectangle => Brush::Rectangle(RectangleBrush::new()),
        }
    }
}

impl fmt::Display for BrushKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BrushKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BrushKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| EditorError::UnknownBrush(s.to_string()))
    }
}

/// A brush of any kind
#[derive(Debug, Clone)]
pub enum Brush {
    Pen(Pen),
    Rectangle(RectangleBrush),
}

impl Brush {
    pub fn kind(&self) -> BrushKind {
        match self {
            Brush::Pen(_) => BrushKind::Pen,
            Brush::Rectangle(_) => BrushKind::Rectangle,
        }
    }

    pub fn state(&self) -> BrushState {
        match self {
            Brush::Pen(pen) => pen.state(),
            Brush::Rectangle(rectangle) => rectangle.state(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state(), BrushState::Dragging { .. })
    }

    pub fn mouse_down(&mut self, x: i32, y: i32) {
        match self {
            Brush::Pen(pen) => pen.mouse_down(x, y),
            Brush::Rectangle(rectangle) => rectangle.mouse_down(x, y),
        }
    }

    pub fn mouse_move(&mut self, x: i32, y: i32) -> Vec<BrushPaint> {
        match self {
            Brush::Pen(pen) => pen.mouse_move(x, y),
            Brush::Rectangle(rectangle) => rectangle.mouse_move(x, y),
        }
    }

    pub fn mouse_up(&mut self, x: i32, y: i32) -> Vec<BrushPaint> {
        match self {
            Brush::Pen(pen) => pen.mouse_up(x, y),
            Brush::Rectangle(rectangle) => rectangle.mouse_up(x, y),
        }
    }

    pub fn clean_up(&mut self) {
        match self {
            Brush::Pen(pen) => pen.clean_up(),
            Brush::Rectangle(rectangle) => rectangle.clean_up(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_names() {
        for kind in BrushKind::ALL {
            assert_eq!(kind.name().parse::<BrushKind>().unwrap(), kind);
            assert_eq!(kind.create().kind(), kind);
        }
        assert!(matches!(
            "Bucket".parse::<BrushKind>(),
            Err(EditorError::UnknownBrush(name)) if name == "Bucket"
        ));
    }

    #[test]
    fn test_brush_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&BrushKind::Rectangle).unwrap(),
            r#""RectangleBrush""#
        );
        assert_eq!(
            serde_json::from_str::<BrushKind>(r#""Pen""#).unwrap(),
            BrushKind::Pen
        );
    }

    #[test]
    fn test_gesture_lifecycle() {
        for kind in BrushKind::ALL {
            let mut brush = kind.create();
            assert!(!brush.is_dragging());

            brush.mouse_down(1, 1);
            assert!(brush.is_dragging());

            brush.mouse_up(2, 2);
            assert!(brush.is_dragging(), "{kind} left dragging before clean_up");

            brush.clean_up();
            assert_eq!(brush.state(), BrushState::Idle);
        }
    }
}
