//! Rectangle brush

use super::{BrushPaint, BrushState};

/// Every cell of the box spanned by two corners, row-major from the top-left
pub fn rectangle_cells(a: BrushPaint, b: BrushPaint) -> Vec<BrushPaint> {
    let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
    let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));

    (min_y..=max_y)
        .flat_map(|y| (min_x..=max_x).map(move |x| BrushPaint::new(x, y)))
        .collect()
}

/// Paints the box between the press position and the cursor
#[derive(Debug, Clone, Default)]
pub struct RectangleBrush {
    state: BrushState,
}

impl RectangleBrush {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BrushState {
        self.state
    }

    pub fn mouse_down(&mut self, x: i32, y: i32) {
        self.state = BrushState::Dragging {
            anchor: BrushPaint::new(x, y),
        };
    }

    pub fn mouse_move(&mut self, x: i32, y: i32) -> Vec<BrushPaint> {
        match self.state {
            BrushState::Idle => Vec::new(),
            BrushState::Dragging { anchor } => rectangle_cells(anchor, BrushPaint::new(x, y)),
        }
    }

    pub fn mouse_up(&mut self, x: i32, y: i32) -> Vec<BrushPaint> {
        self.mouse_move(x, y)
    }

    pub fn clean_up(&mut self) {
        self.state = BrushState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_gesture() {
        let mut brush = RectangleBrush::new();
        brush.mouse_down(1, 1);
        let preview = brush.mouse_move(3, 2);
        let committed = brush.mouse_up(3, 2);

        assert_eq!(preview, committed);
        assert_eq!(committed.len(), 6);
        let cells: Vec<_> = committed.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(cells, vec![(1, 1), (2, 1), (3, 1), (1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_cell_count_in_any_direction() {
        let anchor = BrushPaint::new(5, 5);
        for (x, y) in [(5, 5), (2, 7), (8, 1), (0, 0)] {
            let cells = rectangle_cells(anchor, BrushPaint::new(x, y));
            let expected = ((x - 5).abs() + 1) * ((y - 5).abs() + 1);
            assert_eq!(cells.len() as i32, expected);
        }
    }

    #[test]
    fn test_box_shrinks_with_the_cursor() {
        let mut brush = RectangleBrush::new();
        brush.mouse_down(0, 0);
        assert_eq!(brush.mouse_move(4, 4).len(), 25);
        assert_eq!(brush.mouse_move(1, 0).len(), 2);
    }

    #[test]
    fn test_idle_rectangle_reports_nothing() {
        let mut brush = RectangleBrush::new();
        assert!(brush.mouse_move(2, 2).is_empty());

        brush.mouse_down(0, 0);
        brush.clean_up();
        assert!(brush.mouse_up(2, 2).is_empty());
    }
}
