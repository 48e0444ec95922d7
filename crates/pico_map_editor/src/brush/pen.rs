//! Freehand pen brush

use super::{BrushPaint, BrushState};

/// Paints the cell under the cursor on every move.
///
/// The preview of a move is only the newly entered cell. The commit list is
/// every distinct cell visited since `mouse_down`, in visiting order.
#[derive(Debug, Clone, Default)]
pub struct Pen {
    state: BrushState,
    last: Option<BrushPaint>,
    stroke: Vec<BrushPaint>,
}

impl Pen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BrushState {
        self.state
    }

    pub fn mouse_down(&mut self, x: i32, y: i32) {
        let anchor = BrushPaint::new(x, y);
        self.state = BrushState::Dragging { anchor };
        self.last = Some(anchor);
        self.stroke = vec![anchor];
    }

    pub fn mouse_move(&mut self, x: i32, y: i32) -> Vec<BrushPaint> {
        if self.state == BrushState::Idle {
            return Vec::new();
        }

        let paint = BrushPaint::new(x, y);
        if self.last == Some(paint) {
            return Vec::new();
        }

        self.last = Some(paint);
        if !self.stroke.contains(&paint) {
            self.stroke.push(paint);
        }
        vec![paint]
    }

    pub fn mouse_up(&mut self, x: i32, y: i32) -> Vec<BrushPaint> {
        if self.state == BrushState::Idle {
            return Vec::new();
        }

        self.mouse_move(x, y);
        self.stroke.clone()
    }

    pub fn clean_up(&mut self) {
        self.state = BrushState::Idle;
        self.last = None;
        self.stroke.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(paints: &[BrushPaint]) -> Vec<(i32, i32)> {
        paints.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_move_reports_new_cells_only() {
        let mut pen = Pen::new();
        pen.mouse_down(0, 0);

        assert_eq!(cells(&pen.mouse_move(1, 0)), vec![(1, 0)]);
        assert!(pen.mouse_move(1, 0).is_empty());
        assert_eq!(cells(&pen.mouse_move(1, 1)), vec![(1, 1)]);
    }

    #[test]
    fn test_up_commits_the_whole_stroke() {
        let mut pen = Pen::new();
        pen.mouse_down(0, 0);
        pen.mouse_move(1, 0);
        pen.mouse_move(0, 0);
        pen.mouse_move(1, 0);

        let committed = pen.mouse_up(2, 0);
        assert_eq!(cells(&committed), vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_click_without_move_commits_one_cell() {
        let mut pen = Pen::new();
        pen.mouse_down(3, 4);
        assert_eq!(cells(&pen.mouse_up(3, 4)), vec![(3, 4)]);
    }

    #[test]
    fn test_idle_pen_reports_nothing() {
        let mut pen = Pen::new();
        assert!(pen.mouse_move(1, 1).is_empty());
        assert!(pen.mouse_up(1, 1).is_empty());

        pen.mouse_down(0, 0);
        pen.mouse_up(1, 0);
        pen.clean_up();

        assert_eq!(pen.state(), BrushState::Idle);
        assert!(pen.mouse_move(2, 0).is_empty());
    }
}
