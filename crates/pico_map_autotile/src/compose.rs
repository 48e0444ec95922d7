//! Fragment composition for auto tiles
//!
//! Every quadrant of a cell is drawn from one of five rows of the auto tile
//! block, chosen from the two orthogonal neighbors and the diagonal neighbor
//! touching that quadrant:
//!
//! | row | shape | vertical | horizontal | diagonal |
//! |-----|-------|----------|------------|----------|
//! | 0 | outer corner | - | - | - |
//! | 1 | vertical edge | yes | - | - |
//! | 2 | horizontal edge | - | yes | - |
//! | 3 | inner corner | yes | yes | - |
//! | 4 | full | yes | yes | yes |

use pico_map_core::{AutoTileAttributes, MapChip, Quadrant, RenderingArea};

use crate::{AutoTile, Neighborhood};

/// Picture drawn into one quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadrantShape {
    Outer,
    VerticalEdge,
    HorizontalEdge,
    InnerCorner,
    Full,
}

impl QuadrantShape {
    pub const ALL: [QuadrantShape; 5] = [
        QuadrantShape::Outer,
        QuadrantShape::VerticalEdge,
        QuadrantShape::HorizontalEdge,
        QuadrantShape::InnerCorner,
        QuadrantShape::Full,
    ];

    /// Row of this shape inside an auto tile block
    pub fn row(self) -> u32 {
        match self {
            QuadrantShape::Outer => 0,
            QuadrantShape::VerticalEdge => 1,
            QuadrantShape::HorizontalEdge => 2,
            QuadrantShape::InnerCorner => 3,
            QuadrantShape::Full => 4,
        }
    }

    /// Select the shape from the neighbors touching a quadrant
    pub fn select(vertical: bool, horizontal: bool, diagonal: bool) -> Self {
        match (vertical, horizontal, diagonal) {
            (false, false, _) => QuadrantShape::Outer,
            (true, false, _) => QuadrantShape::VerticalEdge,
            (false, true, _) => QuadrantShape::HorizontalEdge,
            (true, true, false) => QuadrantShape::InnerCorner,
            (true, true, true) => QuadrantShape::Full,
        }
    }
}

/// Shape of every quadrant, in `Quadrant::ALL` order
pub fn quadrant_shapes(neighborhood: &Neighborhood) -> [(Quadrant, QuadrantShape); 4] {
    let Neighborhood { boundary, cross } = neighborhood;

    Quadrant::ALL.map(|quadrant| {
        let shape = match quadrant {
            Quadrant::TopLeft => QuadrantShape::select(boundary.top, boundary.left, cross.top_left),
            Quadrant::TopRight => {
                QuadrantShape::select(boundary.top, boundary.right, cross.top_right)
            }
            Quadrant::BottomLeft => {
                QuadrantShape::select(boundary.bottom, boundary.left, cross.bottom_left)
            }
            Quadrant::BottomRight => {
                QuadrantShape::select(boundary.bottom, boundary.right, cross.bottom_right)
            }
        };
        (quadrant, shape)
    })
}

/// Merge quadrants sharing a shape into larger areas.
///
/// All four equal gives one full area. Otherwise top and bottom halves are
/// tried first, then left and right halves; leftovers stay single quadrants.
pub fn merge_quadrants(shapes: [(Quadrant, QuadrantShape); 4]) -> Vec<(RenderingArea, QuadrantShape)> {
    let [(_, tl), (_, tr), (_, bl), (_, br)] = shapes;

    if tl == tr && tr == bl && bl == br {
        return vec![(RenderingArea::Full, tl)];
    }

    let pair = |a: QuadrantShape, b: QuadrantShape, both, first, second| {
        if a == b {
            vec![(both, a)]
        } else {
            vec![(first, a), (second, b)]
        }
    };

    if tl == tr || bl == br || (tl != bl && tr != br) {
        let mut merged = pair(tl, tr, RenderingArea::Top, RenderingArea::TopLeft, RenderingArea::TopRight);
        merged.extend(pair(
            bl,
            br,
            RenderingArea::Bottom,
            RenderingArea::BottomLeft,
            RenderingArea::BottomRight,
        ));
        merged
    } else {
        let mut merged = pair(tl, bl, RenderingArea::Left, RenderingArea::TopLeft, RenderingArea::BottomLeft);
        merged.extend(pair(
            tr,
            br,
            RenderingArea::Right,
            RenderingArea::TopRight,
            RenderingArea::BottomRight,
        ));
        merged
    }
}

/// Compose the chip of `auto_tile` for a cell with the given neighbors
pub fn compose(auto_tile: &AutoTile, neighborhood: Neighborhood) -> MapChip {
    let items = merge_quadrants(quadrant_shapes(&neighborhood))
        .into_iter()
        .map(|(area, shape)| auto_tile.fragment(shape).with_rendering_area(area))
        .collect();

    MapChip::auto_tile(
        items,
        AutoTileAttributes {
            auto_tile_id: auto_tile.id,
            boundary: neighborhood.boundary,
            cross: neighborhood.cross,
        },
    )
}

/// Compose the chip for `(x, y)`, probing neighbors with `is_same_auto_tile`
pub fn compose_at<F>(auto_tile: &AutoTile, x: i32, y: i32, is_same_auto_tile: F) -> MapChip
where
    F: Fn(i32, i32) -> bool,
{
    compose(auto_tile, Neighborhood::probe(x, y, is_same_auto_tile))
}
