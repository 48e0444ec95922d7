//! Neighbor occupancy of a cell
//!
//! The 8 neighbors are packed into a bitmask, one bit per [`Direction`]. A
//! diagonal only counts when both orthogonal neighbors next to it are
//! present, which leaves 47 distinct patterns.

use pico_map_core::{Boundary, Cross};

/// Neighbor of a cell, clockwise from the top. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    pub const EDGES: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Bit of this neighbor in a packed bitmask
    pub fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Bitmask with the given neighbors set
    pub fn mask(directions: impl IntoIterator<Item = Direction>) -> u8 {
        directions
            .into_iter()
            .fold(0, |mask, direction| mask | direction.bit())
    }

    /// Position offset of this neighbor
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Top => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::BottomRight => (1, 1),
            Direction::Bottom => (0, 1),
            Direction::BottomLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::TopLeft => (-1, -1),
        }
    }

    /// The two edges a diagonal sits between, `None` for edges
    pub fn adjacent_edges(self) -> Option<(Direction, Direction)> {
        match self {
            Direction::TopRight => Some((Direction::Top, Direction::Right)),
            Direction::BottomRight => Some((Direction::Bottom, Direction::Right)),
            Direction::BottomLeft => Some((Direction::Bottom, Direction::Left)),
            Direction::TopLeft => Some((Direction::Top, Direction::Left)),
            _ => None,
        }
    }
}

/// Calculate the neighbor bitmask of `(x, y)`.
///
/// Diagonals are only probed when both of their adjacent edges matched.
pub fn calculate_bitmask<F>(x: i32, y: i32, is_same_auto_tile: F) -> u8
where
    F: Fn(i32, i32) -> bool,
{
    let matches = |direction: Direction| {
        let (dx, dy) = direction.offset();
        is_same_auto_tile(x + dx, y + dy)
    };

    let edges = Direction::mask(Direction::EDGES.into_iter().filter(|d| matches(*d)));
    let diagonals = Direction::ALL.into_iter().filter(|direction| {
        direction.adjacent_edges().is_some_and(|(a, b)| {
            let needed = a.bit() | b.bit();
            edges & needed == needed && matches(*direction)
        })
    });

    edges | Direction::mask(diagonals)
}

/// Boundary and cross flags of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Neighborhood {
    pub boundary: Boundary,
    pub cross: Cross,
}

impl Neighborhood {
    /// Probe the neighbors of `(x, y)`
    pub fn probe<F>(x: i32, y: i32, is_same_auto_tile: F) -> Self
    where
        F: Fn(i32, i32) -> bool,
    {
        Self::from_bitmask(calculate_bitmask(x, y, is_same_auto_tile))
    }

    /// Decode a bitmask. Diagonals without both adjacent edges are dropped.
    pub fn from_bitmask(bitmask: u8) -> Self {
        let has = |direction: Direction| bitmask & direction.bit() != 0;

        let boundary = Boundary {
            top: has(Direction::Top),
            left: has(Direction::Left),
            bottom: has(Direction::Bottom),
            right: has(Direction::Right),
        };
        let cross = Cross {
            top_left: boundary.top && boundary.left && has(Direction::TopLeft),
            top_right: boundary.top && boundary.right && has(Direction::TopRight),
            bottom_left: boundary.bottom && boundary.left && has(Direction::BottomLeft),
            bottom_right: boundary.bottom && boundary.right && has(Direction::BottomRight),
        };

        Self { boundary, cross }
    }

    /// Whether the neighbor in `direction` belongs to the same auto tile
    pub fn has(&self, direction: Direction) -> bool {
        let Self { boundary, cross } = self;
        match direction {
            Direction::Top => boundary.top,
            Direction::TopRight => cross.top_right,
            Direction::Right => boundary.right,
            Direction::BottomRight => cross.bottom_right,
            Direction::Bottom => boundary.bottom,
            Direction::BottomLeft => cross.bottom_left,
            Direction::Left => boundary.left,
            Direction::TopLeft => cross.top_left,
        }
    }

    pub fn bitmask(&self) -> u8 {
        Direction::mask(Direction::ALL.into_iter().filter(|d| self.has(*d)))
    }

    /// No same-set neighbor in any direction
    pub fn is_isolated(&self) -> bool {
        self.bitmask() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::Direction::*;
    use super::*;
    use std::collections::HashSet;

    fn normalized(bitmask: u8) -> u8 {
        Neighborhood::from_bitmask(bitmask).bitmask()
    }

    #[test]
    fn test_bits_follow_clockwise_order() {
        let bits: Vec<u8> = Direction::ALL.into_iter().map(Direction::bit).collect();
        assert_eq!(bits, vec![1, 2, 4, 8, 16, 32, 64, 128]);
    }

    #[test]
    fn test_unsupported_diagonals_are_dropped() {
        assert_eq!(normalized(TopLeft.bit()), 0);
        assert_eq!(normalized(Direction::mask([Top, TopLeft])), Top.bit());
        assert_eq!(
            normalized(Direction::mask([Top, Left, TopLeft])),
            Direction::mask([Top, Left, TopLeft])
        );
        assert_eq!(normalized(0xFF), 0xFF);
    }

    #[test]
    fn test_47_distinct_patterns() {
        let patterns: HashSet<u8> = (0..=255u8).map(normalized).collect();
        assert_eq!(patterns.len(), 47);
    }

    #[test]
    fn test_calculate_bitmask_skips_lonely_diagonals() {
        let occupied: HashSet<(i32, i32)> = [(4, 4), (5, 4), (4, 5)].into_iter().collect();
        let probed = std::cell::RefCell::new(Vec::new());

        let bitmask = calculate_bitmask(5, 5, |x, y| {
            probed.borrow_mut().push((x, y));
            occupied.contains(&(x, y))
        });

        assert_eq!(bitmask, Direction::mask([Top, Left, TopLeft]));
        // the other diagonals miss an edge and are never probed
        assert!(!probed.borrow().contains(&(6, 6)));
        assert!(!probed.borrow().contains(&(4, 6)));
        assert!(!probed.borrow().contains(&(6, 4)));
    }

    #[test]
    fn test_neighborhood_from_bitmask() {
        let neighborhood = Neighborhood::from_bitmask(Direction::mask([Top, Right, TopRight, BottomLeft]));

        assert_eq!(
            neighborhood.boundary,
            Boundary {
                top: true,
                left: false,
                bottom: false,
                right: true
            }
        );
        assert!(neighborhood.cross.top_right);
        assert!(!neighborhood.cross.bottom_left);
        assert_eq!(neighborhood.bitmask(), Direction::mask([Top, Right, TopRight]));
    }

    #[test]
    fn test_isolated() {
        let neighborhood = Neighborhood::probe(0, 0, |_, _| false);
        assert!(neighborhood.is_isolated());
        assert_eq!(neighborhood, Neighborhood::default());
    }
}
