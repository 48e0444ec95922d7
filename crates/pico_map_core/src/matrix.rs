//! Fixed-size 2D grid used for map chips and colliders

use serde::{Deserialize, Deserializer, Serialize};

use crate::MapError;

/// A `width x height` grid holding one value per cell in row-major order.
///
/// Dimensions are fixed at construction. Reads and writes outside the grid are
/// rejected without touching the contents; callers clamp coordinates first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMatrix<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

/// Plain serialized form of a [`MapMatrix`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMatrixProperties<T> {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<T>,
}

/// Number of cells in a `width x height` grid, `None` when it does not fit in `usize`
fn cell_count(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)
}

impl<T: Clone> MapMatrix<T> {
    /// Create a grid with every cell set to `default`
    ///
    /// # Panics
    ///
    /// Panics if the cell count overflows `usize`, like any oversized allocation.
    pub fn new(width: u32, height: u32, default: T) -> Self {
        Self {
            width,
            height,
            cells: vec![default; cell_count(width, height).unwrap_or(usize::MAX)],
        }
    }

    /// Reset every cell to `default`
    pub fn allocate(&mut self, default: T) {
        let count = cell_count(self.width, self.height).unwrap_or(usize::MAX);
        self.cells = vec![default; count];
    }
}

impl<T> MapMatrix<T> {
    /// Build a grid from existing row-major cells
    pub fn from_cells(width: u32, height: u32, cells: Vec<T>) -> Result<Self, MapError> {
        let expected = cell_count(width, height).ok_or(MapError::TooLarge { width, height })?;
        if cells.len() != expected {
            return Err(MapError::CellCountMismatch {
                width,
                height,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether `(x, y)` lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Get the value at `(x, y)`, `None` when out of range
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.index(x, y).and_then(|idx| self.cells.get(idx))
    }

    /// Store `value` at `(x, y)`
    pub fn put(&mut self, value: T, x: i32, y: i32) -> Result<(), MapError> {
        let Some(idx) = self.index(x, y) else {
            return Err(MapError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        };
        let (width, height) = (self.width, self.height);
        let cell = self.cells.get_mut(idx).ok_or(MapError::OutOfRange {
            x,
            y,
            width,
            height,
        })?;
        *cell = value;
        Ok(())
    }

    /// Iterate over `(x, y, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &T)> + '_ {
        let width = self.width.max(1) as usize;
        self.cells.iter().enumerate().map(move |(idx, value)| {
            ((idx % width) as i32, (idx / width) as i32, value)
        })
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn from_object(properties: MapMatrixProperties<T>) -> Result<Self, MapError> {
        Self::from_cells(properties.width, properties.height, properties.cells)
    }
}

impl<T: Clone> MapMatrix<T> {
    pub fn to_object(&self) -> MapMatrixProperties<T> {
        MapMatrixProperties {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MapMatrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let properties = MapMatrixProperties::<T>::deserialize(deserializer)?;
        Self::from_object(properties).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_default() {
        let matrix = MapMatrix::new(4, 3, 7u8);

        assert_eq!(matrix.width(), 4);
        assert_eq!(matrix.height(), 3);
        assert_eq!(matrix.cells().len(), 12);
        assert!(matrix.cells().iter().all(|v| *v == 7));
    }

    #[test]
    fn test_put_then_get() {
        let mut matrix = MapMatrix::new(5, 5, 0u32);
        for y in 0..5 {
            for x in 0..5 {
                matrix.put((x * 10 + y) as u32, x, y).unwrap();
            }
        }
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(matrix.get(x, y), Some(&((x * 10 + y) as u32)));
            }
        }
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut matrix = MapMatrix::new(2, 2, 0u8);

        assert_eq!(matrix.get(-1, 0), None);
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.get(0, 2), None);

        let err = matrix.put(9, 2, 1).unwrap_err();
        assert_eq!(
            err,
            MapError::OutOfRange {
                x: 2,
                y: 1,
                width: 2,
                height: 2
            }
        );
        assert!(matrix.cells().iter().all(|v| *v == 0));
    }

    #[test]
    fn test_row_major_layout() {
        let mut matrix = MapMatrix::new(3, 2, 0u8);
        matrix.put(1, 2, 0).unwrap();
        matrix.put(2, 0, 1).unwrap();

        assert_eq!(matrix.cells(), &[0, 0, 1, 2, 0, 0]);

        let positions: Vec<_> = matrix.iter().filter(|(_, _, v)| **v != 0).collect();
        assert_eq!(positions, vec![(2, 0, &1), (0, 1, &2)]);
    }

    #[test]
    fn test_allocate_resets_cells() {
        let mut matrix = MapMatrix::new(2, 2, 0u8);
        matrix.put(5, 1, 1).unwrap();
        matrix.allocate(3);

        assert!(matrix.cells().iter().all(|v| *v == 3));
    }

    #[test]
    fn test_object_round_trip() {
        let mut matrix = MapMatrix::new(3, 2, 0i32);
        matrix.put(-4, 1, 1).unwrap();

        let restored = MapMatrix::from_object(matrix.to_object()).unwrap();
        assert_eq!(restored, matrix);
    }

    #[test]
    fn test_deserialize_rejects_wrong_cell_count() {
        let json = r#"{"width":2,"height":2,"cells":[1,2,3]}"#;
        let result: Result<MapMatrix<u8>, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let json = r#"{"width":2,"height":1,"cells":[1,2]}"#;
        let matrix: MapMatrix<u8> = serde_json::from_str(json).unwrap();
        assert_eq!(matrix.get(1, 0), Some(&2));
    }

    #[test]
    fn test_deserialize_rejects_huge_dimensions() {
        let json = r#"{"width":65536,"height":65536,"cells":[]}"#;
        let result: Result<MapMatrix<u8>, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let result = MapMatrix::<u8>::from_cells(u32::MAX, u32::MAX, Vec::new());
        assert!(matches!(
            result,
            Err(MapError::CellCountMismatch { found: 0, .. } | MapError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_empty_dimension_with_huge_other_side() {
        let mut matrix = MapMatrix::<u8>::from_cells(0, u32::MAX, Vec::new()).unwrap();

        assert!(matrix.get(0, 5).is_none());
        assert!(matrix.put(1, 0, 5).is_err());
        assert_eq!(matrix.iter().count(), 0);
    }
}
