use crate::error::GridError;
use crate::models::Cell;

/// Validated dimensions of a 2D grid
///
/// Only the shape is stored; no cell data is kept. Both dimensions are
/// guaranteed positive after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    cols: i32,
    rows: i32,
}

impl GridShape {
    /// Create a grid shape with given dimensions
    pub fn new(cols: i32, rows: i32) -> Result<Self, GridError> {
        if cols <= 0 || rows <= 0 {
            return Err(GridError::InvalidDimensions { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    /// Number of columns (x extent)
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of rows (y extent)
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> u64 {
        self.cols as u64 * self.rows as u64
    }

    /// Whether a cell lies inside the grid bounds
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.cols && cell.y >= 0 && cell.y < self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        let shape = GridShape::new(64, 48).unwrap();
        assert_eq!(shape.cols(), 64);
        assert_eq!(shape.rows(), 48);
        assert_eq!(shape.cell_count(), 64 * 48);
    }

    #[test]
    fn test_contains() {
        let shape = GridShape::new(8, 8).unwrap();
        assert!(shape.contains(Cell::new(0, 0)));
        assert!(shape.contains(Cell::new(7, 7)));
        assert!(!shape.contains(Cell::new(8, 0)));
        assert!(!shape.contains(Cell::new(0, 8)));
        assert!(!shape.contains(Cell::new(-1, 3)));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            GridShape::new(0, 48),
            Err(GridError::InvalidDimensions { cols: 0, rows: 48 })
        );
        assert_eq!(
            GridShape::new(64, -1),
            Err(GridError::InvalidDimensions { cols: 64, rows: -1 })
        );
    }
}
