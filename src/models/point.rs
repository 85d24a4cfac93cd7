/// Integer coordinate on a 2D grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cell {
    /// X coordinate (column)
    pub x: i32,
    /// Y coordinate (row)
    pub y: i32,
}

impl Cell {
    /// Create a new cell
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell shifted by (dx, dy)
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let c = Cell::new(3, 4);
        assert_eq!(c.offset(1, -2), Cell::new(4, 2));
        assert_eq!(c.offset(0, 0), c);
    }

    #[test]
    fn test_tuple_conversions() {
        let c: Cell = (7, -1).into();
        assert_eq!(c, Cell::new(7, -1));
        let pair: (i32, i32) = c.into();
        assert_eq!(pair, (7, -1));
    }
}
