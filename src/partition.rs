//! Stride-based partitioning of a 2D grid
//!
//! A grid of `cols x rows` cells is partitioned by placing anchor cells at
//! every multiple of the stride along both axes; each anchor marks the
//! top-left corner of an `interval x interval` block. Enumeration order is
//! part of the contract: anchors are produced with the outer loop over x
//! and the inner loop over y, and block cells likewise (outer over i,
//! inner over j).
//!
//! Blocks are never clipped to the grid: when the stride does not evenly
//! divide a dimension, blocks anchored near that edge extend past it.
//! Callers that need clipping can filter with [`GridShape::contains`].

use rayon::prelude::*;

use crate::error::GridError;
use crate::models::{Cell, GridShape};

/// Partitions a fixed-size grid at a positive stride
///
/// Pure and stateless: every method returns the same result for the same
/// inputs, and a partitioner can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPartitioner {
    shape: GridShape,
    interval: i32,
}

impl GridPartitioner {
    /// Create a partitioner for `shape` with the given stride
    pub fn new(shape: GridShape, interval: i32) -> Result<Self, GridError> {
        if interval <= 0 {
            return Err(GridError::InvalidInterval { interval });
        }
        Ok(Self { shape, interval })
    }

    /// Shape of the grid being partitioned
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Spacing between anchors; also each block's side length
    pub fn interval(&self) -> i32 {
        self.interval
    }

    /// Number of anchors: `ceil(cols/interval) * ceil(rows/interval)`
    pub fn anchor_count(&self) -> u64 {
        let nx = ceil_div(self.shape.cols(), self.interval) as u64;
        let ny = ceil_div(self.shape.rows(), self.interval) as u64;
        nx * ny
    }

    /// Iterate all anchors in enumeration order
    ///
    /// Outer loop over x increasing, inner over y increasing: all anchors
    /// sharing an x are produced contiguously before x advances.
    pub fn anchors(&self) -> Anchors {
        let nx = ceil_div(self.shape.cols(), self.interval) as u64;
        let ny = ceil_div(self.shape.rows(), self.interval) as u64;
        Anchors {
            interval: self.interval,
            ny,
            idx: 0,
            end: nx * ny,
        }
    }

    /// Collect all anchors in enumeration order
    pub fn anchors_vec(&self) -> Vec<Cell> {
        self.anchors().collect()
    }

    /// Same cells as [`anchors`](Self::anchors), computed in parallel
    ///
    /// Anchor columns are distributed across the rayon pool; collecting an
    /// indexed parallel iterator preserves order, so the result is
    /// identical to the sequential enumeration.
    pub fn par_anchors(&self) -> Vec<Cell> {
        let interval = self.interval;
        let nx = ceil_div(self.shape.cols(), interval);
        let ny = ceil_div(self.shape.rows(), interval);
        (0..nx)
            .into_par_iter()
            .flat_map_iter(move |kx| {
                (0..ny).map(move |ky| Cell::new(kx * interval, ky * interval))
            })
            .collect()
    }

    /// Iterate the block covered by `anchor`
    ///
    /// Exactly `interval * interval` cells, unclipped (see module docs).
    pub fn block(&self, anchor: Cell) -> BlockCells {
        BlockCells::new(anchor, self.interval)
    }
}

/// Enumerate every anchor of a `cols x rows` grid at the given stride
///
/// Anchors are the cells `(k*interval, m*interval)` lying inside the grid,
/// in enumeration order (outer over x, inner over y).
///
/// # Example
/// ```
/// use grid_partition::enumerate_anchors;
///
/// let anchors = enumerate_anchors(64, 48, 2).unwrap();
/// assert_eq!(anchors.len(), 32 * 24);
/// assert_eq!((anchors[0].x, anchors[0].y), (0, 0));
/// ```
pub fn enumerate_anchors(cols: i32, rows: i32, interval: i32) -> Result<Vec<Cell>, GridError> {
    let shape = GridShape::new(cols, rows)?;
    Ok(GridPartitioner::new(shape, interval)?.anchors().collect())
}

/// Expand one anchor into the cells its block covers
///
/// Produces the `interval * interval` cells `(i, j)` with `i` in
/// `[x, x+interval)` and `j` in `[y, y+interval)`, outer over i and inner
/// over j. The anchor may be any cell; no grid bounds are applied.
///
/// # Example
/// ```
/// use grid_partition::{Cell, expand_block};
///
/// let block = expand_block(Cell::new(0, 0), 2).unwrap();
/// let pairs: Vec<(i32, i32)> = block.into_iter().map(Into::into).collect();
/// assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
/// ```
pub fn expand_block(anchor: impl Into<Cell>, interval: i32) -> Result<Vec<Cell>, GridError> {
    if interval <= 0 {
        return Err(GridError::InvalidInterval { interval });
    }
    Ok(BlockCells::new(anchor.into(), interval).collect())
}

fn ceil_div(n: i32, d: i32) -> i32 {
    debug_assert!(n > 0 && d > 0);
    // widen so n + d - 1 cannot overflow
    ((n as i64 + d as i64 - 1) / d as i64) as i32
}

/// Lazy anchor enumeration, in contract order
///
/// Walks a linear index over the `nx * ny` anchor lattice so the exact
/// remaining length is always known.
#[derive(Debug, Clone)]
pub struct Anchors {
    interval: i32,
    ny: u64,
    idx: u64,
    end: u64,
}

impl Iterator for Anchors {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.idx >= self.end {
            return None;
        }
        let kx = (self.idx / self.ny) as i32;
        let ky = (self.idx % self.ny) as i32;
        self.idx += 1;
        Some(Cell::new(kx * self.interval, ky * self.interval))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.idx) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Anchors {}

/// Lazy enumeration of the cells in one block, in contract order
#[derive(Debug, Clone)]
pub struct BlockCells {
    anchor: Cell,
    side: u64,
    idx: u64,
    end: u64,
}

impl BlockCells {
    fn new(anchor: Cell, interval: i32) -> Self {
        let side = interval as u64;
        Self {
            anchor,
            side,
            idx: 0,
            end: side * side,
        }
    }
}

impl Iterator for BlockCells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.idx >= self.end {
            return None;
        }
        let di = (self.idx / self.side) as i32;
        let dj = (self.idx % self.side) as i32;
        self.idx += 1;
        Some(self.anchor.offset(di, dj))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.idx) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BlockCells {}
