//! Neighbour lookup for a square grid

use crate::core::{BoardSize, Position};

/// Neighbours of every cell on an N×N grid
///
/// Computed once per board size and shared read-only by every search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    size: usize,
    neighbors: Vec<Vec<Position>>,
}

impl AdjacencyGraph {
    /// Build the graph for a board of side `size`
    ///
    /// Neighbours are the up-to-eight cells at Chebyshev distance one, listed
    /// in row-then-column offset order.
    ///
    /// # Examples
    /// ```
    /// use boggle::core::{BoardSize, Position};
    /// use boggle::solver::AdjacencyGraph;
    ///
    /// let graph = AdjacencyGraph::build(BoardSize::new(4).unwrap());
    /// assert_eq!(graph.neighbors(Position::new(0, 0)).len(), 3);
    /// assert_eq!(graph.neighbors(Position::new(0, 1)).len(), 5);
    /// assert_eq!(graph.neighbors(Position::new(1, 1)).len(), 8);
    /// ```
    #[must_use]
    pub fn build(size: BoardSize) -> Self {
        let n = size.get();
        let neighbors = (0..size.cells())
            .map(|i| adjacent(Position::from_index(i, n), n))
            .collect();
        Self { size: n, neighbors }
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Neighbours of `pos`
    ///
    /// # Panics
    /// Panics if `pos` lies outside the grid.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> &[Position] {
        &self.neighbors[pos.index(self.size)]
    }
}

fn adjacent(pos: Position, size: usize) -> Vec<Position> {
    let mut adj = Vec::with_capacity(8);
    for dr in -1_isize..=1 {
        for dc in -1_isize..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (Some(row), Some(col)) = (
                pos.row.checked_add_signed(dr),
                pos.col.checked_add_signed(dc),
            ) else {
                continue;
            };
            if row < size && col < size {
                adj.push(Position::new(row, col));
            }
        }
    }
    adj
}
