use core::fmt;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::node::Position;
use crate::path::reconstruct_path;
use crate::pathing_grid::PathingGrid;

pub mod astar;
pub mod best_first;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod traversal;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

/// A search strategy over a [PathingGrid].
///
/// [search](Self::search) returns the visitation trace: every cell in the order it became
/// visited, ending with `finish` if it was reached. As a side effect each visited node gets a
/// backpointer to the node that discovered it, which [reconstruct_path] follows. The grid must
/// have fresh traversal state, see [PathingGrid::reset_traversal].
pub trait GridSolver {
    fn name(&self) -> &'static str;

    fn search(
        &self,
        grid: &mut PathingGrid,
        start: Position,
        finish: Position,
    ) -> Result<Vec<Position>, GridError>;

    /// Searches and then walks the backpointers. An empty path means `finish` was not reached.
    fn get_path(
        &self,
        grid: &mut PathingGrid,
        start: Position,
        finish: Position,
    ) -> Result<Vec<Position>, GridError> {
        self.search(grid, start, finish)?;
        Ok(reconstruct_path(grid, finish))
    }
}

/// Rejects endpoints outside the grid before any node is touched.
pub(crate) fn check_endpoints(
    grid: &PathingGrid,
    start: Position,
    finish: Position,
) -> Result<(), GridError> {
    grid.checked_ix(start)?;
    grid.checked_ix(finish)?;
    Ok(())
}

/// The four interchangeable strategies with their default settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Dijkstra,
        Strategy::AStar,
    ];

    /// Whether the strategy always finds a shortest path on a unit-cost grid.
    pub fn is_optimal(self) -> bool {
        self != Strategy::Dfs
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl GridSolver for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Bfs => BfsSolver::default().name(),
            Strategy::Dfs => DfsSolver::default().name(),
            Strategy::Dijkstra => DijkstraSolver::default().name(),
            Strategy::AStar => AstarSolver::default().name(),
        }
    }

    fn search(
        &self,
        grid: &mut PathingGrid,
        start: Position,
        finish: Position,
    ) -> Result<Vec<Position>, GridError> {
        let trace = match self {
            Strategy::Bfs => BfsSolver::default().search(grid, start, finish),
            Strategy::Dfs => DfsSolver::default().search(grid, start, finish),
            Strategy::Dijkstra => DijkstraSolver::default().search(grid, start, finish),
            Strategy::AStar => AstarSolver::default().search(grid, start, finish),
        }?;
        debug!(
            "{} visited {} cells searching {} -> {}",
            self,
            trace.len(),
            start,
            finish
        );
        Ok(trace)
    }
}

/// Both sequences handed to a visualizer: the visitation trace and the start-to-finish path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub trace: Vec<Position>,
    pub path: Vec<Position>,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies_reject_out_of_bounds_endpoints() {
        let mut grid = PathingGrid::new(2, 2, Position::new(0, 0), Position::new(1, 1)).unwrap();
        for strategy in Strategy::ALL {
            let err = strategy
                .search(&mut grid, Position::new(0, 0), Position::new(2, 0))
                .unwrap_err();
            assert!(matches!(err, GridError::InvalidPosition { .. }));
            assert_eq!(grid.visited_count(), 0);
        }
    }

    #[test]
    fn only_dfs_is_not_optimal() {
        let optimal = Strategy::ALL
            .iter()
            .filter(|s| s.is_optimal())
            .count();
        assert_eq!(optimal, 3);
        assert_eq!(Strategy::AStar.to_string(), "A*");
    }
}
