use std::collections::VecDeque;

use crate::error::GridError;
use crate::node::{NeighborOrder, Position};
use crate::pathing_grid::PathingGrid;
use crate::solver::{check_endpoints, traversal::traverse, GridSolver};

/// Breadth-first search with a FIFO frontier. Finds a shortest path on a unit-cost grid.
#[derive(Clone, Debug)]
pub struct BfsSolver {
    pub order: NeighborOrder,
}

impl Default for BfsSolver {
    fn default() -> Self {
        BfsSolver {
            order: NeighborOrder::UP_DOWN_LEFT_RIGHT,
        }
    }
}

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(
        &self,
        grid: &mut PathingGrid,
        start: Position,
        finish: Position,
    ) -> Result<Vec<Position>, GridError> {
        check_endpoints(grid, start, finish)?;
        Ok(traverse(grid, start, finish, self.order, VecDeque::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts that the optimal path around a single obstacle is found.
    #[test]
    fn solve_simple_problem() {
        // |S  |
        // | # |
        // |  F|
        let mut grid = PathingGrid::new(3, 3, Position::new(0, 0), Position::new(2, 2)).unwrap();
        grid.set_wall(Position::new(1, 1), true).unwrap();
        let path = BfsSolver::default()
            .get_path(&mut grid, Position::new(0, 0), Position::new(2, 2))
            .unwrap();
        assert_eq!(path.len(), 5);
        // Down is expanded before right, so the path hugs the left column.
        assert_eq!(path[1], Position::new(1, 0));
    }

    #[test]
    fn trace_starts_at_start_and_ends_at_finish() {
        let mut grid = PathingGrid::new(4, 6, Position::new(3, 0), Position::new(0, 5)).unwrap();
        let (start, finish) = (grid.start(), grid.finish());
        let trace = BfsSolver::default()
            .search(&mut grid, start, finish)
            .unwrap();
        assert_eq!(trace[0], Position::new(3, 0));
        assert_eq!(*trace.last().unwrap(), Position::new(0, 5));
        assert_eq!(grid.visited_count(), trace.len());
    }
}
