use crate::error::GridError;
use crate::node::{NeighborOrder, Position};
use crate::pathing_grid::PathingGrid;
use crate::solver::{best_first::best_first, check_endpoints, GridSolver};

/// Dijkstra's algorithm: best-first search without a heuristic.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub order: NeighborOrder,
}

impl GridSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(
        &self,
        grid: &mut PathingGrid,
        start: Position,
        finish: Position,
    ) -> Result<Vec<Position>, GridError> {
        check_endpoints(grid, start, finish)?;
        Ok(best_first(grid, start, finish, self.order, |_| 0))
    }
}
