use crate::error::GridError;
use crate::node::{NeighborOrder, Position};
use crate::pathing_grid::PathingGrid;
use crate::solver::{best_first::best_first, check_endpoints, GridSolver};

/// A* with the Manhattan distance to the finish as heuristic, which is admissible and consistent
/// on a 4-connected unit-cost grid.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the heuristic. Values above 1.0 expand fewer cells but may return longer paths.
    pub heuristic_factor: f32,
    pub order: NeighborOrder,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
            order: NeighborOrder::default(),
        }
    }

    pub fn with_heuristic_factor(heuristic_factor: f32) -> AstarSolver {
        AstarSolver {
            heuristic_factor,
            ..AstarSolver::new()
        }
    }

    /// Just the Manhattan distance times the heuristic factor.
    pub fn heuristic(&self, p1: &Position, p2: &Position) -> u32 {
        (p1.manhattan_distance(p2) as f32 * self.heuristic_factor) as u32
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(
        &self,
        grid: &mut PathingGrid,
        start: Position,
        finish: Position,
    ) -> Result<Vec<Position>, GridError> {
        check_endpoints(grid, start, finish)?;
        Ok(best_first(grid, start, finish, self.order, |p| {
            self.heuristic(p, &finish)
        }))
    }
}
