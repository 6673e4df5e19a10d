use crate::error::GridError;
use crate::node::{NeighborOrder, Position};
use crate::pathing_grid::PathingGrid;
use crate::solver::{check_endpoints, traversal::traverse, GridSolver};

/// Depth-first search with a LIFO frontier. The path it leaves behind is valid but usually not
/// the shortest; its shape depends on [order](Self::order), which is the push order.
#[derive(Clone, Debug)]
pub struct DfsSolver {
    pub order: NeighborOrder,
}

impl Default for DfsSolver {
    fn default() -> Self {
        DfsSolver {
            order: NeighborOrder::LEFT_DOWN_RIGHT_UP,
        }
    }
}

impl GridSolver for DfsSolver {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(
        &self,
        grid: &mut PathingGrid,
        start: Position,
        finish: Position,
    ) -> Result<Vec<Position>, GridError> {
        check_endpoints(grid, start, finish)?;
        Ok(traverse(grid, start, finish, self.order, Vec::new()))
    }
}
