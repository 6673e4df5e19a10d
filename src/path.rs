use itertools::Itertools;

use crate::node::Position;
use crate::pathing_grid::PathingGrid;

/// Follows the backpointers left by the last search from `finish` back to the cell without a
/// predecessor and returns the cells in start-to-finish order.
///
/// Returns an empty path if `finish` was never visited, or lies outside the grid. Every
/// backpointer refers to a cell visited earlier, so the walk always terminates; it is still
/// capped at the number of cells.
pub fn reconstruct_path(grid: &PathingGrid, finish: Position) -> Vec<Position> {
    match grid.node(finish) {
        Some(node) if node.is_visited() => {}
        _ => return Vec::new(),
    }
    let mut path = std::iter::successors(Some(finish), |p| {
        grid.node(*p).and_then(|node| node.previous())
    })
    .take(grid.rows() * grid.cols())
    .collect::<Vec<_>>();
    path.reverse();
    path
}

/// Number of moves along a path. Every move costs 1.
pub fn path_cost(path: &[Position]) -> usize {
    path.len().saturating_sub(1)
}

/// True if consecutive cells of the path are orthogonal neighbours.
pub fn is_contiguous(path: &[Position]) -> bool {
    path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{bfs::BfsSolver, GridSolver};

    #[test]
    fn unvisited_finish_gives_empty_path() {
        let grid = PathingGrid::new(2, 2, Position::new(0, 0), Position::new(1, 1)).unwrap();
        assert!(reconstruct_path(&grid, grid.finish()).is_empty());
        assert!(reconstruct_path(&grid, Position::new(9, 9)).is_empty());
    }

    #[test]
    fn path_runs_start_to_finish() {
        let mut grid = PathingGrid::new(3, 4, Position::new(0, 0), Position::new(2, 3)).unwrap();
        BfsSolver::default()
            .search(&mut grid, Position::new(0, 0), Position::new(2, 3))
            .unwrap();
        let path = reconstruct_path(&grid, Position::new(2, 3));
        assert_eq!(path.first(), Some(&Position::new(0, 0)));
        assert_eq!(path.last(), Some(&Position::new(2, 3)));
        assert_eq!(path_cost(&path), 5);
        assert!(is_contiguous(&path));
    }

    #[test]
    fn search_start_alone_is_a_path_of_one() {
        let mut grid = PathingGrid::new(2, 2, Position::new(0, 0), Position::new(1, 1)).unwrap();
        BfsSolver::default()
            .search(&mut grid, Position::new(0, 0), Position::new(0, 0))
            .unwrap();
        assert_eq!(
            reconstruct_path(&grid, Position::new(0, 0)),
            vec![Position::new(0, 0)]
        );
    }

    #[test]
    fn contiguity() {
        assert!(is_contiguous(&[]));
        assert!(is_contiguous(&[Position::new(4, 4)]));
        assert!(!is_contiguous(&[Position::new(0, 0), Position::new(1, 1)]));
        assert_eq!(path_cost(&[]), 0);
    }
}
