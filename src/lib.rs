//! # maze_pathfinding
//!
//! The engine behind a grid pathfinding visualizer. A [PathingGrid] holds open cells, walls and
//! a single start and finish; one of four interchangeable strategies
//! ([breadth-first](solver::bfs), [depth-first](solver::dfs), [Dijkstra](solver::dijkstra) and
//! [A*](solver::astar)) searches it and returns the cells in the order they were visited, leaving
//! backpointers behind from which [reconstruct_path] builds the start-to-finish path. Maze
//! generators ([maze]) fill the board with walls before a search.
//!
//! Movement is 4-connected and every move costs 1. All operations are synchronous and
//! single-threaded; randomness is always injected so that tests can seed it.
//!
//! ```
//! use maze_pathfinding::{create_grid, reconstruct_path, run_search, Position, Strategy};
//!
//! let mut grid = create_grid(5, 5, Position::new(0, 0), Position::new(4, 4)).unwrap();
//! let trace = run_search(Strategy::AStar, &mut grid, Position::new(0, 0), Position::new(4, 4)).unwrap();
//! let path = reconstruct_path(&grid, Position::new(4, 4));
//! assert_eq!(path.len(), 9);
//! assert!(trace.len() >= path.len());
//! ```
pub mod error;
pub mod maze;
pub mod node;
pub mod path;
pub mod pathing_grid;
pub mod solver;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use error::GridError;
pub use maze::{generate_maze, MazeKind};
pub use node::{CellKind, Direction, NeighborOrder, Node, Position};
pub use path::reconstruct_path;
pub use pathing_grid::PathingGrid;
pub use solver::{GridSolver, SearchResult, Strategy};

/// Board height of the visualizer.
pub const DEFAULT_ROWS: usize = 20;
/// Board width of the visualizer. The eye maze is drawn for exactly this size.
pub const DEFAULT_COLS: usize = 50;
pub const DEFAULT_START: Position = Position::new(14, 11);
pub const DEFAULT_FINISH: Position = Position::new(10, 30);

pub const RANDOM_WALL_PROBABILITY: f64 = 0.3;
pub const LABYRINTH_OPENING_PROBABILITY: f64 = 0.05;
pub const CITY_NOISE_PROBABILITY: f64 = 0.08;
pub const CITY_STREET_COLUMN_SPACING: usize = 4;
pub const CITY_STREET_ROW_SPACING: usize = 3;

/// Dimensions and initial endpoints of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Position,
    pub finish: Position,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: DEFAULT_START,
            finish: DEFAULT_FINISH,
        }
    }
}

impl GridConfig {
    pub fn build(&self) -> Result<PathingGrid, GridError> {
        PathingGrid::new(self.rows, self.cols, self.start, self.finish)
    }
}

/// Creates a wall-free grid. Fails with [GridError::InvalidPosition] if an endpoint is outside.
pub fn create_grid(
    rows: usize,
    cols: usize,
    start: Position,
    finish: Position,
) -> Result<PathingGrid, GridError> {
    PathingGrid::new(rows, cols, start, finish)
}

/// Flips the wall at `(row, col)` and returns whether it is now a wall.
pub fn toggle_wall(grid: &mut PathingGrid, row: usize, col: usize) -> Result<bool, GridError> {
    grid.toggle_wall(Position::new(row, col))
}

pub fn move_start(grid: &mut PathingGrid, row: usize, col: usize) -> Result<(), GridError> {
    grid.move_start(Position::new(row, col))
}

pub fn move_finish(grid: &mut PathingGrid, row: usize, col: usize) -> Result<(), GridError> {
    grid.move_finish(Position::new(row, col))
}

pub fn reset_traversal(grid: &mut PathingGrid) {
    grid.reset_traversal();
}

/// Clears the previous search and runs `strategy`, returning the visitation trace.
pub fn run_search(
    strategy: Strategy,
    grid: &mut PathingGrid,
    start: Position,
    finish: Position,
) -> Result<Vec<Position>, GridError> {
    grid.reset_traversal();
    strategy.search(grid, start, finish)
}

/// Runs `strategy` between the grid's own start and finish and returns both the trace and the
/// path, the pair a visualizer animates one after the other.
pub fn run_search_with_path(
    strategy: Strategy,
    grid: &mut PathingGrid,
) -> Result<SearchResult, GridError> {
    let (start, finish) = (grid.start(), grid.finish());
    let trace = run_search(strategy, grid, start, finish)?;
    let path = reconstruct_path(grid, finish);
    Ok(SearchResult { trace, path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_visualizer_board() {
        let grid = GridConfig::default().build().unwrap();
        assert_eq!((grid.rows(), grid.cols()), (20, 50));
        assert_eq!(grid.start(), Position::new(14, 11));
        assert_eq!(grid.finish(), Position::new(10, 30));
    }

    #[test]
    fn repeated_searches_start_from_clean_state() {
        let mut grid = GridConfig::default().build().unwrap();
        let first = run_search_with_path(Strategy::Bfs, &mut grid).unwrap();
        let second = run_search_with_path(Strategy::Bfs, &mut grid).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.path.len(), 4 + 19 + 1);
        assert!(first.found());
    }

    #[test]
    fn boundary_functions_use_row_col() {
        let mut grid = create_grid(3, 3, Position::new(0, 0), Position::new(2, 2)).unwrap();
        assert_eq!(toggle_wall(&mut grid, 1, 1), Ok(true));
        assert_eq!(
            move_start(&mut grid, 1, 1),
            Err(GridError::OccupiedTarget(Position::new(1, 1)))
        );
        move_finish(&mut grid, 0, 2).unwrap();
        assert_eq!(grid.finish(), Position::new(0, 2));
        run_search(Strategy::Dfs, &mut grid, Position::new(0, 0), Position::new(0, 2)).unwrap();
        reset_traversal(&mut grid);
        assert_eq!(grid.visited_count(), 0);
    }
}
