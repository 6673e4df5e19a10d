use crate::node::Position;
use thiserror::Error;

/// Failures reported by [PathingGrid](crate::pathing_grid::PathingGrid) mutations and maze setup.
///
/// A search that cannot reach its finish is not an error: the reconstructed path is simply empty.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("position {position} lies outside the {rows}x{cols} grid")]
    InvalidPosition {
        position: Position,
        rows: usize,
        cols: usize,
    },
    #[error("target {0} is occupied")]
    OccupiedTarget(Position),
    #[error("walls cannot be placed on the start or finish cell at {0}")]
    Rejected(Position),
    #[error("maze mask is {found:?} (rows, cols) but the grid is {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}
