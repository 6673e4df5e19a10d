use itertools::iproduct;
use rand::Rng;

use super::clamp_probability;
use crate::node::Position;
use crate::pathing_grid::PathingGrid;

/// Walls every cell independently with probability `wall_probability`. The start and finish
/// always stay open. Probabilities outside `[0, 1]` are clamped.
pub fn random_maze<R: Rng + ?Sized>(grid: &mut PathingGrid, rng: &mut R, wall_probability: f64) {
    let wall_probability = clamp_probability(wall_probability);
    grid.fill_walls();
    for (row, col) in iproduct!(0..grid.rows(), 0..grid.cols()) {
        if !rng.gen_bool(wall_probability) {
            grid.open_cell(Position::new(row, col));
        }
    }
}
