//! Wall layouts applied to a [PathingGrid] before a search. Every generator first walls the whole
//! board and then opens cells according to its pattern; the start and finish can never be walls,
//! so they stay open for every seed.
use core::fmt;

use log::info;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::pathing_grid::PathingGrid;
use crate::{CITY_NOISE_PROBABILITY, LABYRINTH_OPENING_PROBABILITY, RANDOM_WALL_PROBABILITY};

pub mod city;
pub mod eye;
pub mod labyrinth;
pub mod random;

/// Clamps a probability into `[0, 1]` for [Rng::gen_bool]; NaN counts as 0.
pub(crate) fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MazeKind {
    Random,
    Labyrinth,
    City,
    Eye,
}

impl MazeKind {
    pub const ALL: [MazeKind; 4] = [
        MazeKind::Random,
        MazeKind::Labyrinth,
        MazeKind::City,
        MazeKind::Eye,
    ];
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            MazeKind::Random => "Random",
            MazeKind::Labyrinth => "Labyrinth",
            MazeKind::City => "City",
            MazeKind::Eye => "Eye",
        };
        f.write_str(name)
    }
}

/// Replaces the wall layout of `grid` with a fresh maze and clears traversal state.
///
/// Only [MazeKind::Eye] can fail: its picture has a fixed size and any other board is a
/// [DimensionMismatch](GridError::DimensionMismatch). The grid is unchanged on error.
pub fn generate_maze<R: Rng + ?Sized>(
    kind: MazeKind,
    grid: &mut PathingGrid,
    rng: &mut R,
) -> Result<(), GridError> {
    match kind {
        MazeKind::Random => random::random_maze(grid, rng, RANDOM_WALL_PROBABILITY),
        MazeKind::Labyrinth => {
            labyrinth::labyrinth_maze(grid, rng, LABYRINTH_OPENING_PROBABILITY);
        }
        MazeKind::City => city::city_maze(grid, rng, CITY_NOISE_PROBABILITY),
        MazeKind::Eye => eye::eye_maze(grid)?,
    }
    grid.reset_traversal();
    grid.update();
    info!(
        "Generated {} maze with {} walls on a {}x{} grid",
        kind,
        grid.wall_count(),
        grid.rows(),
        grid.cols()
    );
    Ok(())
}
