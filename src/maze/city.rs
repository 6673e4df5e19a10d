use itertools::iproduct;
use rand::Rng;

use super::clamp_probability;
use crate::node::Position;
use crate::pathing_grid::PathingGrid;
use crate::{CITY_STREET_COLUMN_SPACING, CITY_STREET_ROW_SPACING};

/// Lays out a street grid (every 4th column and every 3rd row open, everything else walled)
/// and then drops random walls with probability `noise_probability`. Noise may block streets
/// but never touches row 0, column 0 or the start and finish. The probability is clamped to
/// `[0, 1]`.
pub fn city_maze<R: Rng + ?Sized>(grid: &mut PathingGrid, rng: &mut R, noise_probability: f64) {
    let noise_probability = clamp_probability(noise_probability);
    grid.fill_walls();
    for (row, col) in iproduct!(0..grid.rows(), 0..grid.cols()) {
        if col % CITY_STREET_COLUMN_SPACING == 0 || row % CITY_STREET_ROW_SPACING == 0 {
            grid.open_cell(Position::new(row, col));
        }
    }
    for (row, col) in iproduct!(1..grid.rows(), 1..grid.cols()) {
        if rng.gen_bool(noise_probability) {
            grid.wall_cell(Position::new(row, col));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn noiseless_city_is_a_street_grid() {
        let mut grid = PathingGrid::new(7, 9, Position::new(0, 0), Position::new(6, 8)).unwrap();
        city_maze(&mut grid, &mut StdRng::seed_from_u64(0), 0.0);
        assert_eq!(
            grid.to_string(),
            "S........\n\
             .###.###.\n\
             .###.###.\n\
             .........\n\
             .###.###.\n\
             .###.###.\n\
             ........F\n"
        );
    }

    #[test]
    fn border_streets_survive_noise() {
        let mut grid = PathingGrid::new(20, 50, Position::new(14, 11), Position::new(10, 30)).unwrap();
        city_maze(&mut grid, &mut StdRng::seed_from_u64(3), 1.0);
        for col in 0..50 {
            assert!(!grid.is_wall(Position::new(0, col)));
        }
        for row in 0..20 {
            assert!(!grid.is_wall(Position::new(row, 0)));
        }
        assert!(grid.is_wall(Position::new(3, 4)));
    }

    #[test]
    fn negative_noise_is_no_noise() {
        let mut noisy = PathingGrid::new(7, 9, Position::new(0, 0), Position::new(6, 8)).unwrap();
        let mut clean = noisy.clone();
        city_maze(&mut noisy, &mut StdRng::seed_from_u64(1), -0.5);
        city_maze(&mut clean, &mut StdRng::seed_from_u64(1), 0.0);
        assert_eq!(noisy.to_string(), clean.to_string());
    }
}
