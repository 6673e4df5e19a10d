use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;

use super::clamp_probability;
use crate::node::Position;
use crate::pathing_grid::PathingGrid;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Two-cell moves on the half-resolution lattice: up, right, down, left.
const STEPS: [(isize, isize); 4] = [(-2, 0), (0, 2), (2, 0), (0, -2)];

/// Cells opened by the backtracking phase, in the order they were opened.
#[derive(Clone, Debug)]
pub struct Carving {
    pub root: Position,
    pub cells: FxIndexSet<Position>,
}

struct Frame {
    position: Position,
    steps: [(isize, isize); 4],
    next: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(position: Position, rng: &mut R) -> Frame {
        let mut steps = STEPS;
        steps.shuffle(rng);
        Frame {
            position,
            steps,
            next: 0,
        }
    }
}

/// Picks from `1..len` like a cell away from the top/left border, or 0 on a 1-wide axis.
fn interior_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> usize {
    if len > 1 {
        rng.gen_range(1..len)
    } else {
        0
    }
}

/// Recursive-backtracking carve from a random root. Expects a grid filled with walls: walls two
/// steps away are opened together with the cell in between, then carving continues from there.
/// An explicit stack replaces recursion so the depth is not bounded by the call stack.
pub fn carve<R: Rng + ?Sized>(grid: &mut PathingGrid, rng: &mut R) -> Carving {
    let root = Position::new(
        interior_index(grid.rows(), rng),
        interior_index(grid.cols(), rng),
    );
    let mut cells = FxIndexSet::default();
    grid.open_cell(root);
    cells.insert(root);

    let mut stack = vec![Frame::new(root, rng)];
    while let Some(frame) = stack.last_mut() {
        let step = frame.steps.get(frame.next).copied();
        frame.next += 1;
        let current = frame.position;
        let Some((d_row, d_col)) = step else {
            stack.pop();
            continue;
        };
        let target = match current.offset(d_row, d_col) {
            Some(p) if grid.is_wall(p) => p,
            _ => continue,
        };
        let Some(between) = current.offset(d_row / 2, d_col / 2) else {
            continue;
        };
        grid.open_cell(between);
        grid.open_cell(target);
        cells.insert(between);
        cells.insert(target);
        stack.push(Frame::new(target, rng));
    }
    Carving { root, cells }
}

/// Carves a perfect maze and then knocks out extra walls with probability `opening_probability`
/// (row 0 and column 0 excluded, clamped to `[0, 1]`), which adds loops.
pub fn labyrinth_maze<R: Rng + ?Sized>(
    grid: &mut PathingGrid,
    rng: &mut R,
    opening_probability: f64,
) -> Carving {
    let opening_probability = clamp_probability(opening_probability);
    grid.fill_walls();
    let carving = carve(grid, rng);
    for (row, col) in iproduct!(1..grid.rows(), 1..grid.cols()) {
        if rng.gen_bool(opening_probability) {
            grid.open_cell(Position::new(row, col));
        }
    }
    carving
}
