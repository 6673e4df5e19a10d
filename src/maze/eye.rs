use crate::error::GridError;
use crate::node::Position;
use crate::pathing_grid::PathingGrid;

/// 20x50 picture of an eye. `x` is a wall, a space is open.
pub const EYE_MASK: [&str; 20] = [
    "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx",
    "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx",
    "xxxxxxxxxxxxxxxx                xxxxxxxxxxxxxxxxxx",
    "xxxxxxxxxxxxx                    xxxxxxxxxxxxxxxxx",
    "xxxxxxxxxxxx   xxxxxxxxxxxxxxxx    xxxxxxxxxxxxxxx",
    "xxxxxxxxxxxx xxxxxx x xx xx xxxxxx  xxxxxxxxxxxxxx",
    "xxxxxxxxxxxxxxxxx x x xx xx xxxxxxx  xxxxxxxxxxxxx",
    "xxxxxxxxxxxxxx xx x x x xx xxx xxx    xxxxxxxxxxxx",
    "xxxxxxxxxxxxxxx x             xx x xxxxxxxxxxxxxxx",
    "xxxxxxxxxxxxx xx x    xxx xxx      xxxxxxxxxxxxxxx",
    "xxxxxxxxxxxxxx  xx     xx xxxx   xxxxxxxxxxxxxxxxx",
    "xxxxxxxxxxxx x xxxx      xxxxx xxxxxxxxxxxxxxxxxxx",
    "xxxxxxxxxxxxx  xxxxx    xxxxx  xx xxxxxxxxxxxxxxxx",
    "xxxxxxxxxxxx  xxxxxxxxxxxxxx  x xxxxxxxxxxxxxxxxxx",
    "xxxxxxxxxxx       xxxxxxxx   xxxxxxxxxxxxxxxxxxxxx",
    "xxxxxxxxxxxxxx xx          xx xxxxxxxxxxxxxxxxxxxx",
    "xxxxxxxxxxxxxxxx xx x x xx xxxxxxxxxxxxxxxxxxxxxxx",
    "xxxxxxxxxxxxxxxxxx xx xx xx xxxxxxxxxxxxxxxxxxxxxx",
    "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx",
    "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx",
];

/// Walls every cell except those marked with a space in `mask`. The mask must have exactly one
/// line per row and one character per column, otherwise the grid is left untouched.
pub fn mask_maze(grid: &mut PathingGrid, mask: &[&str]) -> Result<(), GridError> {
    let expected = (grid.rows(), grid.cols());
    let mismatch = |found| GridError::DimensionMismatch { expected, found };
    if mask.len() != grid.rows() {
        let cols = mask.first().map_or(0, |line| line.chars().count());
        return Err(mismatch((mask.len(), cols)));
    }
    if let Some(line) = mask.iter().find(|line| line.chars().count() != grid.cols()) {
        return Err(mismatch((mask.len(), line.chars().count())));
    }
    grid.fill_walls();
    for (row, line) in mask.iter().enumerate() {
        for (col, c) in line.chars().enumerate() {
            if c == ' ' {
                grid.open_cell(Position::new(row, col));
            }
        }
    }
    Ok(())
}

/// The eye picture, which only fits the default 20x50 board.
pub fn eye_maze(grid: &mut PathingGrid) -> Result<(), GridError> {
    mask_maze(grid, &EYE_MASK)
}
