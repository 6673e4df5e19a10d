use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate on a [PathingGrid](crate::pathing_grid::PathingGrid). Row 0 is the top row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Moves by a signed offset, returning [None] if either coordinate would become negative.
    /// Upper bounds are left to the grid.
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    pub fn step(&self, direction: Direction) -> Option<Position> {
        let (d_row, d_col) = direction.delta();
        self.offset(d_row, d_col)
    }

    /// True if the two positions share an edge.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four orthogonal moves. Diagonal movement is not supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Fixed order in which neighbours are expanded. Keeping it fixed makes traces reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborOrder(pub [Direction; 4]);

impl NeighborOrder {
    /// Expansion order of breadth-first search.
    pub const UP_DOWN_LEFT_RIGHT: NeighborOrder = NeighborOrder([
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ]);
    /// Push order of depth-first search. Since the frontier is a stack, `Up` is explored first.
    pub const LEFT_DOWN_RIGHT_UP: NeighborOrder = NeighborOrder([
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ]);

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0.iter().copied()
    }
}

impl Default for NeighborOrder {
    fn default() -> Self {
        NeighborOrder::UP_DOWN_LEFT_RIGHT
    }
}

/// What occupies a cell. The variants are mutually exclusive, so a wall can never sit on the
/// start or finish.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellKind {
    #[default]
    Open,
    Wall,
    Start,
    Finish,
}

impl CellKind {
    pub fn is_passable(self) -> bool {
        self != CellKind::Wall
    }

    pub fn is_endpoint(self) -> bool {
        matches!(self, CellKind::Start | CellKind::Finish)
    }
}

/// A single cell of the grid together with the state left behind by the last search.
///
/// Backpointers are stored as [Position]s into the owning grid rather than references, so a
/// node never owns its predecessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) position: Position,
    pub(crate) kind: CellKind,
    pub(crate) distance: Option<u32>,
    pub(crate) visited: bool,
    pub(crate) previous: Option<Position>,
}

impl Node {
    pub(crate) fn new(position: Position, kind: CellKind) -> Node {
        Node {
            position,
            kind,
            distance: None,
            visited: false,
            previous: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }
    pub fn row(&self) -> usize {
        self.position.row
    }
    pub fn col(&self) -> usize {
        self.position.col
    }
    pub fn kind(&self) -> CellKind {
        self.kind
    }
    pub fn is_start(&self) -> bool {
        self.kind == CellKind::Start
    }
    pub fn is_finish(&self) -> bool {
        self.kind == CellKind::Finish
    }
    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }
    pub fn is_visited(&self) -> bool {
        self.visited
    }
    /// Distance from the search origin; [None] stands for infinity. Only Dijkstra and A* track it.
    pub fn distance(&self) -> Option<u32> {
        self.distance
    }
    /// The node that discovered this one during the last search.
    pub fn previous(&self) -> Option<Position> {
        self.previous
    }

    pub(crate) fn clear_traversal(&mut self) {
        self.distance = None;
        self.visited = false;
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_refuses_negative_coordinates() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Down), Some(Position::new(1, 0)));
        assert_eq!(origin.step(Direction::Right), Some(Position::new(0, 1)));
    }

    #[test]
    fn manhattan_and_adjacency() {
        let a = Position::new(2, 3);
        let b = Position::new(5, 1);
        assert_eq!(a.manhattan_distance(&b), 5);
        assert!(a.is_adjacent(&Position::new(2, 4)));
        assert!(!a.is_adjacent(&Position::new(3, 4)));
        assert!(!a.is_adjacent(&a));
    }

    #[test]
    fn walls_are_the_only_impassable_kind() {
        assert!(CellKind::Open.is_passable());
        assert!(CellKind::Start.is_passable());
        assert!(CellKind::Finish.is_passable());
        assert!(!CellKind::Wall.is_passable());
        assert!(CellKind::Start.is_endpoint() && CellKind::Finish.is_endpoint());
    }
}
