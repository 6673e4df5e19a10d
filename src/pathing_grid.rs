use crate::error::GridError;
use crate::node::{CellKind, NeighborOrder, Node, Position};
use core::fmt;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [PathingGrid] owns a fixed `rows x cols` arena of [Node]s stored row-major, together with the
/// positions of the start and finish cells. Connectivity between open cells is tracked with a
/// [UnionFind] structure so reachability can be answered without searching.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
    start: Position,
    finish: Position,
    initial_start: Position,
    initial_finish: Position,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl PathingGrid {
    /// Creates a wall-free grid with the given start and finish cells.
    pub fn new(
        rows: usize,
        cols: usize,
        start: Position,
        finish: Position,
    ) -> Result<PathingGrid, GridError> {
        for p in [start, finish] {
            if p.row >= rows || p.col >= cols {
                return Err(GridError::InvalidPosition {
                    position: p,
                    rows,
                    cols,
                });
            }
        }
        if start == finish {
            return Err(GridError::OccupiedTarget(finish));
        }
        let mut nodes = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                nodes.push(Node::new(Position::new(row, col), CellKind::Open));
            }
        }
        let mut grid = PathingGrid {
            rows,
            cols,
            nodes,
            start,
            finish,
            initial_start: start,
            initial_finish: finish,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        let start_ix = grid.ix(start);
        let finish_ix = grid.ix(finish);
        grid.nodes[start_ix].kind = CellKind::Start;
        grid.nodes[finish_ix].kind = CellKind::Finish;
        grid.generate_components();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn start(&self) -> Position {
        self.start
    }
    pub fn finish(&self) -> Position {
        self.finish
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn ix(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Index of `pos` in the node arena, or [GridError::InvalidPosition] if it lies outside.
    pub(crate) fn checked_ix(&self, pos: Position) -> Result<usize, GridError> {
        if self.in_bounds(pos) {
            Ok(self.ix(pos))
        } else {
            Err(GridError::InvalidPosition {
                position: pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn node(&self, pos: Position) -> Option<&Node> {
        if self.in_bounds(pos) {
            self.nodes.get(self.ix(pos))
        } else {
            None
        }
    }

    pub(crate) fn node_mut(&mut self, pos: Position) -> &mut Node {
        let ix = self.ix(pos);
        &mut self.nodes[ix]
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn kind(&self, pos: Position) -> Option<CellKind> {
        self.node(pos).map(|n| n.kind)
    }

    /// Out-of-bounds positions are not walls, they are simply not part of the grid.
    pub fn is_wall(&self, pos: Position) -> bool {
        self.kind(pos) == Some(CellKind::Wall)
    }

    pub fn can_move_to(&self, pos: Position) -> bool {
        self.kind(pos).is_some_and(CellKind::is_passable)
    }

    /// In-bounds orthogonal neighbours of `pos` in the given order, walls included.
    pub fn neighbors(&self, pos: Position, order: NeighborOrder) -> SmallVec<[Position; 4]> {
        order
            .iter()
            .filter_map(|d| pos.step(d))
            .filter(|p| self.in_bounds(*p))
            .collect()
    }

    pub fn visited_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.visited).count()
    }

    pub fn wall_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_wall()).count()
    }

    /// Changes the kind of a cell and keeps the component structure consistent. Joins newly
    /// connected components and flags the components as dirty if a wall may split one.
    fn set_kind(&mut self, pos: Position, kind: CellKind) {
        let ix = self.ix(pos);
        let was_passable = self.nodes[ix].kind.is_passable();
        self.nodes[ix].kind = kind;
        if was_passable && !kind.is_passable() {
            self.components_dirty = true;
        } else if kind.is_passable() {
            for n in self.neighbors(pos, NeighborOrder::default()) {
                if self.can_move_to(n) {
                    let n_ix = self.ix(n);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }

    /// Flips the wall state of a cell and returns whether it is now a wall.
    /// The start and finish cells cannot hold walls and are [rejected](GridError::Rejected).
    pub fn toggle_wall(&mut self, pos: Position) -> Result<bool, GridError> {
        let ix = self.checked_ix(pos)?;
        match self.nodes[ix].kind {
            CellKind::Open => {
                self.set_kind(pos, CellKind::Wall);
                Ok(true)
            }
            CellKind::Wall => {
                self.set_kind(pos, CellKind::Open);
                Ok(false)
            }
            CellKind::Start | CellKind::Finish => Err(GridError::Rejected(pos)),
        }
    }

    /// Sets the wall state of a cell. Placing a wall on the start or finish is rejected, clearing
    /// one there is a no-op.
    pub fn set_wall(&mut self, pos: Position, wall: bool) -> Result<(), GridError> {
        let ix = self.checked_ix(pos)?;
        match (self.nodes[ix].kind, wall) {
            (CellKind::Start | CellKind::Finish, true) => Err(GridError::Rejected(pos)),
            (CellKind::Start | CellKind::Finish, false) => Ok(()),
            (_, true) => {
                self.set_kind(pos, CellKind::Wall);
                Ok(())
            }
            (_, false) => {
                self.set_kind(pos, CellKind::Open);
                Ok(())
            }
        }
    }

    /// Opens a wall cell; anything else is left alone.
    pub(crate) fn open_cell(&mut self, pos: Position) {
        if self.is_wall(pos) {
            self.set_kind(pos, CellKind::Open);
        }
    }

    /// Walls an open cell; the start and finish are left alone.
    pub(crate) fn wall_cell(&mut self, pos: Position) {
        if self.kind(pos) == Some(CellKind::Open) {
            self.set_kind(pos, CellKind::Wall);
        }
    }

    /// Turns every open cell into a wall, leaving only the start and finish passable.
    pub fn fill_walls(&mut self) {
        for node in self.nodes.iter_mut().filter(|n| n.kind == CellKind::Open) {
            node.kind = CellKind::Wall;
        }
        self.components_dirty = true;
    }

    /// Removes every wall.
    pub fn clear_walls(&mut self) {
        for node in self.nodes.iter_mut().filter(|n| n.is_wall()) {
            node.kind = CellKind::Open;
        }
        self.generate_components();
    }

    /// Clears walls and traversal state and puts start and finish back where the grid was
    /// created with them.
    pub fn reset_board(&mut self) {
        self.clear_walls();
        self.reset_traversal();
        let (start, finish) = (self.start, self.finish);
        self.node_mut(start).kind = CellKind::Open;
        self.node_mut(finish).kind = CellKind::Open;
        self.start = self.initial_start;
        self.finish = self.initial_finish;
        let (start, finish) = (self.start, self.finish);
        self.node_mut(start).kind = CellKind::Start;
        self.node_mut(finish).kind = CellKind::Finish;
    }

    pub fn move_start(&mut self, target: Position) -> Result<(), GridError> {
        self.move_endpoint(CellKind::Start, target)
    }

    pub fn move_finish(&mut self, target: Position) -> Result<(), GridError> {
        self.move_endpoint(CellKind::Finish, target)
    }

    fn move_endpoint(&mut self, endpoint: CellKind, target: Position) -> Result<(), GridError> {
        let target_ix = self.checked_ix(target)?;
        let current = match endpoint {
            CellKind::Start => self.start,
            _ => self.finish,
        };
        if current == target {
            return Ok(());
        }
        if self.nodes[target_ix].kind != CellKind::Open {
            return Err(GridError::OccupiedTarget(target));
        }
        self.node_mut(current).kind = CellKind::Open;
        self.nodes[target_ix].kind = endpoint;
        match endpoint {
            CellKind::Start => self.start = target,
            _ => self.finish = target,
        }
        Ok(())
    }

    /// Clears `visited`, `distance` and `previous` on every node. Walls and endpoints stay.
    pub fn reset_traversal(&mut self) {
        for node in self.nodes.iter_mut() {
            node.clear_traversal();
        }
    }

    /// Checks if `a` and `b` are passable and on the same component. Only accurate while the
    /// components are not dirty, see [update](Self::update).
    pub fn reachable(&self, a: &Position, b: &Position) -> bool {
        self.can_move_to(*a)
            && self.can_move_to(*b)
            && self.components.equiv(self.ix(*a), self.ix(*b))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable neighbours to the same
    /// components. Only the cells below and to the right need linking.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let p = Position::new(row, col);
                if !self.can_move_to(p) {
                    continue;
                }
                let p_ix = self.ix(p);
                for n in [Position::new(row + 1, col), Position::new(row, col + 1)] {
                    if self.can_move_to(n) {
                        let n_ix = self.ix(n);
                        self.components.union(p_ix, n_ix);
                    }
                }
            }
        }
    }

    fn glyph(&self, node: &Node) -> char {
        match node.kind {
            CellKind::Start => 'S',
            CellKind::Finish => 'F',
            CellKind::Wall => '#',
            CellKind::Open if node.visited => '*',
            CellKind::Open => '.',
        }
    }

    /// Renders the grid like [Display] but marks the cells of `path` with `o`.
    pub fn render_with_path(&self, path: &[Position]) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.nodes.chunks(self.cols.max(1)) {
            for node in row {
                if node.kind == CellKind::Open && path.contains(&node.position) {
                    out.push('o');
                } else {
                    out.push(self.glyph(node));
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.nodes.chunks(self.cols.max(1)) {
            let line = row.iter().map(|n| self.glyph(n)).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
