use std::collections::VecDeque;

use log::warn;

use crate::node::{NeighborOrder, Position};
use crate::pathing_grid::PathingGrid;

/// A container of discovered-but-unprocessed cells. The discipline of the container alone
/// decides whether the traversal is breadth-first or depth-first.
pub trait Frontier<T> {
    fn put(&mut self, item: T);
    fn take(&mut self) -> Option<T>;
}

/// FIFO queue, giving breadth-first order.
impl<T> Frontier<T> for VecDeque<T> {
    fn put(&mut self, item: T) {
        self.push_back(item);
    }
    fn take(&mut self) -> Option<T> {
        self.pop_front()
    }
}

/// LIFO stack, giving depth-first order.
impl<T> Frontier<T> for Vec<T> {
    fn put(&mut self, item: T) {
        self.push(item);
    }
    fn take(&mut self) -> Option<T> {
        self.pop()
    }
}

/// Unweighted traversal shared by BFS and DFS. Frontier entries carry the cell that discovered
/// them; the backpointer is written when the entry is taken and the cell becomes visited, so
/// every visited cell points at an earlier visited neighbour.
///
/// Both positions must be in bounds.
pub(crate) fn traverse<F>(
    grid: &mut PathingGrid,
    start: Position,
    finish: Position,
    order: NeighborOrder,
    mut frontier: F,
) -> Vec<Position>
where
    F: Frontier<(Position, Option<Position>)>,
{
    let mut trace = Vec::new();
    frontier.put((start, None));
    while let Some((current, discovered_by)) = frontier.take() {
        let node = grid.node_mut(current);
        // Cells can sit in the frontier several times, only the first one taken counts.
        if node.is_wall() || node.visited {
            continue;
        }
        node.visited = true;
        node.previous = discovered_by;
        trace.push(current);
        if current == finish {
            return trace;
        }
        for neighbour in grid.neighbors(current, order) {
            if grid
                .node(neighbour)
                .is_some_and(|n| !n.visited && !n.is_wall())
            {
                frontier.put((neighbour, Some(current)));
            }
        }
    }
    warn!(
        "Frontier exhausted after visiting {} cells without reaching {}",
        trace.len(),
        finish
    );
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(rows: usize, cols: usize) -> PathingGrid {
        PathingGrid::new(rows, cols, Position::new(0, 0), Position::new(rows - 1, cols - 1))
            .unwrap()
    }

    #[test]
    fn queue_visits_in_layers() {
        let mut grid = open_grid(3, 3);
        let trace = traverse(
            &mut grid,
            Position::new(0, 0),
            Position::new(2, 2),
            NeighborOrder::UP_DOWN_LEFT_RIGHT,
            VecDeque::new(),
        );
        let start = Position::new(0, 0);
        let layers = trace
            .iter()
            .map(|p| p.manhattan_distance(&start))
            .collect::<Vec<_>>();
        assert!(layers.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(trace.len(), 9);
        assert_eq!(*trace.last().unwrap(), Position::new(2, 2));
    }

    #[test]
    fn stack_follows_last_pushed_neighbour() {
        // Pushing left, down, right, up means the last push (up) is explored first, then
        // right. From the top-left corner that walks along the top row first.
        let mut grid = open_grid(3, 3);
        let trace = traverse(
            &mut grid,
            Position::new(0, 0),
            Position::new(2, 2),
            NeighborOrder::LEFT_DOWN_RIGHT_UP,
            Vec::new(),
        );
        assert_eq!(
            &trace[..3],
            &[Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );
        assert_eq!(*trace.last().unwrap(), Position::new(2, 2));
    }

    #[test]
    fn enclosed_finish_sweeps_every_open_cell_once() {
        // |S...|
        // |....|
        // |...#|
        // |..#F|
        let mut grid = open_grid(4, 4);
        grid.set_wall(Position::new(2, 3), true).unwrap();
        grid.set_wall(Position::new(3, 2), true).unwrap();
        let trace = traverse(
            &mut grid,
            Position::new(0, 0),
            Position::new(3, 3),
            NeighborOrder::UP_DOWN_LEFT_RIGHT,
            VecDeque::new(),
        );
        let mut sorted = trace.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), trace.len());
        assert_eq!(trace.len(), 13);
        assert!(!trace.contains(&Position::new(3, 3)));
        assert!(grid.node(Position::new(3, 3)).unwrap().previous().is_none());
    }
}
