use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::warn;

use crate::node::{NeighborOrder, Position};
use crate::pathing_grid::PathingGrid;

/// Entry of the open list. Ordered so that the [BinaryHeap] pops the smallest estimated cost
/// first; ties go to the entry that was pushed first.
#[derive(Debug)]
struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    seq: usize,
    position: Position,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.seq == other.seq
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

/// Best-first search over unit-cost edges, shared by Dijkstra (zero heuristic) and A*.
///
/// `distance` on each node holds the best known cost from `start` and is final once the node is
/// visited. Entries made stale by a later improvement are skipped when popped. Both positions
/// must be in bounds.
pub(crate) fn best_first<FH>(
    grid: &mut PathingGrid,
    start: Position,
    finish: Position,
    order: NeighborOrder,
    mut heuristic: FH,
) -> Vec<Position>
where
    FH: FnMut(&Position) -> u32,
{
    let mut trace = Vec::new();
    if !grid.can_move_to(start) {
        warn!("Search started on blocked cell {}", start);
        return trace;
    }
    let mut to_see = BinaryHeap::new();
    let mut seq = 0;
    grid.node_mut(start).distance = Some(0);
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(&start),
        cost: 0,
        seq,
        position: start,
    });
    while let Some(SmallestCostHolder { cost, position, .. }) = to_see.pop() {
        let node = grid.node_mut(position);
        if node.visited || node.distance.is_some_and(|d| cost > d) {
            continue;
        }
        node.visited = true;
        trace.push(position);
        if position == finish {
            return trace;
        }
        let new_cost = cost + 1;
        for neighbour in grid.neighbors(position, order) {
            let n = grid.node_mut(neighbour);
            if n.is_wall() || n.visited {
                continue;
            }
            if n.distance.map_or(true, |d| new_cost < d) {
                n.distance = Some(new_cost);
                n.previous = Some(position);
                seq += 1;
                to_see.push(SmallestCostHolder {
                    estimated_cost: new_cost + heuristic(&neighbour),
                    cost: new_cost,
                    seq,
                    position: neighbour,
                });
            }
        }
    }
    warn!(
        "Open list exhausted after visiting {} cells without reaching {}",
        trace.len(),
        finish
    );
    trace
}
