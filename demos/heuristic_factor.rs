use maze_pathfinding::solver::astar::AstarSolver;
use maze_pathfinding::{GridSolver, PathingGrid, Position};

// The heuristic_factor can be set to scale the heuristic, causing nodes that are closer to the goal (ignoring obstacles)
// to be evaluated quicker than in normal operation. This is called Weighted A* and it can speed up the algorithm in certain scenarios,
// at the price of no longer guaranteeing a shortest path.

fn wall_rect(grid: &mut PathingGrid, top: usize, left: usize, height: usize, width: usize) {
    for row in top..top + height {
        for col in left..left + width {
            grid.set_wall(Position::new(row, col), true).unwrap();
        }
    }
}

fn main() {
    const N: usize = 30;
    let start = Position::new(1, 1);
    let finish = Position::new(N - 3, N - 3);
    let mut grid = PathingGrid::new(N, N, start, finish).unwrap();
    wall_rect(&mut grid, 8, 8, 8, 8);
    wall_rect(&mut grid, 3, 0, 6, 6);
    wall_rect(&mut grid, 0, 10, 6, 6);
    println!("{}", grid);
    for factor in [1.0, 1.3, 2.0] {
        grid.reset_traversal();
        let solver = AstarSolver::with_heuristic_factor(factor);
        let path = solver.get_path(&mut grid, start, finish).unwrap();
        println!(
            "factor {factor}: visited {} cells, path of {} cells",
            grid.visited_count(),
            path.len()
        );
    }
}
