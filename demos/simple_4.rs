use maze_pathfinding::{GridSolver, PathingGrid, Position, Strategy};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  F|
//  ___
// where
// - # marks a wall
// - S marks the start
// - F marks the finish
//
// Each strategy is run in turn; the visitation trace and the resulting path are printed.

fn main() {
    let mut grid = PathingGrid::new(3, 3, Position::new(0, 0), Position::new(2, 2)).unwrap();
    grid.toggle_wall(Position::new(1, 1)).unwrap();
    println!("{}", grid);
    for strategy in Strategy::ALL {
        grid.reset_traversal();
        let trace = strategy
            .search(&mut grid, Position::new(0, 0), Position::new(2, 2))
            .unwrap();
        let path = maze_pathfinding::reconstruct_path(&grid, Position::new(2, 2));
        println!("{strategy}: visited {} cells", trace.len());
        for p in path {
            println!("  {}", p);
        }
    }
}
