use maze_pathfinding::{generate_maze, run_search_with_path, GridConfig, MazeKind, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Generates each maze on the default 20x50 board and compares how many cells every strategy
// visits before it reaches the finish. The path of A* is drawn with `o`.

fn main() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut grid = GridConfig::default().build().unwrap();
    for kind in MazeKind::ALL {
        generate_maze(kind, &mut grid, &mut rng).unwrap();
        println!("== {kind}");
        for strategy in Strategy::ALL {
            let result = run_search_with_path(strategy, &mut grid).unwrap();
            println!(
                "{:>8}: visited {:>4}, path {:>3}",
                strategy.to_string(),
                result.trace.len(),
                result.path.len()
            );
            if strategy == Strategy::AStar {
                println!("{}", grid.render_with_path(&result.path));
            }
        }
    }
}
