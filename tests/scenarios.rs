use maze_pathfinding::path::is_contiguous;
use maze_pathfinding::*;

#[test]
fn five_by_five_without_walls() {
    let start = Position::new(0, 0);
    let finish = Position::new(4, 4);
    let mut grid = create_grid(5, 5, start, finish).unwrap();
    for strategy in Strategy::ALL {
        run_search(strategy, &mut grid, start, finish).unwrap();
        let path = reconstruct_path(&grid, finish);
        if strategy == Strategy::Dfs {
            assert!(path.len() >= 9);
        } else {
            assert_eq!(path.len(), 9, "{strategy}");
        }
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&finish));
        assert!(is_contiguous(&path));
    }
}

#[test]
fn walled_in_endpoints_have_no_path() {
    let start = Position::new(1, 1);
    let finish = Position::new(3, 5);
    let mut grid = create_grid(5, 7, start, finish).unwrap();
    grid.fill_walls();
    grid.update();
    assert!(!grid.reachable(&start, &finish));
    for strategy in Strategy::ALL {
        let trace = run_search(strategy, &mut grid, start, finish).unwrap();
        assert_eq!(trace, vec![start], "{strategy}");
        assert!(reconstruct_path(&grid, finish).is_empty());
    }
}

#[test]
fn move_start_onto_wall_fails() {
    let mut grid = GridConfig::default().build().unwrap();
    toggle_wall(&mut grid, 3, 3).unwrap();
    let before = grid.to_string();
    assert_eq!(
        move_start(&mut grid, 3, 3),
        Err(GridError::OccupiedTarget(Position::new(3, 3)))
    );
    assert_eq!(grid.to_string(), before);
    assert_eq!(grid.start(), DEFAULT_START);
}

#[test]
fn toggling_endpoints_is_rejected() {
    let mut grid = GridConfig::default().build().unwrap();
    let before = grid.to_string();
    assert_eq!(
        toggle_wall(&mut grid, DEFAULT_START.row, DEFAULT_START.col),
        Err(GridError::Rejected(DEFAULT_START))
    );
    assert_eq!(
        toggle_wall(&mut grid, DEFAULT_FINISH.row, DEFAULT_FINISH.col),
        Err(GridError::Rejected(DEFAULT_FINISH))
    );
    assert_eq!(grid.to_string(), before);
}

#[test]
fn wall_between_forces_a_detour() {
    // |S.#..|
    // |..#..|
    // |..#.F|
    // |.....|
    let start = Position::new(0, 0);
    let finish = Position::new(2, 4);
    let mut grid = create_grid(4, 5, start, finish).unwrap();
    for row in 0..3 {
        toggle_wall(&mut grid, row, 2).unwrap();
    }
    for strategy in [Strategy::Bfs, Strategy::Dijkstra, Strategy::AStar] {
        let result = run_search_with_path(strategy, &mut grid).unwrap();
        assert_eq!(result.path.len(), 9, "{strategy}");
        assert!(result.path.contains(&Position::new(3, 2)));
    }
}
