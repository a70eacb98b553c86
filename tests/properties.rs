use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use maze_rs::generators::{new_generator, Generator, GeneratorKind};
use maze_rs::grids::wall_grid::WallGrid;
use maze_rs::solvers::bfs::Bfs;
use maze_rs::solvers::flood_fill::FloodFill;
use maze_rs::solvers::{new_solver, Solver, SolverKind};

fn generator_kind() -> impl Strategy<Value = GeneratorKind> {
    (0..GeneratorKind::ALL.len()).prop_map(|i| GeneratorKind::ALL[i])
}

fn build(kind: GeneratorKind, width: usize, height: usize, seed: u64) -> WallGrid {
    let mut grid = WallGrid::with_dims(width, height);
    let mut rng = StdRng::seed_from_u64(seed);
    new_generator(kind).generate_maze(&mut grid, &mut rng);
    grid
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generators_build_spanning_trees(
        kind in generator_kind(),
        width in 5usize..=12,
        height in 5usize..=12,
        seed in any::<u64>(),
    ) {
        let grid = build(kind, width, height, seed);
        let cells = width * height;

        prop_assert_eq!(grid.visited_count(), cells);
        prop_assert_eq!(grid.open_passages(), cells - 1);

        let mut bfs = Bfs::new(&grid, grid.entrance);
        while bfs.expand(&grid, |_| true).is_some() {}
        prop_assert!(bfs.distances().iter().all(|d| d.is_some()));
        prop_assert!(bfs.distance(grid.exit).is_some());
    }

    #[test]
    fn solvers_agree_on_the_shortest_path(
        kind in generator_kind(),
        width in 5usize..=12,
        height in 5usize..=12,
        seed in any::<u64>(),
    ) {
        let grid = build(kind, width, height, seed);

        let astar = new_solver(SolverKind::AStar).solve(&grid).len();
        let dijkstra = new_solver(SolverKind::Dijkstra).solve(&grid).len();
        let greedy = new_solver(SolverKind::Greedy).solve(&grid).len();
        let filled = new_solver(SolverKind::DeadEndFilling).solve(&grid).len();

        prop_assert!(astar > 0);
        prop_assert_eq!(astar, dijkstra);
        prop_assert_eq!(astar, filled);
        prop_assert!(greedy >= astar);
    }

    #[test]
    fn flood_fill_path_descends_by_one(
        kind in generator_kind(),
        width in 5usize..=12,
        height in 5usize..=12,
        seed in any::<u64>(),
    ) {
        let grid = build(kind, width, height, seed);
        let mut flood = FloodFill::new();
        let path = flood.solve(&grid).to_vec();

        prop_assert_eq!(path.first(), Some(&grid.entrance));
        prop_assert_eq!(path.last(), Some(&grid.exit));
        for pair in path.windows(2) {
            let near = flood.distance(pair[0]);
            let far = flood.distance(pair[1]);
            prop_assert_eq!(far, near.map(|d| d + 1));
        }
    }
}
