pub mod best_first;
pub mod bfs;
pub mod dead_end;
pub mod flood_fill;
pub mod node;

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;
use crate::RunState;

use best_first::{BestFirst, Strategy};
use dead_end::DeadEndFiller;
use flood_fill::FloodFill;

/// How a solver currently sees a cell, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMark {
    Open,
    Closed,
    Filled,
}

/// A resumable path search from the grid's entrance to its exit. Solvers
/// only read the grid.
pub trait Solver {
    fn init(&mut self, grid: &WallGrid);
    fn step(&mut self, grid: &WallGrid) -> bool;
    fn state(&self) -> RunState;

    /// Entrance to exit inclusive, empty until solved or if unreachable.
    fn solution(&self) -> &[Coord];

    fn cursor(&self) -> Option<Coord>;

    /// Cells expanded (or filled) so far.
    fn processed(&self) -> usize;

    fn mark(&self, coord: Coord) -> Option<SearchMark>;

    fn is_done(&self) -> bool {
        self.state() == RunState::Complete
    }

    fn solve(&mut self, grid: &WallGrid) -> &[Coord] {
        if self.state() == RunState::Uninitialized {
            self.init(grid);
        }
        while self.step(grid) {}
        self.solution()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SolverKind {
    AStar,
    Dijkstra,
    Greedy,
    DeadEndFilling,
    FloodFill,
}

impl SolverKind {
    pub const ALL: [SolverKind; 5] = [
        SolverKind::AStar,
        SolverKind::Dijkstra,
        SolverKind::Greedy,
        SolverKind::DeadEndFilling,
        SolverKind::FloodFill,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SolverKind::AStar => "astar",
            SolverKind::Dijkstra => "dijkstra",
            SolverKind::Greedy => "greedy",
            SolverKind::DeadEndFilling => "deadend-filling",
            SolverKind::FloodFill => "floodfill",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SolverKind::AStar => "A*",
            SolverKind::Dijkstra => "Dijkstra",
            SolverKind::Greedy => "Greedy Best-First",
            SolverKind::DeadEndFilling => "Dead-End Filling",
            SolverKind::FloodFill => "Flood Fill",
        }
    }
}

impl Default for SolverKind {
    fn default() -> Self {
        SolverKind::AStar
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SolverKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolverKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| ConfigError::UnknownSolver(s.to_string()))
    }
}

pub fn new_solver(kind: SolverKind) -> Box<dyn Solver> {
    match kind {
        SolverKind::AStar => Box::new(BestFirst::new(Strategy::AStar)),
        SolverKind::Dijkstra => Box::new(BestFirst::new(Strategy::Dijkstra)),
        SolverKind::Greedy => Box::new(BestFirst::new(Strategy::Greedy)),
        SolverKind::DeadEndFilling => Box::new(DeadEndFiller::new()),
        SolverKind::FloodFill => Box::new(FloodFill::new()),
    }
}

/// Manhattan distance, the unit-cost heuristic on a 4-connected grid.
pub fn manhattan(a: Coord, b: Coord) -> usize {
    let dx = if a.0 > b.0 { a.0 - b.0 } else { b.0 - a.0 };
    let dy = if a.1 > b.1 { a.1 - b.1 } else { b.1 - a.1 };
    dx + dy
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::generators::binary_tree::{Bias, BinaryTree};
    use crate::generators::{new_generator, Generator, GeneratorKind};
    use crate::grids::wall_grid::WallGrid;
    use crate::grids::Coord;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Top row corridor, every other cell opened north.
    pub fn north_east_5x5() -> WallGrid {
        let mut grid = WallGrid::with_dims(5, 5);
        let mut rng = StepRng::new(0, 0);
        BinaryTree::with_bias(Bias::NorthEast).generate_maze(&mut grid, &mut rng);
        grid
    }

    pub fn generated(kind: GeneratorKind, width: usize, height: usize, seed: u64) -> WallGrid {
        let mut grid = WallGrid::with_dims(width, height);
        let mut rng = StdRng::seed_from_u64(seed);
        new_generator(kind).generate_maze(&mut grid, &mut rng);
        grid
    }

    /// Consecutive cells are adjacent and joined by an open wall.
    pub fn assert_walkable(grid: &WallGrid, path: &[Coord]) {
        assert_eq!(path.first(), Some(&grid.entrance));
        assert_eq!(path.last(), Some(&grid.exit));
        for pair in path.windows(2) {
            assert!(
                grid.accessible_neighbors(pair[0]).contains(&pair[1]),
                "{:?} -> {:?} is walled",
                pair[0],
                pair[1]
            );
        }
    }
}
