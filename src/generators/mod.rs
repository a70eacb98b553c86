pub mod binary_tree;
pub mod dfs;
pub mod ellers;
pub mod hunt_and_kill;
pub mod kruskals;
pub mod prim;
pub mod wilsons;

use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngCore};

use crate::error::ConfigError;
use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;
use crate::RunState;

use binary_tree::BinaryTree;
use dfs::Backtracker;
use ellers::Ellers;
use hunt_and_kill::HuntAndKill;
use kruskals::RandKruskals;
use prim::RandPrims;
use wilsons::Wilsons;

/// A resumable spanning-tree builder. `init` seeds the work-list, every
/// `step` does one bounded unit of work on the grid and reports whether
/// more remains.
pub trait Generator {
    fn init(&mut self, grid: &mut WallGrid, rng: &mut dyn RngCore);
    fn step(&mut self, grid: &mut WallGrid, rng: &mut dyn RngCore) -> bool;
    fn state(&self) -> RunState;

    /// Cell the algorithm is currently working on.
    fn cursor(&self) -> Option<Coord>;

    /// Cells joined to the maze so far.
    fn processed(&self) -> usize;

    fn is_done(&self) -> bool {
        self.state() == RunState::Complete
    }

    fn generate_maze(&mut self, grid: &mut WallGrid, rng: &mut dyn RngCore) {
        if self.state() == RunState::Uninitialized {
            self.init(grid, rng);
        }
        while self.step(grid, rng) {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    RandPrims,
    Backtracker,
    HuntAndKill,
    Ellers,
    RandKruskals,
    Wilsons,
    BinaryTree,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 7] = [
        GeneratorKind::RandPrims,
        GeneratorKind::Backtracker,
        GeneratorKind::HuntAndKill,
        GeneratorKind::Ellers,
        GeneratorKind::RandKruskals,
        GeneratorKind::Wilsons,
        GeneratorKind::BinaryTree,
    ];

    pub fn id(self) -> &'static str {
        match self {
            GeneratorKind::RandPrims => "prim",
            GeneratorKind::Backtracker => "dfs",
            GeneratorKind::HuntAndKill => "huntandkill",
            GeneratorKind::Ellers => "ellers",
            GeneratorKind::RandKruskals => "kruskals",
            GeneratorKind::Wilsons => "wilsons",
            GeneratorKind::BinaryTree => "btree",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::RandPrims => "Prim's Algorithm",
            GeneratorKind::Backtracker => "Depth-First Search",
            GeneratorKind::HuntAndKill => "Hunt-and-Kill",
            GeneratorKind::Ellers => "Eller's Algorithm",
            GeneratorKind::RandKruskals => "Kruskal's Algorithm",
            GeneratorKind::Wilsons => "Wilson's Algorithm",
            GeneratorKind::BinaryTree => "Binary Tree",
        }
    }
}

impl Default for GeneratorKind {
    fn default() -> Self {
        GeneratorKind::RandPrims
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GeneratorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeneratorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| ConfigError::UnknownGenerator(s.to_string()))
    }
}

pub fn new_generator(kind: GeneratorKind) -> Box<dyn Generator> {
    match kind {
        GeneratorKind::RandPrims => Box::new(RandPrims::new()),
        GeneratorKind::Backtracker => Box::new(Backtracker::new()),
        GeneratorKind::HuntAndKill => Box::new(HuntAndKill::new()),
        GeneratorKind::Ellers => Box::new(Ellers::new()),
        GeneratorKind::RandKruskals => Box::new(RandKruskals::new()),
        GeneratorKind::Wilsons => Box::new(Wilsons::new()),
        GeneratorKind::BinaryTree => Box::new(BinaryTree::new()),
    }
}

/// Uniform pick from `items`, `None` when empty.
pub(crate) fn choose<T: Copy>(rng: &mut dyn RngCore, items: &[T]) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    Some(items[rng.gen_range(0, items.len())])
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::grids::wall_grid::WallGrid;
    use crate::solvers::bfs::Bfs;

    /// Cells reachable from the entrance through open walls.
    pub fn reachable(grid: &WallGrid) -> usize {
        let mut bfs = Bfs::new(grid, grid.entrance);
        let mut count = 0;
        while bfs.expand(grid, |_| true).is_some() {
            count += 1;
        }
        count
    }

    pub fn assert_spanning_tree(grid: &WallGrid) {
        let cells = grid.dims.cell_count();
        assert_eq!(grid.visited_count(), cells, "every cell visited");
        assert_eq!(grid.open_passages(), cells - 1, "tree edge count");
        assert_eq!(reachable(grid), cells, "connected");
    }
}
