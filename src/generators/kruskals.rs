use rand::seq::SliceRandom;
use rand::RngCore;

use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Coord, Direction};
use crate::RunState;

/// Disjoint sets over cell indices, path compression plus union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn find(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = index;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Joins the sets of `a` and `b`, false if they were already one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        true
    }
}

pub struct RandKruskals {
    edges: Vec<(Coord, Direction)>,
    sets: UnionFind,
    last_edge: Option<Coord>,
    processed: usize,
    state: RunState,
}

impl RandKruskals {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            sets: UnionFind::new(0),
            last_edge: None,
            processed: 0,
            state: RunState::Uninitialized,
        }
    }

    fn join(&mut self, grid: &mut WallGrid, coord: Coord) {
        if !grid.get_cell(coord).visited {
            grid.visit(coord);
            self.processed += 1;
        }
    }
}

impl Generator for RandKruskals {
    fn init(&mut self, grid: &mut WallGrid, rng: &mut dyn RngCore) {
        self.edges.clear();
        for y in 0..grid.dims.height {
            for x in 0..grid.dims.width {
                for &dir in [Direction::East, Direction::South].iter() {
                    if grid.neighbor_coords_of((x, y), dir).is_some() {
                        self.edges.push(((x, y), dir));
                    }
                }
            }
        }
        self.edges.shuffle(rng);

        self.sets = UnionFind::new(grid.dims.cell_count());
        self.last_edge = None;
        self.processed = 0;
        self.state = RunState::Running;

        // a lone cell has no edge to be visited through
        if self.edges.is_empty() {
            let entrance = grid.entrance;
            self.join(grid, entrance);
        }
    }

    fn step(&mut self, grid: &mut WallGrid, _rng: &mut dyn RngCore) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        if let Some((coord, dir)) = self.edges.pop() {
            self.last_edge = Some(coord);
            if let Some(next) = grid.neighbor_coords_of(coord, dir) {
                let (a, b) = (grid.index_of(coord), grid.index_of(next));
                if self.sets.union(a, b) {
                    grid.open_wall(coord, dir);
                    self.join(grid, coord);
                    self.join(grid, next);
                }
            }
        }

        if self.edges.is_empty() {
            self.state = RunState::Complete;
            self.last_edge = None;
            return false;
        }

        true
    }

    fn state(&self) -> RunState {
        self.state
    }

    fn cursor(&self) -> Option<Coord> {
        self.last_edge
    }

    fn processed(&self) -> usize {
        self.processed
    }
}
