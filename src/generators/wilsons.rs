use std::collections::HashMap;

use rand::RngCore;

use crate::generators::{choose, Generator};
use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;
use crate::RunState;

/// Wilson's algorithm: loop-erased random walks from unvisited cells until
/// they hit the maze, each walk carved in one go.
pub struct Wilsons {
    pool: Vec<Coord>,
    walk: Vec<Coord>,
    /// position of each walk cell inside `walk`
    on_walk: HashMap<Coord, usize>,
    processed: usize,
    state: RunState,
}

impl Wilsons {
    pub fn new() -> Self {
        Self {
            pool: Vec::new(),
            walk: Vec::new(),
            on_walk: HashMap::new(),
            processed: 0,
            state: RunState::Uninitialized,
        }
    }

    /// The walk that has not reached the maze yet.
    pub fn walk(&self) -> &[Coord] {
        &self.walk
    }

    fn start_walk(&mut self, rng: &mut dyn RngCore) {
        if let Some(start) = choose(rng, &self.pool) {
            self.walk.push(start);
            self.on_walk.insert(start, 0);
        }
    }

    fn extend_walk(&mut self, grid: &mut WallGrid, rng: &mut dyn RngCore) {
        let current = match self.walk.last() {
            Some(&current) => current,
            None => return,
        };
        let neighbors: Vec<Coord> = grid.neighborhood_of(current).map(|(c, _)| c).collect();
        let next = match choose(rng, &neighbors) {
            Some(next) => next,
            None => return,
        };

        if grid.get_cell(next).visited {
            self.walk.push(next);
            self.carve(grid);
        } else if let Some(&position) = self.on_walk.get(&next) {
            // loop erasure
            for erased in self.walk.drain(position + 1..) {
                self.on_walk.remove(&erased);
            }
        } else {
            self.on_walk.insert(next, self.walk.len());
            self.walk.push(next);
        }
    }

    fn carve(&mut self, grid: &mut WallGrid) {
        for pair in self.walk.windows(2) {
            grid.clear_wall_between(pair[0], pair[1]);
        }
        for &coord in self.walk.iter() {
            if !grid.get_cell(coord).visited {
                grid.visit(coord);
                self.processed += 1;
            }
        }

        self.walk.clear();
        self.on_walk.clear();
        self.pool.retain(|&coord| !grid.get_cell(coord).visited);
    }
}

impl Generator for Wilsons {
    fn init(&mut self, grid: &mut WallGrid, rng: &mut dyn RngCore) {
        self.pool = (0..grid.dims.cell_count())
            .map(|index| grid.coord_of(index))
            .collect();
        self.walk.clear();
        self.on_walk.clear();
        self.processed = 0;

        if let Some(seed) = choose(rng, &self.pool) {
            grid.visit(seed);
            self.processed = 1;
        }
        self.pool.retain(|&coord| !grid.get_cell(coord).visited);
        self.state = RunState::Running;
    }

    fn step(&mut self, grid: &mut WallGrid, rng: &mut dyn RngCore) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        if self.walk.is_empty() {
            self.start_walk(rng);
        } else {
            self.extend_walk(grid, rng);
        }

        if self.pool.is_empty() {
            self.state = RunState::Complete;
            return false;
        }

        true
    }

    fn state(&self) -> RunState {
        self.state
    }

    fn cursor(&self) -> Option<Coord> {
        self.walk.last().copied()
    }

    fn processed(&self) -> usize {
        self.processed
    }
}

#[cfg(test)]
mod test_wilsons {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn walk_never_repeats_a_cell() {
        for seed in 0..8 {
            let mut grid = WallGrid::with_dims(9, 9);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut wilsons = Wilsons::new();
            wilsons.init(&mut grid, &mut rng);

            while wilsons.step(&mut grid, &mut rng) {
                let unique: HashSet<&Coord> = wilsons.walk().iter().collect();
                assert_eq!(unique.len(), wilsons.walk().len());
                assert_eq!(wilsons.on_walk.len(), wilsons.walk().len());
                assert!(wilsons
                    .walk()
                    .iter()
                    .all(|&coord| !grid.get_cell(coord).visited));
            }
            assert!(wilsons.walk().is_empty());
            assert_eq!(grid.visited_count(), 81);
        }
    }

    #[test]
    fn pool_holds_only_unvisited_cells() {
        let mut grid = WallGrid::with_dims(5, 5);
        let mut rng = StdRng::seed_from_u64(11);
        let mut wilsons = Wilsons::new();
        wilsons.init(&mut grid, &mut rng);

        assert_eq!(wilsons.pool.len(), 24);
        for _ in 0..40 {
            if !wilsons.step(&mut grid, &mut rng) {
                break;
            }
            assert_eq!(wilsons.pool.len() + grid.visited_count(), 25);
        }
    }
}
