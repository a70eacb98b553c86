use rand::{Rng, RngCore};

use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Coord, Direction};
use crate::RunState;

/// A cell waiting at the edge of the maze, with the visited cell it was
/// discovered from.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    cell: Coord,
    from: Coord,
    dir: Direction,
}

pub struct RandPrims {
    frontier: Vec<FrontierEntry>,
    last_passage: Option<Coord>,
    processed: usize,
    state: RunState,
}

impl RandPrims {
    pub fn new() -> Self {
        Self {
            frontier: Vec::new(),
            last_passage: None,
            processed: 0,
            state: RunState::Uninitialized,
        }
    }

    fn visit(&mut self, grid: &mut WallGrid, coord: Coord) {
        grid.visit(coord);
        self.processed += 1;

        for (next, dir) in grid.neighborhood_of(coord) {
            let cell = grid.cell_mut(next);
            if !cell.visited && !cell.in_frontier {
                cell.in_frontier = true;
                self.frontier.push(FrontierEntry {
                    cell: next,
                    from: coord,
                    dir,
                });
            }
        }
    }
}

impl Generator for RandPrims {
    fn init(&mut self, grid: &mut WallGrid, _rng: &mut dyn RngCore) {
        let entrance = grid.entrance;
        self.frontier.clear();
        self.processed = 0;
        self.last_passage = Some(entrance);
        self.visit(grid, entrance);
        self.state = RunState::Running;
    }

    fn step(&mut self, grid: &mut WallGrid, rng: &mut dyn RngCore) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        if !self.frontier.is_empty() {
            // order-preserving removal keeps the frontier in discovery order
            let rand_idx = rng.gen_range(0, self.frontier.len());
            let entry = self.frontier.remove(rand_idx);

            grid.open_wall(entry.from, entry.dir);
            self.visit(grid, entry.cell);
            self.last_passage = Some(entry.cell);
        }

        if self.frontier.is_empty() {
            self.state = RunState::Complete;
            self.last_passage = None;
            return false;
        }

        true
    }

    fn state(&self) -> RunState {
        self.state
    }

    fn cursor(&self) -> Option<Coord> {
        self.last_passage
    }

    fn processed(&self) -> usize {
        self.processed
    }
}
