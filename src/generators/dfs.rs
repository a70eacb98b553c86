use rand::RngCore;

use crate::generators::{choose, Generator};
use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;
use crate::RunState;

/// Recursive backtracker driven by an explicit stack.
pub struct Backtracker {
    stack: Vec<Coord>,
    current: Option<Coord>,
    processed: usize,
    state: RunState,
}

impl Backtracker {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            current: None,
            processed: 0,
            state: RunState::Uninitialized,
        }
    }
}

impl Generator for Backtracker {
    fn init(&mut self, grid: &mut WallGrid, _rng: &mut dyn RngCore) {
        let start = grid.entrance;
        grid.visit(start);
        self.stack = vec![start];
        self.current = Some(start);
        self.processed = 1;
        self.state = RunState::Running;
    }

    fn step(&mut self, grid: &mut WallGrid, rng: &mut dyn RngCore) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        if let Some(&top) = self.stack.last() {
            self.current = Some(top);
            let unvisited = grid.unvisited_neighbors(top);

            match choose(rng, &unvisited) {
                Some((next, dir)) => {
                    grid.open_wall(top, dir);
                    grid.visit(next);
                    self.processed += 1;
                    self.stack.push(next);
                }
                None => {
                    // backtrack
                    self.stack.pop();
                }
            }
        }

        if self.stack.is_empty() {
            self.state = RunState::Complete;
            self.current = None;
            return false;
        }

        true
    }

    fn state(&self) -> RunState {
        self.state
    }

    fn cursor(&self) -> Option<Coord> {
        self.current
    }

    fn processed(&self) -> usize {
        self.processed
    }
}
