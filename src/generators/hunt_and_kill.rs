use rand::RngCore;

use crate::generators::{choose, Generator};
use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;
use crate::RunState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Kill,
    Hunt,
}

/// Random walk until stuck, then scan rows for a visited cell that still
/// borders unvisited ground and walk again from there.
pub struct HuntAndKill {
    phase: Phase,
    current: Coord,
    /// No row above this one holds a visited cell with unvisited neighbours.
    hunt_row: usize,
    processed: usize,
    state: RunState,
}

impl HuntAndKill {
    pub fn new() -> Self {
        Self {
            phase: Phase::Kill,
            current: (0, 0),
            hunt_row: 0,
            processed: 0,
            state: RunState::Uninitialized,
        }
    }

    fn kill(&mut self, grid: &mut WallGrid, rng: &mut dyn RngCore) {
        let unvisited = grid.unvisited_neighbors(self.current);
        match choose(rng, &unvisited) {
            Some((next, dir)) => {
                grid.open_wall(self.current, dir);
                grid.visit(next);
                self.processed += 1;
                self.current = next;
                // the new cell may leave unvisited neighbours behind it
                self.hunt_row = self.hunt_row.min(next.1);
            }
            None => self.phase = Phase::Hunt,
        }
    }

    /// Scans a single row. Returns false once every row came up empty.
    fn hunt(&mut self, grid: &WallGrid) -> bool {
        if self.hunt_row >= grid.dims.height {
            return false;
        }

        let y = self.hunt_row;
        let found = (0..grid.dims.width).map(|x| (x, y)).find(|&coord| {
            grid.get_cell(coord).visited && !grid.unvisited_neighbors(coord).is_empty()
        });

        match found {
            Some(coord) => {
                self.current = coord;
                self.phase = Phase::Kill;
            }
            None => self.hunt_row += 1,
        }

        self.hunt_row < grid.dims.height
    }
}

impl Generator for HuntAndKill {
    fn init(&mut self, grid: &mut WallGrid, _rng: &mut dyn RngCore) {
        let start = grid.entrance;
        grid.visit(start);
        self.current = start;
        self.phase = Phase::Kill;
        self.hunt_row = 0;
        self.processed = 1;
        self.state = RunState::Running;
    }

    fn step(&mut self, grid: &mut WallGrid, rng: &mut dyn RngCore) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        let more = match self.phase {
            Phase::Kill => {
                self.kill(grid, rng);
                true
            }
            Phase::Hunt => self.hunt(grid),
        };

        if !more {
            self.state = RunState::Complete;
        }
        more
    }

    fn state(&self) -> RunState {
        self.state
    }

    fn cursor(&self) -> Option<Coord> {
        match self.state {
            RunState::Running => match self.phase {
                Phase::Kill => Some(self.current),
                Phase::Hunt => Some((0, self.hunt_row)),
            },
            _ => None,
        }
    }

    fn processed(&self) -> usize {
        self.processed
    }
}

#[cfg(test)]
mod test_hunt_and_kill {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn hunt_restarts_next_to_unvisited_ground() {
        let mut grid = WallGrid::with_dims(5, 5);
        let mut rng = StepRng::new(0, 0);
        let mut hak = HuntAndKill::new();
        hak.init(&mut grid, &mut rng);
        // box the entrance in so the first walk is stuck immediately
        grid.visit((1, 0));
        grid.visit((0, 1));

        assert!(hak.step(&mut grid, &mut rng));
        assert_eq!(hak.phase, Phase::Hunt);

        assert!(hak.step(&mut grid, &mut rng));
        assert_eq!(hak.phase, Phase::Kill);
        assert_eq!(hak.current, (1, 0));

        assert!(hak.step(&mut grid, &mut rng));
        assert_eq!(hak.current, (2, 0));
        assert!(grid.is_open((1, 0), crate::grids::Direction::East));
    }

    #[test]
    fn full_walk_finishes_after_one_empty_scan() {
        let mut grid = WallGrid::with_dims(5, 5);
        let mut rng = StepRng::new(0, 0);
        let mut hak = HuntAndKill::new();
        hak.init(&mut grid, &mut rng);

        // the first-choice walk snakes through all 25 cells
        let mut steps = 1;
        while hak.step(&mut grid, &mut rng) {
            steps += 1;
        }
        assert_eq!(hak.processed(), 25);
        // 24 carving steps, one stuck step, five row scans
        assert_eq!(steps, 30);
        assert!(hak.is_done());
    }
}
