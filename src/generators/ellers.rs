use rand::{Rng, RngCore};

use crate::generators::{choose, Generator};
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Coord, Direction};
use crate::RunState;

/// Chance of joining two horizontally adjacent cells from different sets.
pub const MERGE_CHANCE: f64 = 0.5;
/// Chance of an extra downward passage once a set has its forced one.
pub const DOWN_CHANCE: f64 = 0.3;

/// Eller's algorithm, one row per step. Set membership only ever matters
/// within the row being built, so labels are kept for that row alone.
pub struct Ellers {
    row: usize,
    labels: Vec<Option<usize>>,
    next_label: usize,
    processed: usize,
    state: RunState,
}

impl Ellers {
    pub fn new() -> Self {
        Self {
            row: 0,
            labels: Vec::new(),
            next_label: 0,
            processed: 0,
            state: RunState::Uninitialized,
        }
    }

    fn label_row(&mut self) -> Vec<usize> {
        let mut row = Vec::with_capacity(self.labels.len());
        for slot in self.labels.iter_mut() {
            let label = match *slot {
                Some(label) => label,
                None => {
                    self.next_label += 1;
                    self.next_label
                }
            };
            *slot = Some(label);
            row.push(label);
        }
        row
    }

    fn merge_across(
        &mut self,
        grid: &mut WallGrid,
        rng: &mut dyn RngCore,
        labels: &mut [usize],
        force: bool,
    ) {
        let y = self.row;
        for x in 0..labels.len().saturating_sub(1) {
            let (keep, gone) = (labels[x], labels[x + 1]);
            if keep == gone || !(force || rng.gen_bool(MERGE_CHANCE)) {
                continue;
            }

            grid.open_wall((x, y), Direction::East);
            for label in labels.iter_mut().filter(|label| **label == gone) {
                *label = keep;
            }
        }
    }

    fn drop_down(
        &self,
        grid: &mut WallGrid,
        rng: &mut dyn RngCore,
        labels: &[usize],
    ) -> Vec<Option<usize>> {
        let y = self.row;
        let mut next = vec![None; labels.len()];

        // sets in order of first appearance along the row
        let mut sets: Vec<(usize, Vec<usize>)> = Vec::new();
        for (x, &label) in labels.iter().enumerate() {
            match sets.iter_mut().find(|(l, _)| *l == label) {
                Some((_, members)) => members.push(x),
                None => sets.push((label, vec![x])),
            }
        }

        for (label, members) in sets {
            let mut carved = false;
            for &x in members.iter() {
                if rng.gen_bool(DOWN_CHANCE) {
                    grid.open_wall((x, y), Direction::South);
                    next[x] = Some(label);
                    carved = true;
                }
            }

            if !carved {
                if let Some(x) = choose(rng, &members) {
                    grid.open_wall((x, y), Direction::South);
                    next[x] = Some(label);
                }
            }
        }

        next
    }
}

impl Generator for Ellers {
    fn init(&mut self, grid: &mut WallGrid, _rng: &mut dyn RngCore) {
        self.row = 0;
        self.labels = vec![None; grid.dims.width];
        self.next_label = 0;
        self.processed = 0;
        self.state = RunState::Running;
    }

    fn step(&mut self, grid: &mut WallGrid, rng: &mut dyn RngCore) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        let last_row = self.row + 1 >= grid.dims.height;
        let mut labels = self.label_row();
        self.merge_across(grid, rng, &mut labels, last_row);

        for x in 0..grid.dims.width {
            grid.visit((x, self.row));
        }
        self.processed += grid.dims.width;

        if last_row {
            self.labels.clear();
            self.state = RunState::Complete;
            return false;
        }

        self.labels = self.drop_down(grid, rng, &labels);
        self.row += 1;
        true
    }

    fn state(&self) -> RunState {
        self.state
    }

    fn cursor(&self) -> Option<Coord> {
        match self.state {
            RunState::Running => Some((0, self.row)),
            _ => None,
        }
    }

    fn processed(&self) -> usize {
        self.processed
    }
}
