use std::collections::VecDeque;

use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;
use crate::solvers::bfs::Bfs;
use crate::solvers::{SearchMark, Solver};
use crate::RunState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Filling,
    Searching,
}

/// Fills dead ends until only the corridors joining entrance and exit are
/// left, then runs a breadth-first search over what remains. The grid is
/// never touched; filled cells are tracked here and treated as walls.
pub struct DeadEndFiller {
    phase: Phase,
    filled: Vec<bool>,
    width: usize,
    pending: VecDeque<Coord>,
    bfs: Option<Bfs>,
    current: Option<Coord>,
    solution: Vec<Coord>,
    processed: usize,
    state: RunState,
}

impl DeadEndFiller {
    pub fn new() -> Self {
        Self {
            phase: Phase::Filling,
            filled: Vec::new(),
            width: 0,
            pending: VecDeque::new(),
            bfs: None,
            current: None,
            solution: Vec::new(),
            processed: 0,
            state: RunState::Uninitialized,
        }
    }

    pub fn is_filled(&self, coord: Coord) -> bool {
        self.filled
            .get(coord.1 * self.width + coord.0)
            .copied()
            .unwrap_or(false)
    }

    pub fn filled_count(&self) -> usize {
        self.filled.iter().filter(|filled| **filled).count()
    }

    fn open_passages(&self, grid: &WallGrid, coord: Coord) -> Vec<Coord> {
        grid.accessible_neighbors(coord)
            .into_iter()
            .filter(|next| !self.is_filled(*next))
            .collect()
    }

    fn is_dead_end(&self, grid: &WallGrid, coord: Coord) -> bool {
        coord != grid.entrance
            && coord != grid.exit
            && !self.is_filled(coord)
            && self.open_passages(grid, coord).len() == 1
    }

    /// Fills the next queued dead end, skipping stale entries. Returns
    /// false when nothing was left to fill.
    fn fill_next(&mut self, grid: &WallGrid) -> bool {
        while let Some(coord) = self.pending.pop_front() {
            if !self.is_dead_end(grid, coord) {
                continue;
            }

            let index = grid.index_of(coord);
            let exits = self.open_passages(grid, coord);
            self.filled[index] = true;
            self.current = Some(coord);
            self.processed += 1;

            for next in exits {
                if self.is_dead_end(grid, next) {
                    self.pending.push_back(next);
                }
            }
            return true;
        }

        false
    }

    fn search(&mut self, grid: &WallGrid) -> bool {
        let filled = &self.filled;
        let bfs = match self.bfs.as_mut() {
            Some(bfs) => bfs,
            None => return false,
        };

        let reached = match bfs.expand(grid, |next| !filled[grid.index_of(next)]) {
            Some(coord) => {
                self.current = Some(coord);
                self.processed += 1;
                coord == grid.exit
            }
            None => true,
        };

        if reached || bfs.is_exhausted() {
            self.solution = bfs.path_to(grid.exit);
            return false;
        }
        true
    }
}

impl Solver for DeadEndFiller {
    fn init(&mut self, grid: &WallGrid) {
        self.filled = vec![false; grid.dims.cell_count()];
        self.width = grid.dims.width;
        self.pending = (0..grid.dims.cell_count())
            .map(|index| grid.coord_of(index))
            .filter(|&coord| self.is_dead_end(grid, coord))
            .collect();
        self.phase = Phase::Filling;
        self.bfs = None;
        self.current = None;
        self.solution.clear();
        self.processed = 0;
        self.state = RunState::Running;
    }

    fn step(&mut self, grid: &WallGrid) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        if self.phase == Phase::Filling {
            if self.fill_next(grid) {
                return true;
            }
            log::trace!("filled {} dead ends", self.filled_count());
            self.phase = Phase::Searching;
            self.bfs = Some(Bfs::new(grid, grid.entrance));
        }

        if !self.search(grid) {
            self.state = RunState::Complete;
            return false;
        }
        true
    }

    fn state(&self) -> RunState {
        self.state
    }

    fn solution(&self) -> &[Coord] {
        &self.solution
    }

    fn cursor(&self) -> Option<Coord> {
        self.current
    }

    fn processed(&self) -> usize {
        self.processed
    }

    fn mark(&self, coord: Coord) -> Option<SearchMark> {
        if self.is_filled(coord) {
            return Some(SearchMark::Filled);
        }
        match self.bfs.as_ref() {
            Some(bfs) if bfs.is_expanded(coord) => Some(SearchMark::Closed),
            Some(bfs) if bfs.is_queued(coord) => Some(SearchMark::Open),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test_dead_end {
    use super::*;
    use crate::solvers::test_support::north_east_5x5;

    #[test]
    fn fills_every_column_but_the_last() {
        let grid = north_east_5x5();
        let mut filler = DeadEndFiller::new();
        filler.init(&grid);

        // bottom of each column except the exit's
        assert_eq!(filler.pending.len(), 4);

        let mut calls = 0;
        while filler.phase == Phase::Filling && filler.step(&grid) {
            calls += 1;
        }
        // the 17th call found nothing left to fill and expanded the entrance
        assert_eq!(calls, 17);
        assert_eq!(filler.filled_count(), 16);
        assert_eq!(filler.processed(), 17);
        assert_eq!(filler.mark(grid.entrance), Some(SearchMark::Closed));
        assert_eq!(filler.mark((1, 0)), Some(SearchMark::Open));
        for y in 1..5 {
            for x in 0..4 {
                assert!(filler.is_filled((x, y)));
                assert_eq!(filler.mark((x, y)), Some(SearchMark::Filled));
            }
        }
        assert!(!filler.is_filled(grid.entrance));
        assert!(!filler.is_filled(grid.exit));
    }

    #[test]
    fn search_walks_only_the_skeleton() {
        let grid = north_east_5x5();
        let mut filler = DeadEndFiller::new();
        let path = filler.solve(&grid).to_vec();

        assert_eq!(path.len(), 9);
        // 16 fills plus one expansion per skeleton cell
        assert_eq!(filler.processed(), 16 + 9);
    }

    #[test]
    fn entrance_and_exit_are_never_dead_ends() {
        let mut grid = WallGrid::with_dims(5, 5);
        grid.clear_wall_between((0, 0), (1, 0));
        grid.clear_wall_between((4, 4), (4, 3));
        let mut filler = DeadEndFiller::new();
        filler.init(&grid);

        assert_eq!(filler.pending, vec![(1, 0), (4, 3)]);
        assert!(filler.solve(&grid).is_empty());
        assert!(!filler.is_filled((0, 0)));
        assert!(!filler.is_filled((4, 4)));
    }
}
