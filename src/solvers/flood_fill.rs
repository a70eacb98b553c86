use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;
use crate::solvers::bfs::Bfs;
use crate::solvers::{SearchMark, Solver};
use crate::RunState;

/// Floods the whole maze with hop counts from the entrance, then walks
/// downhill from the exit.
pub struct FloodFill {
    bfs: Option<Bfs>,
    current: Option<Coord>,
    solution: Vec<Coord>,
    processed: usize,
    state: RunState,
}

impl FloodFill {
    pub fn new() -> Self {
        Self {
            bfs: None,
            current: None,
            solution: Vec::new(),
            processed: 0,
            state: RunState::Uninitialized,
        }
    }

    /// Distance from the entrance, `None` where the flood never reached.
    pub fn distance(&self, coord: Coord) -> Option<usize> {
        self.bfs.as_ref().and_then(|bfs| bfs.distance(coord))
    }

    fn descend(&self, grid: &WallGrid) -> Vec<Coord> {
        let mut cursor = grid.exit;
        let mut distance = match self.distance(cursor) {
            Some(distance) => distance,
            None => return Vec::new(),
        };

        let mut path = vec![cursor];
        while cursor != grid.entrance {
            let lower = grid
                .accessible_neighbors(cursor)
                .into_iter()
                .filter_map(|next| self.distance(next).map(|d| (next, d)))
                .filter(|&(_, d)| d < distance)
                .min_by_key(|&(_, d)| d);

            match lower {
                Some((next, d)) => {
                    cursor = next;
                    distance = d;
                    path.push(next);
                }
                None => return Vec::new(),
            }
        }

        path.reverse();
        path
    }
}

impl Solver for FloodFill {
    fn init(&mut self, grid: &WallGrid) {
        self.bfs = Some(Bfs::new(grid, grid.entrance));
        self.current = None;
        self.solution.clear();
        self.processed = 0;
        self.state = RunState::Running;
    }

    fn step(&mut self, grid: &WallGrid) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        let more = match self.bfs.as_mut() {
            Some(bfs) => match bfs.expand(grid, |_| true) {
                Some(coord) => {
                    self.current = Some(coord);
                    self.processed += 1;
                    !bfs.is_exhausted()
                }
                None => false,
            },
            None => false,
        };

        if !more {
            self.solution = self.descend(grid);
            self.state = RunState::Complete;
        }
        more
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
        let bfs = self.bfs.as_ref()?;
        if bfs.is_expanded(coord) {
            Some(SearchMark::Closed)
        } else if bfs.is_queued(coord) {
            Some(SearchMark::Open)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test_flood_fill {
    use super::*;
    use crate::generators::GeneratorKind;
    use crate::solvers::test_support::{generated, north_east_5x5};

    #[test]
    fn floods_every_cell_before_finishing() {
        let grid = north_east_5x5();
        let mut flood = FloodFill::new();
        flood.init(&grid);

        let mut steps = 1;
        while flood.step(&grid) {
            steps += 1;
        }
        assert_eq!(steps, 25);
        assert_eq!(flood.processed(), 25);
        assert_eq!(flood.distance(grid.exit), Some(8));
        assert_eq!(flood.solution().len(), 9);
    }

    #[test]
    fn distances_fall_by_one_toward_the_entrance() {
        for &kind in GeneratorKind::ALL.iter() {
            let grid = generated(kind, 13, 9, 21);
            let mut flood = FloodFill::new();
            let path = flood.solve(&grid).to_vec();

            assert_eq!(flood.distance(path[0]), Some(0));
            for pair in path.windows(2) {
                let (a, b) = (flood.distance(pair[0]), flood.distance(pair[1]));
                assert_eq!(b, a.map(|d| d + 1));
            }
        }
    }

    #[test]
    fn unreachable_exit_leaves_the_path_empty() {
        let mut grid = WallGrid::with_dims(5, 5);
        grid.clear_wall_between((0, 0), (1, 0));
        let mut flood = FloodFill::new();

        assert!(flood.solve(&grid).is_empty());
        assert_eq!(flood.distance(grid.exit), None);
        assert_eq!(flood.distance((1, 0)), Some(1));
        assert_eq!(flood.processed(), 2);
    }
}
