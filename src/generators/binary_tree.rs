use rand::RngCore;

use crate::generators::{choose, Generator};
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Coord, Direction};
use crate::RunState;

/// The two directions every cell may carve toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Bias {
    pub const ALL: [Bias; 4] = [
        Bias::NorthEast,
        Bias::NorthWest,
        Bias::SouthEast,
        Bias::SouthWest,
    ];

    pub fn directions(self) -> [Direction; 2] {
        match self {
            Bias::NorthEast => [Direction::North, Direction::East],
            Bias::NorthWest => [Direction::North, Direction::West],
            Bias::SouthEast => [Direction::South, Direction::East],
            Bias::SouthWest => [Direction::South, Direction::West],
        }
    }
}

pub struct BinaryTree {
    bias: Option<Bias>,
    fixed_bias: bool,
    index: usize,
    next_cell: Option<Coord>,
    processed: usize,
    state: RunState,
}

impl BinaryTree {
    /// Bias drawn from the random source at init.
    pub fn new() -> Self {
        Self {
            bias: None,
            fixed_bias: false,
            index: 0,
            next_cell: None,
            processed: 0,
            state: RunState::Uninitialized,
        }
    }

    pub fn with_bias(bias: Bias) -> Self {
        Self {
            bias: Some(bias),
            fixed_bias: true,
            ..Self::new()
        }
    }

    pub fn bias(&self) -> Option<Bias> {
        self.bias
    }
}

impl Generator for BinaryTree {
    fn init(&mut self, _grid: &mut WallGrid, rng: &mut dyn RngCore) {
        if !self.fixed_bias {
            self.bias = choose(rng, &Bias::ALL);
        }
        self.index = 0;
        self.next_cell = Some((0, 0));
        self.processed = 0;
        self.state = RunState::Running;
    }

    fn step(&mut self, grid: &mut WallGrid, rng: &mut dyn RngCore) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        let coord = grid.coord_of(self.index);
        if let Some(bias) = self.bias {
            let candidates: Vec<Direction> = bias
                .directions()
                .iter()
                .copied()
                .filter(|dir| grid.neighbor_coords_of(coord, *dir).is_some())
                .collect();
            if let Some(dir) = choose(rng, &candidates) {
                grid.open_wall(coord, dir);
            }
        }
        grid.visit(coord);
        self.processed += 1;
        self.index += 1;

        if self.index >= grid.dims.cell_count() {
            self.state = RunState::Complete;
            self.next_cell = None;
            return false;
        }

        self.next_cell = Some(grid.coord_of(self.index));
        true
    }

    fn state(&self) -> RunState {
        self.state
    }

    fn cursor(&self) -> Option<Coord> {
        self.next_cell
    }

    fn processed(&self) -> usize {
        self.processed
    }
}

#[cfg(test)]
mod test_binary_tree {
    use super::*;
    use crate::generators::test_support::assert_spanning_tree;
    use rand::rngs::mock::StepRng;

    fn north_east_5x5() -> WallGrid {
        let mut grid = WallGrid::with_dims(5, 5);
        // first candidate every time: north where possible, else east
        let mut rng = StepRng::new(0, 0);
        let mut btree = BinaryTree::with_bias(Bias::NorthEast);
        btree.init(&mut grid, &mut rng);

        let mut steps = 1;
        while btree.step(&mut grid, &mut rng) {
            steps += 1;
        }
        assert_eq!(steps, 25);
        grid
    }

    #[test]
    fn pinned_north_east_layout() {
        let grid = north_east_5x5();

        // top row is a single corridor
        for x in 0..4 {
            assert!(grid.is_open((x, 0), Direction::East));
        }
        // every other cell opened north and nothing sideways
        for y in 1..5 {
            for x in 0..5 {
                assert!(grid.is_open((x, y), Direction::North));
                assert!(!grid.is_open((x, y), Direction::East) || (x, y) == grid.exit);
            }
        }

        let cell = grid.get_cell((2, 3));
        assert_eq!(cell.walls, [false, true, false, true]);
        let corner = grid.get_cell((4, 0));
        assert_eq!(corner.walls, [true, true, false, false]);
        assert_spanning_tree(&grid);
    }

    #[test]
    fn first_choice_source_picks_north_east() {
        let mut grid = WallGrid::with_dims(5, 5);
        let mut rng = StepRng::new(0, 0);
        let mut btree = BinaryTree::new();
        btree.init(&mut grid, &mut rng);

        assert_eq!(btree.bias(), Some(Bias::NorthEast));
        assert_eq!(btree.cursor(), Some((0, 0)));
        assert!(btree.step(&mut grid, &mut rng));
        assert_eq!(btree.cursor(), Some((1, 0)));
    }

    #[test]
    fn south_west_leaves_one_corner_closed() {
        let mut grid = WallGrid::with_dims(6, 5);
        let mut rng = StepRng::new(0, 0);
        let mut btree = BinaryTree::with_bias(Bias::SouthWest);
        btree.generate_maze(&mut grid, &mut rng);

        // bottom-left cell has neither a south nor a west neighbour
        let corner = grid.get_cell((0, 4));
        assert!(!grid.is_open((0, 4), Direction::West));
        assert!(corner.wall(Direction::South));
        assert_spanning_tree(&grid);
    }
}
