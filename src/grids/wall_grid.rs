use crate::grids::{Coord, Dimensions, Direction, Neighbor, Neighborhood};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// indexed by `Direction as usize`, true means impassable
    pub walls: [bool; 4],
    pub visited: bool,
    pub in_frontier: bool,
}

impl Cell {
    fn closed() -> Self {
        Self {
            walls: [true; 4],
            visited: false,
            in_frontier: false,
        }
    }

    #[inline]
    pub fn wall(&self, dir: Direction) -> bool {
        self.walls[dir as usize]
    }
}

/// Grid of walled cells. Every wall starts closed except the west side of
/// the entrance and the east side of the exit.
#[derive(Debug, Clone)]
pub struct WallGrid {
    pub dims: Dimensions,

    cells: Vec<Cell>,

    pub entrance: Coord,
    pub exit: Coord,
}

impl WallGrid {
    pub fn with_dims(width: usize, height: usize) -> Self {
        let mut grid = Self {
            cells: vec![Cell::closed(); width * height],
            dims: Dimensions { width, height },
            entrance: (0, 0),
            exit: (width.saturating_sub(1), height.saturating_sub(1)),
        };

        let (entrance, exit) = (grid.entrance, grid.exit);
        grid.cell_mut(entrance).walls[Direction::West as usize] = false;
        grid.cell_mut(exit).walls[Direction::East as usize] = false;

        grid
    }

    #[inline]
    pub fn index_of(&self, coord: Coord) -> usize {
        (self.dims.width * coord.1) + coord.0
    }

    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        (index % self.dims.width, index / self.dims.width)
    }

    #[inline]
    pub fn get_cell(&self, coord: Coord) -> &Cell {
        &self.cells[self.index_of(coord)]
    }

    #[inline]
    pub fn cell_mut(&mut self, coord: Coord) -> &mut Cell {
        let index = self.index_of(coord);
        &mut self.cells[index]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Neighbour of `coord` in `dir`, if it lies inside the grid.
    pub fn neighbor_coords_of(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        dir.offset(coord).filter(|next| self.dims.contains(*next))
    }

    pub fn neighborhood_of(&self, coord: Coord) -> Neighborhood {
        let mut neighbors = Neighborhood::new();
        for &dir in Direction::ALL.iter() {
            if let Some(next) = self.neighbor_coords_of(coord, dir) {
                neighbors.set(dir, next);
            }
        }

        neighbors
    }

    pub fn unvisited_neighbors(&self, coord: Coord) -> Vec<Neighbor> {
        self.neighborhood_of(coord)
            .filter(|(next, _)| !self.get_cell(*next).visited)
            .collect()
    }

    /// Neighbours reachable through an open wall.
    pub fn accessible_neighbors(&self, coord: Coord) -> Vec<Coord> {
        self.neighborhood_of(coord)
            .filter(|(_, dir)| self.is_open(coord, *dir))
            .map(|(next, _)| next)
            .collect()
    }

    #[inline]
    pub fn is_open(&self, coord: Coord, dir: Direction) -> bool {
        !self.get_cell(coord).wall(dir)
    }

    /// Opens the wall between `coord` and its neighbour in `dir`, on both
    /// sides. Returns the neighbour, or `None` if `dir` leaves the grid.
    pub fn open_wall(&mut self, coord: Coord, dir: Direction) -> Option<Coord> {
        let next = self.neighbor_coords_of(coord, dir)?;
        self.cell_mut(coord).walls[dir as usize] = false;
        self.cell_mut(next).walls[(-dir) as usize] = false;

        Some(next)
    }

    pub fn clear_wall_between(&mut self, one: Coord, two: Coord) {
        if let Some(dir) = Direction::between(one, two) {
            self.open_wall(one, dir);
        }
    }

    pub fn add_wall_between(&mut self, one: Coord, two: Coord) {
        if let Some(dir) = Direction::between(one, two) {
            if self.dims.contains(one) && self.dims.contains(two) {
                self.cell_mut(one).walls[dir as usize] = true;
                self.cell_mut(two).walls[(-dir) as usize] = true;
            }
        }
    }

    pub fn visit(&mut self, coord: Coord) {
        let cell = self.cell_mut(coord);
        cell.visited = true;
        cell.in_frontier = false;
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }

    /// Number of opened internal walls, each shared wall counted once.
    pub fn open_passages(&self) -> usize {
        let mut count = 0;
        for index in 0..self.cells.len() {
            let coord = self.coord_of(index);
            for &dir in [Direction::East, Direction::South].iter() {
                if self.neighbor_coords_of(coord, dir).is_some() && self.is_open(coord, dir) {
                    count += 1;
                }
            }
        }

        count
    }
}
