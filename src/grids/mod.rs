pub mod wall_grid;

/// Cell coordinates as `(x, y)`, `y` grows downward.
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Steps one cell in this direction, `None` when that would leave
    /// the top or left edge. The right and bottom edges are checked by the
    /// grid.
    pub fn offset(self, coord: Coord) -> Option<Coord> {
        let (x, y) = coord;
        match self {
            Direction::North => y.checked_sub(1).map(|y| (x, y)),
            Direction::East => Some((x + 1, y)),
            Direction::South => Some((x, y + 1)),
            Direction::West => x.checked_sub(1).map(|x| (x, y)),
        }
    }

    /// Direction pointing from `from` to an adjacent `to`.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .find(|dir| dir.offset(from) == Some(to))
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            3 => Direction::West,
            _ => unreachable!(),
        }
    }
}

pub type Neighbor = (Coord, Direction);

/// The in-bounds neighbours of a cell, yielded north, east, south, west.
/// Each item carries the direction from the centre cell, its negation is
/// the wall on the neighbour's side.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub north: Option<Coord>,
    pub east: Option<Coord>,
    pub south: Option<Coord>,
    pub west: Option<Coord>,

    counter: usize,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            north: None,
            east: None,
            south: None,
            west: None,
            counter: 0,
        }
    }

    pub fn set(&mut self, dir: Direction, coord: Coord) {
        match dir {
            Direction::North => self.north = Some(coord),
            Direction::East => self.east = Some(coord),
            Direction::South => self.south = Some(coord),
            Direction::West => self.west = Some(coord),
        }
    }
}

impl Iterator for Neighborhood {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Self::Item> {
        while self.counter < 4 {
            let dir = Direction::from(self.counter);
            self.counter += 1;

            let slot = match dir {
                Direction::North => self.north,
                Direction::East => self.east,
                Direction::South => self.south,
                Direction::West => self.west,
            };
            if let Some(coord) = slot {
                return Some((coord, dir));
            }
        }

        None
    }
}

/// What a renderer should draw for a cell, highest priority first.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CellKind {
    Entrance,
    Exit,
    Path,
    Cursor,
    Open,
    Closed,
    Filled,
    Visited,
    Frontier,
    Unvisited,
}

#[cfg(test)]
mod test_grids {
    use super::*;

    #[test]
    fn neighborhood_yields_in_compass_order() {
        let mut hood = Neighborhood::new();
        hood.set(Direction::West, (0, 1));
        hood.set(Direction::North, (1, 0));
        hood.set(Direction::South, (1, 2));

        let dirs: Vec<Direction> = hood.map(|(_, dir)| dir).collect();
        assert_eq!(
            dirs,
            vec![Direction::North, Direction::South, Direction::West]
        );
    }

    #[test]
    fn offsets_stop_at_top_left_edges() {
        assert_eq!(Direction::North.offset((3, 0)), None);
        assert_eq!(Direction::West.offset((0, 3)), None);
        assert_eq!(Direction::East.offset((3, 0)), Some((4, 0)));
        assert_eq!(Direction::between((2, 2), (2, 1)), Some(Direction::North));
        assert_eq!(Direction::between((2, 2), (4, 2)), None);
        assert_eq!(-Direction::East, Direction::West);
    }
}
