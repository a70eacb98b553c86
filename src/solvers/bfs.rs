use std::collections::VecDeque;

use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;

/// Breadth-first search over open walls, advanced one dequeued cell at a
/// time. Flood fill runs it over the whole grid, dead-end filling over the
/// cells it left unfilled.
#[derive(Debug, Clone)]
pub struct Bfs {
    queue: VecDeque<Coord>,
    distances: Vec<Option<usize>>,
    parents: Vec<Option<Coord>>,
    expanded: Vec<bool>,
    width: usize,
}

impl Bfs {
    pub fn new(grid: &WallGrid, start: Coord) -> Self {
        let cells = grid.dims.cell_count();
        let mut bfs = Self {
            queue: VecDeque::new(),
            distances: vec![None; cells],
            parents: vec![None; cells],
            expanded: vec![false; cells],
            width: grid.dims.width,
        };

        bfs.queue.push_back(start);
        let index = bfs.index_of(start);
        bfs.distances[index] = Some(0);
        bfs
    }

    #[inline]
    fn index_of(&self, coord: Coord) -> usize {
        coord.1 * self.width + coord.0
    }

    /// Dequeues one cell and discovers its open, passable neighbours.
    /// Returns the dequeued cell, `None` once the queue has run dry.
    pub fn expand<F>(&mut self, grid: &WallGrid, passable: F) -> Option<Coord>
    where
        F: Fn(Coord) -> bool,
    {
        let coord = self.queue.pop_front()?;
        let index = self.index_of(coord);
        self.expanded[index] = true;
        let distance = self.distances[index].unwrap_or(0) + 1;

        for next in grid.accessible_neighbors(coord) {
            let next_index = self.index_of(next);
            if self.distances[next_index].is_none() && passable(next) {
                self.distances[next_index] = Some(distance);
                self.parents[next_index] = Some(coord);
                self.queue.push_back(next);
            }
        }

        Some(coord)
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    /// Hop count from the start, `None` while unreached.
    pub fn distance(&self, coord: Coord) -> Option<usize> {
        self.distances[self.index_of(coord)]
    }

    pub fn distances(&self) -> &[Option<usize>] {
        &self.distances
    }

    pub fn is_expanded(&self, coord: Coord) -> bool {
        self.expanded[self.index_of(coord)]
    }

    /// Discovered but not yet dequeued.
    pub fn is_queued(&self, coord: Coord) -> bool {
        self.distance(coord).is_some() && !self.is_expanded(coord)
    }

    /// Start to `goal` by parent links, empty if `goal` was never reached.
    pub fn path_to(&self, goal: Coord) -> Vec<Coord> {
        if self.distance(goal).is_none() {
            return Vec::new();
        }

        let mut path = vec![goal];
        let mut cursor = goal;
        while let Some(parent) = self.parents[self.index_of(cursor)] {
            path.push(parent);
            cursor = parent;
        }
        path.reverse();
        path
    }
}
