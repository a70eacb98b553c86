use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;
use crate::solvers::node::{Membership, NodeArena, NodeId, PathNode};
use crate::solvers::{manhattan, SearchMark, Solver};
use crate::RunState;

/// Which score orders the open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// f = g + h
    AStar,
    /// f = g
    Dijkstra,
    /// f = h, nodes are never re-parented
    Greedy,
}

impl Strategy {
    fn score(self, g: usize, h: usize) -> usize {
        match self {
            Strategy::AStar => g + h,
            Strategy::Dijkstra => g,
            Strategy::Greedy => h,
        }
    }

    fn heuristic(self, coord: Coord, goal: Coord) -> usize {
        match self {
            Strategy::Dijkstra => 0,
            Strategy::AStar | Strategy::Greedy => manhattan(coord, goal),
        }
    }

    fn relaxes(self) -> bool {
        self != Strategy::Greedy
    }
}

/// Best-first search over open passages. The open list keeps insertion
/// order so equal scores resolve to the node discovered first.
pub struct BestFirst {
    strategy: Strategy,
    arena: NodeArena,
    open: Vec<NodeId>,
    goal: Coord,
    current: Option<NodeId>,
    solution: Vec<Coord>,
    processed: usize,
    state: RunState,
}

impl BestFirst {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            arena: NodeArena::new(),
            open: Vec::new(),
            goal: (0, 0),
            current: None,
            solution: Vec::new(),
            processed: 0,
            state: RunState::Uninitialized,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    fn lowest_open(&self) -> Option<usize> {
        let mut lowest: Option<(usize, usize)> = None;
        for (position, &id) in self.open.iter().enumerate() {
            let f = self.arena.get(id).f;
            match lowest {
                Some((_, best)) if best <= f => {}
                _ => lowest = Some((position, f)),
            }
        }
        lowest.map(|(position, _)| position)
    }

    fn relax(&mut self, grid: &WallGrid, parent: NodeId) {
        let (coord, g) = {
            let node = self.arena.get(parent);
            (node.coord, node.g + 1)
        };

        for next in grid.accessible_neighbors(coord) {
            match self.arena.lookup(next) {
                Some((_, Membership::Closed)) => {}
                Some((id, Membership::Open)) => {
                    if !self.strategy.relaxes() {
                        continue;
                    }
                    let strategy = self.strategy;
                    let node = self.arena.get_mut(id);
                    if g < node.g {
                        node.g = g;
                        node.parent = Some(parent);
                        node.f = strategy.score(node.g, node.h);
                    }
                }
                None => {
                    let h = self.strategy.heuristic(next, self.goal);
                    let id = self.arena.insert(PathNode {
                        coord: next,
                        parent: Some(parent),
                        g,
                        h,
                        f: self.strategy.score(g, h),
                    });
                    self.open.push(id);
                }
            }
        }
    }

    fn finish(&mut self) -> bool {
        self.state = RunState::Complete;
        log::trace!(
            "{:?} finished after {} expansions, path of {}",
            self.strategy,
            self.processed,
            self.solution.len()
        );
        false
    }
}

impl Solver for BestFirst {
    fn init(&mut self, grid: &WallGrid) {
        self.arena = NodeArena::new();
        self.open.clear();
        self.solution.clear();
        self.processed = 0;
        self.goal = grid.exit;

        let start = grid.entrance;
        let h = self.strategy.heuristic(start, self.goal);
        let id = self.arena.insert(PathNode {
            coord: start,
            parent: None,
            g: 0,
            h,
            f: self.strategy.score(0, h),
        });
        self.open.push(id);
        self.current = None;
        self.state = RunState::Running;
    }

    fn step(&mut self, grid: &WallGrid) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        let position = match self.lowest_open() {
            Some(position) => position,
            None => return self.finish(),
        };
        let id = self.open[position];
        self.current = Some(id);

        if self.arena.get(id).coord == self.goal {
            self.solution = self.arena.path_to(id);
            return self.finish();
        }

        self.open.remove(position);
        self.arena.close(id);
        self.processed += 1;
        self.relax(grid, id);

        if self.open.is_empty() {
            return self.finish();
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
        self.current.map(|id| self.arena.get(id).coord)
    }

    fn processed(&self) -> usize {
        self.processed
    }

    fn mark(&self, coord: Coord) -> Option<SearchMark> {
        self.arena.lookup(coord).map(|(_, membership)| match membership {
            Membership::Open => SearchMark::Open,
            Membership::Closed => SearchMark::Closed,
        })
    }
}
