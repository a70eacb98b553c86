use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::MazeConfig;
use crate::generators::{new_generator, Generator, GeneratorKind};
use crate::grids::wall_grid::WallGrid;
use crate::grids::{CellKind, Coord};
use crate::solvers::{new_solver, SearchMark, Solver, SolverKind};
use crate::RunState;

/// Which algorithm `step()` advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Generating,
    Solving,
}

/// Owns the grid, the random source and the active algorithms. Front ends
/// drive it with `step()` and read everything else back between calls.
pub struct MazeEngine {
    grid: WallGrid,
    rng: Box<dyn RngCore>,
    generator_kind: GeneratorKind,
    solver_kind: SolverKind,
    generator: Box<dyn Generator>,
    solver: Option<Box<dyn Solver>>,
    mode: Mode,
    steps: u64,
}

impl MazeEngine {
    pub fn new(config: &MazeConfig, rng: Box<dyn RngCore>) -> Self {
        let mut engine = Self {
            grid: WallGrid::with_dims(config.width, config.height),
            rng,
            generator_kind: config.generator,
            solver_kind: config.solver,
            generator: new_generator(config.generator),
            solver: None,
            mode: Mode::Generating,
            steps: 0,
        };
        engine.reset(
            config.width,
            config.height,
            config.generator,
            config.solver,
        );
        engine
    }

    /// Engine backed by a `StdRng`, seeded from the config when it carries a
    /// seed and from the OS otherwise.
    pub fn seeded(config: &MazeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, Box::new(rng))
    }

    /// Fresh closed grid and a freshly initialised generator. Any solve in
    /// progress is dropped.
    pub fn reset(
        &mut self,
        width: usize,
        height: usize,
        generator: GeneratorKind,
        solver: SolverKind,
    ) {
        self.grid = WallGrid::with_dims(width, height);
        self.generator_kind = generator;
        self.solver_kind = solver;
        self.solver = None;
        self.mode = Mode::Generating;
        self.steps = 0;

        self.generator = new_generator(generator);
        self.generator.init(&mut self.grid, &mut *self.rng);
        log::info!(
            "reset to {}x{} with {} then {}",
            width,
            height,
            generator.name(),
            solver.name()
        );
    }

    /// Advances the active algorithm by one unit of work. Returns whether
    /// it has more to do.
    pub fn step(&mut self) -> bool {
        match self.mode {
            Mode::Generating => {
                if self.generator.state() != RunState::Running {
                    return false;
                }
                self.steps += 1;
                let more = self.generator.step(&mut self.grid, &mut *self.rng);
                if !more {
                    log::info!(
                        "{} finished in {} steps, {} passages",
                        self.generator_kind.name(),
                        self.steps,
                        self.grid.open_passages()
                    );
                }
                more
            }
            Mode::Solving => {
                let solver = match self.solver.as_mut() {
                    Some(solver) if solver.state() == RunState::Running => solver,
                    _ => return false,
                };
                self.steps += 1;
                let more = solver.step(&self.grid);
                if !more {
                    let path = solver.solution().len();
                    if path == 0 {
                        log::info!("{} found no path", self.solver_kind.name());
                    } else {
                        log::info!(
                            "{} found a path of {} cells after {} expansions",
                            self.solver_kind.name(),
                            path,
                            solver.processed()
                        );
                    }
                }
                more
            }
        }
    }

    /// Whether the algorithm of the current mode has finished.
    pub fn is_complete(&self) -> bool {
        match self.mode {
            Mode::Generating => self.generator.is_done(),
            Mode::Solving => self.solver.as_ref().map_or(false, |s| s.is_done()),
        }
    }

    /// Switches to solving with the configured solver, restarting any
    /// earlier solve. The maze may still be half built; solvers then simply
    /// report no path.
    pub fn start_solving(&mut self) {
        if !self.generator.is_done() {
            log::debug!("solving a maze that is still being generated");
        }
        let mut solver = new_solver(self.solver_kind);
        solver.init(&self.grid);
        self.solver = Some(solver);
        self.mode = Mode::Solving;
        self.steps = 0;
        log::debug!("solving with {}", self.solver_kind.name());
    }

    /// Picks the solver for the next solve. A solve already under way is
    /// restarted with the new algorithm.
    pub fn set_solver(&mut self, kind: SolverKind) {
        self.solver_kind = kind;
        if self.mode == Mode::Solving {
            self.start_solving();
        }
    }

    pub fn solution_path(&self) -> &[Coord] {
        match &self.solver {
            Some(solver) => solver.solution(),
            None => &[],
        }
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn generator_kind(&self) -> GeneratorKind {
        self.generator_kind
    }

    pub fn solver_kind(&self) -> SolverKind {
        self.solver_kind
    }

    pub fn cursor(&self) -> Option<Coord> {
        match self.mode {
            Mode::Generating => self.generator.cursor(),
            Mode::Solving => self.solver.as_ref().and_then(|s| s.cursor()),
        }
    }

    pub fn cells_processed(&self) -> usize {
        match self.mode {
            Mode::Generating => self.generator.processed(),
            Mode::Solving => self.solver.as_ref().map_or(0, |s| s.processed()),
        }
    }

    /// Steps that did work since the last reset or mode switch.
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Share of cells visited while generating, or expanded while solving,
    /// as a percentage.
    pub fn progress(&self) -> f32 {
        if self.is_complete() {
            return 100.0;
        }
        let total = self.grid.dims.cell_count().max(1) as f32;
        let done = match self.mode {
            Mode::Generating => self.grid.visited_count(),
            Mode::Solving => self.cells_processed(),
        };
        (done as f32 * 100.0 / total).min(100.0)
    }

    pub fn cell_kind(&self, coord: Coord) -> CellKind {
        if coord == self.grid.entrance {
            return CellKind::Entrance;
        }
        if coord == self.grid.exit {
            return CellKind::Exit;
        }
        if self.solution_path().contains(&coord) {
            return CellKind::Path;
        }
        if self.cursor() == Some(coord) {
            return CellKind::Cursor;
        }

        let mark = match (self.mode, &self.solver) {
            (Mode::Solving, Some(solver)) => solver.mark(coord),
            _ => None,
        };
        match mark {
            Some(SearchMark::Open) => CellKind::Open,
            Some(SearchMark::Closed) => CellKind::Closed,
            Some(SearchMark::Filled) => CellKind::Filled,
            None => {
                let cell = self.grid.get_cell(coord);
                if cell.visited {
                    CellKind::Visited
                } else if cell.in_frontier {
                    CellKind::Frontier
                } else {
                    CellKind::Unvisited
                }
            }
        }
    }
}
