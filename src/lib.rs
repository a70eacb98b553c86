//! Step-driven maze generation and solving.
//!
//! A [`MazeEngine`](engine::MazeEngine) owns a [`WallGrid`](grids::wall_grid::WallGrid),
//! the active generator and the active solver. A driver calls `step()` at
//! whatever cadence it likes and reads the grid back between calls.

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod generators;
pub mod grids;
pub mod renderer;
pub mod solvers;

/// Lifecycle shared by every generator and solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Uninitialized,
    Running,
    Complete,
}

impl Default for RunState {
    fn default() -> Self {
        RunState::Uninitialized
    }
}
