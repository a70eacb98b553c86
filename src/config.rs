use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, Result};
use crate::generators::GeneratorKind;
use crate::solvers::SolverKind;

pub const MIN_DIM: usize = 5;
pub const MAX_DIM: usize = 50;

/// Animation cadence: how long the driver sleeps between ticks and how many
/// steps it runs per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speed {
    Slow,
    Medium,
    Fast,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Slow, Speed::Medium, Speed::Fast];

    pub fn id(self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Medium => "medium",
            Speed::Fast => "fast",
        }
    }

    pub fn tick_delay(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(120),
            Speed::Medium => Duration::from_millis(60),
            Speed::Fast => Duration::from_millis(30),
        }
    }

    pub fn steps_per_tick(self) -> usize {
        match self {
            Speed::Slow => 1,
            Speed::Medium => 2,
            Speed::Fast => 4,
        }
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed::Medium
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Speed {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Speed::ALL
            .iter()
            .copied()
            .find(|speed| speed.id() == s)
            .ok_or_else(|| ConfigError::UnknownSpeed(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    /// Pixels per cell for graphical front ends; the engine ignores it.
    pub cell_size: u32,
    pub generator: GeneratorKind,
    pub solver: SolverKind,
    pub speed: Speed,
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 24,
            height: 24,
            cell_size: 16,
            generator: GeneratorKind::default(),
            solver: SolverKind::default(),
            speed: Speed::default(),
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Rejects dimensions outside `MIN_DIM..=MAX_DIM`.
    pub fn validate(&self) -> Result<()> {
        check_dim("width", self.width)?;
        check_dim("height", self.height)
    }

    /// Same config with both dimensions pulled into range.
    pub fn clamped(&self) -> Self {
        let clamp = |value: usize| value.max(MIN_DIM).min(MAX_DIM);
        Self {
            width: clamp(self.width),
            height: clamp(self.height),
            ..self.clone()
        }
    }
}

fn check_dim(axis: &'static str, value: usize) -> Result<()> {
    if (MIN_DIM..=MAX_DIM).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::DimensionOutOfRange {
            axis,
            value,
            min: MIN_DIM,
            max: MAX_DIM,
        })
    }
}
