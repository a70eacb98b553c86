use thiserror::Error;

/// Rejected configuration. The algorithms themselves never fail; everything
/// that can go wrong happens while turning user input into a `MazeConfig`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown generator `{0}`")]
    UnknownGenerator(String),

    #[error("unknown solver `{0}`")]
    UnknownSolver(String),

    #[error("unknown speed `{0}`, expected slow, medium or fast")]
    UnknownSpeed(String),

    #[error("{axis} of {value} is outside {min}..={max}")]
    DimensionOutOfRange {
        axis: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
