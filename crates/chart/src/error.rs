use geomancy_figures::FigureError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Figure(#[from] FigureError),

    #[error("Invalid index: {0}")]
    InvalidIndex(usize),

    #[error("Invalid assignment to slot {0}, can only set the Mothers (0-3)")]
    InvalidAssignment(usize),

    #[error("Invalid house type: {0}")]
    InvalidHouseType(String),

    #[error("Shield slot not found: {0}")]
    SlotNotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
