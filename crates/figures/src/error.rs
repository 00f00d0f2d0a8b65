use thiserror::Error;

/// Result type for figure lookups
pub type Result<T> = std::result::Result<T, FigureError>;

/// Errors raised by the figure catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FigureError {
    /// No figure matches the given name or flags
    #[error("Figure not found: {0}")]
    NotFound(String),

    /// Line index outside fire/air/water/earth
    #[error("Invalid line index: {0} (expected 0-3)")]
    InvalidLine(usize),
}

impl FigureError {
    /// Create a not-found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
