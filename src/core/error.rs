//! Error types raised by the board core.

use thiserror::Error;

/// Input rejected by a board mutation. State is left unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The title is empty after trimming.
    #[error("Task title is required")]
    EmptyTitle,
}

/// Error returned when a column name from the page does not match a known column.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column: {0}")]
pub struct ParseColumnError(pub String);
