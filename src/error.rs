//! Centralized error types for the maze tooling.
//!
//! This module defines all error and warning types used throughout the crate,
//! providing a consistent error handling approach.

use std::io;

use crate::map::model::CellId;

/// Error type for operations that can actually fail, such as loading a
/// summary from disk. Parsing itself never fails; see [`ParseWarning`].
#[derive(thiserror::Error, Debug)]
pub enum MazeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for fallible maze operations.
pub type MazeResult<T> = Result<T, MazeError>;

/// One diagnostic recovered while scanning a maze summary.
///
/// Warnings never abort a parse. Each one carries the 1-based source line it
/// refers to, so callers can point back at the offending input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    #[error("line {line}: header coordinates are not integers: {content:?}")]
    MalformedHeader { line: usize, content: String },

    #[error("line {line}: walls entry has no braced list: {content:?}")]
    MalformedWalls { line: usize, content: String },

    #[error("line {line}: wall entry is not a key/value pair: {entry:?}")]
    MalformedWallEntry { line: usize, entry: String },

    #[error("line {line}: unknown wall key {key:?}")]
    UnknownWallKey { line: usize, key: String },

    #[error("line {line}: wall {key:?} has a non-boolean value {value:?}")]
    MalformedWallValue { line: usize, key: String, value: String },

    #[error("line {line}: cell {id} appears more than once")]
    DuplicateCell { line: usize, id: CellId },

    #[error("line {line}: cell {id} has no detail lines")]
    BareCell { line: usize, id: CellId },
}

impl ParseWarning {
    /// The 1-based source line the warning refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseWarning::MalformedHeader { line, .. }
            | ParseWarning::MalformedWalls { line, .. }
            | ParseWarning::MalformedWallEntry { line, .. }
            | ParseWarning::UnknownWallKey { line, .. }
            | ParseWarning::MalformedWallValue { line, .. }
            | ParseWarning::DuplicateCell { line, .. }
            | ParseWarning::BareCell { line, .. } => *line,
        }
    }
}
