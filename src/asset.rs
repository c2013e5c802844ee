//! Loading of maze summaries.
//!
//! The parser itself never touches the filesystem; it is handed an in-memory
//! string. This module is the thin loader that produces one, either from a
//! file on disk or from the sample bundled into the binary.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::constants::SAMPLE_SUMMARY;
use crate::error::MazeResult;

/// Returns the raw text of a maze summary.
///
/// With a path, the file is read from disk; without one, the bundled sample
/// summary is returned without allocating.
pub fn load_summary(path: Option<&Path>) -> MazeResult<Cow<'static, str>> {
    match path {
        Some(path) => Ok(Cow::Owned(fs::read_to_string(path)?)),
        None => Ok(Cow::Borrowed(SAMPLE_SUMMARY)),
    }
}
