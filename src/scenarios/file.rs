//! File-backed scenarios.
//!
//! A custom coloring problem is a JSON object shaped like [`ColoringScenario`]:
//!
//! ```json
//! {
//!   "name": "triangle",
//!   "graph": [[0, 1, 1], [1, 0, 1], [1, 1, 0]],
//!   "palette": ["red", "green", "blue"],
//!   "vertex_names": ["a", "b", "c"]
//! }
//! ```
//!
//! The matrix is validated while parsing, and the whole scenario before it is returned.

use std::fs;
use std::path::Path;

use crate::scenario::{ColoringScenario, SearchError};

pub fn coloring_from_file(path: &Path) -> Result<ColoringScenario, SearchError> {
    let bytes = fs::read(path).map_err(|e| SearchError::Io {
        stage: "coloring_file_read",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    coloring_from_json(&bytes).map_err(|e| match e {
        SearchError::InvalidScenario { reason } => SearchError::InvalidScenario {
            reason: format!("{}: {reason}", path.display()),
        },
        other => other,
    })
}

pub fn coloring_from_json(bytes: &[u8]) -> Result<ColoringScenario, SearchError> {
    let scn: ColoringScenario =
        serde_json::from_slice(bytes).map_err(|e| SearchError::invalid(e.to_string()))?;
    scn.validate()?;
    Ok(scn)
}
