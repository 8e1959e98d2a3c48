//! JSON file I/O for the CLI frontend.
//!
//! Reads request documents from disk and writes reports to a file or stdout.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, TrafoError};

/// Read a file to a string.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| TrafoError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// Read and deserialize a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_file(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read a JSON document, or fall back to the type's defaults when no path
/// is given.
pub fn read_json_or_default<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    match path {
        Some(path) => read_json(path),
        None => Ok(T::default()),
    }
}

/// Write a value as pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_output<T: Serialize + ?Sized>(path: Option<&Path>, value: &T) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');

    match path {
        Some(path) => fs::write(path, text).map_err(|e| TrafoError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        }),
        None => io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .map_err(|e| TrafoError::FileWriteError {
                path: "<stdout>".to_string(),
                source: e,
            }),
    }
}
