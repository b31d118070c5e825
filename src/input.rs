//! Reading source documents from files and streams.

use std::io::Read;

use camino::Utf8Path;

use crate::error::ResourceError;
use crate::fs::read_utf8_file;
use crate::source::Source;

/// Parses a JSON source document.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidSource`] when `text` is not a JSON object
/// with the expected field types.
pub fn parse_source(text: &str) -> Result<Source, ResourceError> {
    serde_json::from_str(text).map_err(|error| ResourceError::InvalidSource {
        message: error.to_string(),
    })
}

/// Reads and parses a JSON source document from `reader`.
///
/// # Errors
///
/// Returns [`ResourceError::Io`] when the stream cannot be read and
/// [`ResourceError::InvalidSource`] when it does not parse.
pub fn read_source<R: Read>(mut reader: R) -> Result<Source, ResourceError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|error| ResourceError::Io {
            message: format!("failed to read source: {error}"),
        })?;
    parse_source(&text)
}

/// Reads and parses a JSON source document from the file at `path`.
///
/// # Errors
///
/// Returns [`ResourceError::Io`] when the file cannot be read and
/// [`ResourceError::InvalidSource`] when it does not parse.
pub fn read_source_file(path: &Utf8Path) -> Result<Source, ResourceError> {
    let text = read_utf8_file(path).map_err(|error| ResourceError::Io {
        message: format!("failed to read source file '{path}': {error}"),
    })?;
    parse_source(&text)
}
