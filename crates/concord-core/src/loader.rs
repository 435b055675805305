//! Input document loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{error::ConcordError, Result};

/// Reads a whole input document as UTF-8 text, unchanged.
///
/// # Errors
///
/// [`ConcordError::Io`] carrying the path if the file is missing,
/// unreadable, or not valid UTF-8.
pub fn load_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConcordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded {} bytes from {}", text.len(), path.display());
    Ok(text)
}
