//! Reading captured input and writing finished documents.

use crate::core::error::{GitLatexError, Result};
use std::io::Read;
use std::path::Path;

/// Path that selects standard input for `--input`
pub const STDIN_PATH: &str = "-";

/// Read captured git output from a file, or from stdin when `path` is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        log::debug!("Reading input from stdin");
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .map_err(|e| GitLatexError::input_read_failed(path, e))?;
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }

    log::debug!("Reading input from {}", path.display());
    let bytes = std::fs::read(path).map_err(|e| GitLatexError::input_read_failed(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write `content` to `path`, creating missing parent directories
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| GitLatexError::output_directory_creation_failed(parent, e))?;
    }

    std::fs::write(path, content).map_err(|e| GitLatexError::output_write_failed(path, e))?;
    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
