use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr};

/// Creates the directory and any missing parents
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        log::debug!("creating directory {}", path.display());
    }

    fs::create_dir_all(path)
        .wrap_err_with(|| format!("Couldn't create directory {}", path.display()))
}

/// Writes bytes to the given path, replacing any existing file
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).wrap_err_with(|| format!("Failed to write {}", path.display()))
}
