use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::Rendered;

/// Write a rendered export into `dir` atomically and return its path.
///
/// Creates the directory if it doesn't exist. An existing file with the
/// same name is replaced.
pub fn write_export(dir: &Path, rendered: &Rendered) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory at {}", dir.display()))?;
    }

    let path = dir.join(&rendered.file_name);

    let mut file = AtomicWriteFile::open(&path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    file.write_all(rendered.contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;

    Ok(path)
}
