use std::path::{Path, PathBuf};

use crate::input::InputError;

/// Regular files directly under `dir`, sorted lexicographically by name.
///
/// Subdirectories are excluded. The sort is the ordering guarantee for every
/// downstream consumer that starts from a directory instead of an explicit
/// file list.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    if !dir.is_dir() {
        return Err(InputError::MissingDirectory(dir.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/locate.rs"]
mod tests;
