//! Input path resolution for the `-F`/`-D` CLI modes (§6).
//!
//! Grounded on `original_source/src/pvrec.cpp`'s `ProcessDirectory`, using
//! `std::fs::read_dir` in place of `boost::filesystem`.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Whether the CLI's input path names a single file or a directory of
/// files, one batch per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    File,
    Directory,
}

/// Resolve `path` under `mode` into the ordered list of files to process,
/// one per batch. For [`InputMode::Directory`], only immediate children
/// with extension `.txt` are included, sorted by file name for
/// deterministic processing order.
pub fn resolve_batches(path: &Path, mode: InputMode) -> Result<Vec<PathBuf>> {
    match mode {
        InputMode::File => Ok(vec![path.to_path_buf()]),
        InputMode::Directory => {
            let mut files: Vec<PathBuf> = std::fs::read_dir(path)?
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
                .collect();
            files.sort();
            Ok(files)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_mode_returns_the_single_path_unchanged() {
        let p = Path::new("/tmp/some_file.txt");
        let batches = resolve_batches(p, InputMode::File).unwrap();
        assert_eq!(batches, vec![p.to_path_buf()]);
    }

    #[test]
    fn directory_mode_only_picks_up_txt_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "").unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();
        std::fs::write(dir.path().join("ignore.csv"), "").unwrap();
        let batches = resolve_batches(dir.path(), InputMode::Directory).unwrap();
        let names: Vec<_> = batches
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }
}
