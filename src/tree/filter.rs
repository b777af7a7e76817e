//! Child enumeration and filtering for tree generation
//!
//! A single `read_dir` per visited directory. Children are sorted by name,
//! split into directories and files, noise directories are dropped (unless
//! strict mode), and the result is returned directories-first.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::config::TreeConfig;

/// A directory child as seen by the generator.
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

impl Entry {
    fn from_dir_entry(entry: &fs::DirEntry) -> Self {
        let path = entry.path();
        Self {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: path.is_dir(),
            path,
        }
    }
}

/// Enumerate and order the immediate children of `directory`.
///
/// Returns filtered directories first, then files, each group sorted
/// lexicographically by name so output does not depend on filesystem
/// enumeration order. In dirs-only mode files are omitted entirely. A
/// failed read propagates the `io::Error` and aborts the traversal.
pub fn prepare(directory: &Path, config: &TreeConfig) -> io::Result<Vec<Entry>> {
    let mut children: Vec<fs::DirEntry> = fs::read_dir(directory)?.collect::<io::Result<_>>()?;
    children.sort_by_key(|e| e.file_name());

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for child in &children {
        let entry = Entry::from_dir_entry(child);
        if entry.is_dir {
            if !config.is_excluded(&entry.name) {
                dirs.push(entry);
            }
        } else {
            files.push(entry);
        }
    }

    if config.dirs_only {
        return Ok(dirs);
    }
    dirs.extend(files);
    Ok(dirs)
}
