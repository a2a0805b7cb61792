use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// Read a markdown note addressed relative to the notes root
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    read_markdown(&relative_path.to_path(notes_root))
}

/// Read one markdown file; anything that is not a regular file is `NotFound`
pub fn read_markdown(path: &Path) -> Result<String, IoError> {
    if !path.is_file() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    log::debug!("reading {}", path.display());
    Ok(fs::read_to_string(path)?)
}

/// Collect every `.md` file below the notes root, sorted by path
pub fn scan_markdown_files(notes_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !notes_root.exists() {
        return Err(IoError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    let mut pending = vec![notes_root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if is_markdown(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    log::debug!("found {} markdown files under {}", files.len(), notes_root.display());
    Ok(files)
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidNotesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    Ok(())
}
