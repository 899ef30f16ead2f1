//! Word list I/O operations
//!
//! Input files hold one word per line; output files hold one accepted word
//! per line, generator digits concatenated, newline-terminated.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Word file errors
#[derive(Debug, Error)]
pub enum WordIoError {
    #[error("Could not open input file '{}': {source}", path.display())]
    OpenInput { path: PathBuf, source: io::Error },
    #[error("Could not open output file '{}': {source}", path.display())]
    CreateOutput { path: PathBuf, source: io::Error },
    #[error("Could not list directory '{}': {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}

/// Open a word list for buffered line reading
pub fn open_input(path: impl AsRef<Path>) -> Result<BufReader<File>, WordIoError> {
    let path = path.as_ref();
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| WordIoError::OpenInput {
            path: path.to_path_buf(),
            source,
        })
}

/// Create (or truncate) an output word list, creating parent directories
pub fn create_output(path: impl AsRef<Path>) -> Result<BufWriter<File>, WordIoError> {
    let path = path.as_ref();
    ensure_parent_dir(path)
        .and_then(|_| File::create(path))
        .map(BufWriter::new)
        .map_err(|source| WordIoError::CreateOutput {
            path: path.to_path_buf(),
            source,
        })
}

/// Write one word as a line of concatenated digits
pub fn write_word<W: Write>(writer: &mut W, word: &[u8]) -> io::Result<()> {
    let mut line = Vec::with_capacity(word.len() + 1);
    line.extend(word.iter().map(|&g| g + b'0'));
    line.push(b'\n');
    writer.write_all(&line)
}

/// List the regular files of a directory, sorted by file name
pub fn list_word_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, WordIoError> {
    let dir = dir.as_ref();
    let to_err = |source| WordIoError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(to_err)? {
        let entry = entry.map_err(to_err)?;
        if entry.file_type().map_err(to_err)?.is_file() {
            files.push(entry.path());
        }
    }

    files.sort();
    Ok(files)
}
