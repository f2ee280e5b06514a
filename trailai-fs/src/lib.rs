//! Capability-based file access for user-named TrailAI inputs.
#![forbid(unsafe_code)]

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a file for reading using ambient authority.
///
/// # Errors
///
/// Returns the underlying IO error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Whether `path` names a regular file.
///
/// A missing file or parent directory yields an error of kind
/// [`io::ErrorKind::NotFound`]; an existing non-file yields `Ok(false)`.
///
/// # Errors
///
/// Returns the IO error raised while opening the parent directory or
/// reading the entry's metadata.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} has no file name")))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|metadata| metadata.is_file())
}
