use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Extensions recognized as renameable video files
const MEDIA_EXTENSIONS: [&str; 4] = ["webm", "mp4", "mkv", "avi"];

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

/// A candidate video file found in the target directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Full file name including extension
    pub name: String,
    /// Name without the extension
    pub stem: String,
    /// Extension with its leading dot, original case preserved
    pub extension: String,
}

impl SourceFile {
    fn from_name(name: String) -> Option<Self> {
        let path = Path::new(&name);
        let extension = path.extension()?.to_str()?;

        if !MEDIA_EXTENSIONS
            .iter()
            .any(|e| extension.eq_ignore_ascii_case(e))
        {
            return None;
        }

        let stem = path.file_stem()?.to_str()?.to_string();
        let extension = format!(".{}", extension);

        Some(Self {
            name,
            stem,
            extension,
        })
    }
}

/// Take a point-in-time snapshot of the media files directly inside
/// `target`. Subdirectories are never entered, other extensions are
/// ignored, and the result is sorted by name.
pub fn scan_files(target: &Path) -> Result<Vec<SourceFile>, ScannerError> {
    debug!(path = ?target, "Scanning directory");

    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    let read_dir = fs::read_dir(target).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(target.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    let mut files = Vec::new();

    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        if !path.is_file() {
            trace!(path = ?path, "Skipping non-file");
            continue;
        }

        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().to_string(),
            None => continue,
        };

        match SourceFile::from_name(name) {
            Some(file) => {
                debug!(name = %file.name, "Found candidate file");
                files.push(file);
            }
            None => trace!(path = ?path, "Skipping non-media extension"),
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = files.len(), "Scan complete");

    Ok(files)
}
