//! Plain-text note files
//!
//! Notes are stored as UTF-8 `.txt` files. Reads are validated first so the
//! user gets a specific reason (missing, directory, binary, too large) instead
//! of a raw I/O message.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Maximum note size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Extension accepted by the open/save pickers
pub const NOTE_EXTENSION: &str = "txt";

/// Errors from reading or writing a note file
#[derive(Debug, Clone, PartialEq)]
pub enum FileError {
    /// File does not exist
    NotFound,
    /// Permission denied
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// File contains null bytes or is not valid UTF-8
    NotPlainText,
    /// Extension other than `.txt`
    NotNoteFile,
    /// File exceeds size limit
    TooLarge { size_mb: f64 },
    /// Other I/O error
    Io(String),
}

impl FileError {
    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", filename),
            Self::PermissionDenied => format!("Permission denied: {}", filename),
            Self::IsDirectory => format!("Cannot open directory: {}", filename),
            Self::NotPlainText => format!("Not a plain text file: {}", filename),
            Self::NotNoteFile => format!("Only .txt notes can be opened: {}", filename),
            Self::TooLarge { size_mb } => {
                format!(
                    "{} is too large ({:.1} MB, max {} MB)",
                    filename,
                    size_mb,
                    MAX_FILE_SIZE / (1024 * 1024)
                )
            }
            Self::Io(msg) => format!("Error accessing {}: {}", filename, msg),
        }
    }

    fn from_io(e: &std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            std::io::ErrorKind::InvalidData => Self::NotPlainText,
            _ => Self::Io(e.to_string()),
        }
    }
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::NotPlainText => write!(f, "not a plain text file"),
            Self::NotNoteFile => write!(f, "not a .txt file"),
            Self::TooLarge { size_mb } => write!(f, "file too large ({:.1} MB)", size_mb),
            Self::Io(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FileError {}

/// Whether the open/save pickers accept this path
pub fn is_note_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(NOTE_EXTENSION))
}

/// Check that `path` is an existing regular file under the size limit
pub fn validate_file_for_opening(path: &Path) -> Result<(), FileError> {
    let metadata = fs::metadata(path).map_err(|e| FileError::from_io(&e))?;

    if metadata.is_dir() {
        return Err(FileError::IsDirectory);
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(FileError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Scan the first 8KB for null bytes
///
/// Returns `false` on any read error; the actual read reports it properly.
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

/// Read a whole note into memory
pub fn read_text_file(path: &Path) -> Result<String, FileError> {
    validate_file_for_opening(path)?;
    if is_likely_binary(path) {
        return Err(FileError::NotPlainText);
    }
    let content = fs::read_to_string(path).map_err(|e| FileError::from_io(&e))?;
    tracing::info!("Read {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

/// Replace the contents of `path` with `content`
pub fn write_text_file(path: &Path, content: &str) -> Result<(), FileError> {
    if path.is_dir() {
        return Err(FileError::IsDirectory);
    }
    fs::write(path, content).map_err(|e| FileError::from_io(&e))?;
    tracing::info!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

/// Get the filename from a path for labels and error messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
