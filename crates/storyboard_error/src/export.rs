//! Export bundle errors.

/// Export failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExportErrorKind {
    /// Writing a bundle file failed
    #[display("Failed to write {}: {}", path, message)]
    Write {
        /// Destination path
        path: String,
        /// Underlying error message
        message: String,
    },
    /// Building the zip archive failed
    #[display("Archive error: {}", _0)]
    Archive(String),
    /// Scene image data could not be decoded
    #[display("Scene {} image could not be decoded: {}", scene, message)]
    ImageData {
        /// 1-based scene number
        scene: usize,
        /// Underlying error message
        message: String,
    },
}

/// Export error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// The specific error condition
    pub kind: ExportErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ExportError {
    /// Create a new ExportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
