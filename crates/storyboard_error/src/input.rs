//! Input validation errors (rejected before any remote call).

/// Reasons a generation request is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InputErrorKind {
    /// Script text is empty or whitespace only
    #[display("Script text is empty")]
    EmptyScript,
    /// A reference image has a non-image MIME type
    #[display("Unsupported reference image type: {}", _0)]
    UnsupportedImage(String),
    /// A `data:` URL could not be parsed
    #[display("Malformed data URL: {}", _0)]
    MalformedDataUrl(String),
    /// Base64 payload could not be decoded
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// A referenced file could not be read
    #[display("Failed to read {}: {}", path, message)]
    FileRead {
        /// Path that failed
        path: String,
        /// Underlying error message
        message: String,
    },
    /// Unknown style preset id
    #[display("Unknown style preset: {}", _0)]
    UnknownPreset(String),
}

/// Input error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{InputError, InputErrorKind};
///
/// let err = InputError::new(InputErrorKind::EmptyScript);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Input Error: {} at line {} in {}", kind, line, file)]
pub struct InputError {
    /// The specific error condition
    pub kind: InputErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl InputError {
    /// Create a new InputError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
