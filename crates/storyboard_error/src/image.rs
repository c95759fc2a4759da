//! Image generation failure types.

/// Why a single image request failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ImageErrorKind {
    /// The imager service call failed
    #[display("Imager request failed: {}", _0)]
    Request(String),
    /// The call succeeded but carried no image data
    #[display("No image returned")]
    NoImageReturned,
    /// Image data could not be decoded
    #[display("Image data could not be decoded: {}", _0)]
    Decode(String),
}

/// Image error with source location tracking.
///
/// Isolated to one scene; never aborts a run.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The specific error condition
    pub kind: ImageErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
