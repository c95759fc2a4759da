//! Top-level error wrapper types.

use crate::{
    AnalysisError, BuilderError, ConfigError, ExportError, GeminiError, ImageError, InputError,
    PipelineError,
};

/// Every error condition in the storyboard workspace.
///
/// # Examples
///
/// ```
/// use storyboard_error::{ImageError, ImageErrorKind, StoryboardError};
///
/// let err: StoryboardError = ImageError::new(ImageErrorKind::NoImageReturned).into();
/// assert!(err.is_image_failure());
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryboardErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Gemini transport error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Rejected input
    #[from(InputError)]
    Input(InputError),
    /// Script analysis failure
    #[from(AnalysisError)]
    Analysis(AnalysisError),
    /// Single image failure
    #[from(ImageError)]
    Image(ImageError),
    /// Orchestrator command refused
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Export failure
    #[from(ExportError)]
    Export(ExportError),
}

/// Storyboard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyboard_error::{StoryboardError, StoryboardResult, ConfigError};
///
/// fn might_fail() -> StoryboardResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyboard Error: {}", _0)]
pub struct StoryboardError(Box<StoryboardErrorKind>);

impl StoryboardError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryboardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryboardErrorKind {
        &self.0
    }

    /// True when the run was rejected before any remote call.
    pub fn is_input_invalid(&self) -> bool {
        matches!(self.kind(), StoryboardErrorKind::Input(_))
    }

    /// True when script analysis failed and no scenes were produced.
    pub fn is_analysis_failure(&self) -> bool {
        matches!(self.kind(), StoryboardErrorKind::Analysis(_))
    }

    /// True when a single image request failed.
    pub fn is_image_failure(&self) -> bool {
        matches!(self.kind(), StoryboardErrorKind::Image(_))
    }
}

// Generic From implementation for any type that converts to StoryboardErrorKind
impl<T> From<T> for StoryboardError
where
    T: Into<StoryboardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for storyboard operations.
pub type StoryboardResult<T> = std::result::Result<T, StoryboardError>;
