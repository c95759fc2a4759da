//! Analysis failure types.

/// Why a script analysis produced no usable scene data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AnalysisErrorKind {
    /// The analyzer service call failed
    #[display("Analyzer request failed: {}", _0)]
    Request(String),
    /// The response held no JSON object
    #[display("No JSON object in analyzer response: {}", _0)]
    MissingJson(String),
    /// The JSON did not match the expected scene schema
    #[display("Analyzer response does not match schema: {}", _0)]
    Schema(String),
}

/// Analysis error with source location tracking.
///
/// Aborts the whole run: no scenes are created.
///
/// # Examples
///
/// ```
/// use storyboard_error::{AnalysisError, AnalysisErrorKind};
///
/// let err = AnalysisError::new(AnalysisErrorKind::Schema("missing field `scenes`".into()));
/// assert!(format!("{}", err).contains("scenes"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Analysis Error: {} at line {} in {}", kind, line, file)]
pub struct AnalysisError {
    /// The specific error condition
    pub kind: AnalysisErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl AnalysisError {
    /// Create a new AnalysisError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AnalysisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
