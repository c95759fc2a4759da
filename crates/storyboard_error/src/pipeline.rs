//! Orchestrator command errors.

/// Conditions under which the orchestrator refuses a command.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// A generation run is already in progress
    #[display("A generation run is already in progress")]
    RunInProgress,
    /// Regeneration requested before any successful analysis
    #[display("No analysis result available for regeneration")]
    NoAnalysis,
    /// No scene at the given index
    #[display("No scene at index {}", _0)]
    SceneIndexOutOfRange(usize),
    /// No scene with the given id
    #[display("No scene with id {}", _0)]
    SceneNotFound(String),
}

/// Pipeline error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
