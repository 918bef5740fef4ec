/*!
 * Error types for the quillgate library.
 *
 * This module contains custom error types for each part of the quality
 * pipeline, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors produced by an external stage validator.
#[derive(Error, Debug)]
pub enum StageError {
    /// The validator failed while analyzing content
    #[error("validator execution failed: {0}")]
    ExecutionFailed(String),

    /// The validator failed while rewriting content
    #[error("refinement failed: {0}")]
    RefinementFailed(String),
}

/// Errors that can occur during score aggregation.
#[derive(Error, Debug)]
pub enum ScoringError {
    /// No stage results were supplied
    #[error("cannot score an empty result set")]
    EmptyResults,

    /// One or more required dimensions are absent from the results
    #[error("missing required dimensions: {}", .0.join(", "))]
    MissingDimensions(Vec<String>),

    /// A stage reported a score outside the valid range
    #[error("stage '{stage}' reported score {score} outside the 0-100 range")]
    InvalidScore {
        /// Stage that produced the score
        stage: String,
        /// The out-of-range value
        score: f64,
    },
}

/// Errors that can occur during pipeline execution.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The pipeline was constructed without any validators
    #[error("pipeline requires at least one validator")]
    NoValidators,

    /// The content to validate was empty
    #[error("content must be a non-empty string")]
    EmptyContent,

    /// A stage failed during execution; the whole run is aborted
    #[error("stage '{stage}' failed: {message}")]
    StageExecution {
        /// Stage that failed
        stage: String,
        /// Message from the underlying validator error
        message: String,
    },
}

/// Errors that can occur during content approval.
#[derive(Error, Debug)]
pub enum ApprovalError {
    /// No stage results were supplied
    #[error("cannot approve an empty result set")]
    EmptyResults,

    /// Scoring the results failed
    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),
}

/// Errors that can occur during automated refinement.
#[derive(Error, Debug)]
pub enum RefinementError {
    /// The content to refine was empty
    #[error("content must be a non-empty string")]
    EmptyContent,

    /// The iteration bound was outside the supported range
    #[error("iteration bound {given} outside the 1-10 range")]
    InvalidIterationBound {
        /// The requested bound
        given: u32,
    },

    /// No issues were supplied and no validators exist to discover any
    #[error("no issues supplied and no validators available to discover them")]
    NoIssueSource,
}

/// Main library error type that wraps all other errors.
#[derive(Error, Debug)]
pub enum QualityError {
    /// Error from a stage validator
    #[error("stage error: {0}")]
    Stage(#[from] StageError),

    /// Error from score aggregation
    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),

    /// Error from pipeline execution
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Error from content approval
    #[error("approval error: {0}")]
    Approval(#[from] ApprovalError),

    /// Error from automated refinement
    #[error("refinement error: {0}")]
    Refinement(#[from] RefinementError),

    /// Any other error
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for QualityError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
