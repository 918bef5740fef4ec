/*!
 * # Quillgate - Content Quality Gate
 *
 * A Rust library for validating, scoring, refining, and approving
 * AI-generated content before publication.
 *
 * ## Features
 *
 * - Sequential multi-stage validation over pluggable quality checks
 * - Weighted scoring across six quality dimensions with letter grading
 * - Iterative refinement with convergence detection
 * - Approval gating with critical-dimension overrides and batch support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `content`: Shared types (requirements, dimensions, stage results)
 * - `validators`: The stage validator capability contract and test mocks
 * - `scoring`: Weighted quality score aggregation and recommendations
 * - `pipeline`: Sequential fail-fast validation with inline refinement
 * - `refinement`: Multi-pass automated content rewriting
 * - `approval`: Publish/reject/pending decisions and batch processing
 * - `errors`: Custom error types for the library
 *
 * Data flows: stage validators produce `StageResult`s; the scorer
 * aggregates them into a `QualityScore`; the approval system turns that
 * into an `ApprovalResult`. The pipeline and refinement engine drive the
 * validators over evolving content drafts.
 *
 * The core is single-threaded cooperative async: validators are awaited
 * one at a time so each stage sees the previous stage's refined output.
 * Independent calls are safe to run in parallel at the caller's
 * discretion; the library holds no shared mutable state.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod approval;
pub mod content;
pub mod errors;
pub mod pipeline;
pub mod refinement;
pub mod scoring;
pub mod validators;

// Re-export main types for easier usage
pub use approval::{
    ApprovalCriteria, ApprovalResult, ApprovalStats, ApprovalStatus, BatchItem,
    ContentApprovalSystem,
};
pub use content::{
    ContentRequirements, ContentType, Dimension, StageResult, ValidationResult, ValidationStatus,
};
pub use errors::{
    ApprovalError, PipelineError, QualityError, RefinementError, ScoringError, StageError,
};
pub use pipeline::ContentQualityPipeline;
pub use refinement::{
    ActionPriority, ActionType, AutomatedRefinementEngine, RefinementAction, RefinementConfig,
    RefinementResult,
};
pub use scoring::{DimensionScore, QualityScore, QualityScorer, ScoringConfig};
pub use validators::StageValidator;
