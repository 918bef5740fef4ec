/*!
 * Stage validator capability contract.
 *
 * Concrete quality analyzers (humanization, E-E-A-T, SEO heuristics,
 * readability formulas, ...) live outside this library and are supplied by
 * the caller. This module defines the interface they must implement so the
 * pipeline can drive them interchangeably.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::content::{ContentRequirements, StageResult};
use crate::errors::StageError;

/// Common trait for all stage validators.
///
/// The pipeline is agnostic to the number and order of validators beyond
/// the sequence given at construction. Implementations must not mutate the
/// content or requirements they are handed.
#[async_trait]
pub trait StageValidator: Send + Sync + Debug {
    /// Dimension identifier this validator reports under
    fn stage_name(&self) -> &str;

    /// Analyze content against the requirements and produce a verdict.
    ///
    /// # Arguments
    /// * `content` - The content draft to analyze
    /// * `requirements` - Immutable requirements for this content
    ///
    /// # Returns
    /// * `Result<StageResult, StageError>` - The verdict or an execution error
    async fn validate(
        &self,
        content: &str,
        requirements: &ContentRequirements,
    ) -> Result<StageResult, StageError>;

    /// Rewrite content to address the given issues.
    ///
    /// Must be idempotent-safe to call zero or more times.
    ///
    /// # Arguments
    /// * `content` - The content draft to rewrite
    /// * `issues` - Issues the rewrite should address
    ///
    /// # Returns
    /// * `Result<String, StageError>` - The rewritten content or an error
    async fn refine(&self, content: &str, issues: &[String]) -> Result<String, StageError>;
}

pub mod mock;
