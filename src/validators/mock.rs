/*!
 * Mock validator implementations for testing.
 *
 * This module provides mock validators that simulate different behaviors:
 * - `MockValidator::working()` - Always passes with a high score
 * - `MockValidator::fixed()` - Returns the same score on every call
 * - `MockValidator::improving()` - Score rises with each call
 * - `MockValidator::failing()` - Always fails with an error
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::content::{ContentRequirements, StageResult};
use crate::errors::StageError;
use crate::validators::StageValidator;

/// Behavior mode for the mock validator.
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always passes with the given score and no issues
    Working { score: f64 },
    /// Returns the same score on every call; passes only above the threshold
    Fixed { score: f64 },
    /// Score starts at `start` and rises by `step` per call, capped at 100
    Improving { start: f64, step: f64 },
    /// Reports the given score together with a fixed issue list
    WithIssues { score: f64, issues: Vec<String> },
    /// Always fails with an execution error
    Failing,
    /// `validate` works but `refine` always errors
    RefineFailing { score: f64, issues: Vec<String> },
}

/// Mock validator for testing pipeline and refinement behavior.
#[derive(Debug)]
pub struct MockValidator {
    /// Dimension identifier reported in results
    stage: String,
    /// Behavior mode
    behavior: MockBehavior,
    /// Score at or above which results pass
    threshold: f64,
    /// Number of validate calls made
    validate_calls: Arc<AtomicUsize>,
    /// Number of refine calls made
    refine_calls: Arc<AtomicUsize>,
}

impl MockValidator {
    /// Create a new mock validator with the specified behavior.
    pub fn new(stage: &str, behavior: MockBehavior) -> Self {
        Self {
            stage: stage.to_string(),
            behavior,
            threshold: 85.0,
            validate_calls: Arc::new(AtomicUsize::new(0)),
            refine_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock validator that always passes.
    pub fn working(stage: &str) -> Self {
        Self::new(stage, MockBehavior::Working { score: 95.0 })
    }

    /// Create a mock that returns the same score on every call.
    pub fn fixed(stage: &str, score: f64) -> Self {
        Self::new(stage, MockBehavior::Fixed { score })
    }

    /// Create a mock whose score improves with each call.
    pub fn improving(stage: &str, start: f64, step: f64) -> Self {
        Self::new(stage, MockBehavior::Improving { start, step })
    }

    /// Create a mock that reports issues alongside its score.
    pub fn with_issues(stage: &str, score: f64, issues: Vec<String>) -> Self {
        Self::new(stage, MockBehavior::WithIssues { score, issues })
    }

    /// Create a failing mock validator that always errors.
    pub fn failing(stage: &str) -> Self {
        Self::new(stage, MockBehavior::Failing)
    }

    /// Create a mock whose refine call always errors.
    pub fn refine_failing(stage: &str, score: f64, issues: Vec<String>) -> Self {
        Self::new(stage, MockBehavior::RefineFailing { score, issues })
    }

    /// Set the pass threshold used for `passes_threshold`.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Number of validate calls made so far.
    pub fn validate_call_count(&self) -> usize {
        self.validate_calls.load(Ordering::SeqCst)
    }

    /// Number of refine calls made so far.
    pub fn refine_call_count(&self) -> usize {
        self.refine_calls.load(Ordering::SeqCst)
    }

    fn result_for_score(&self, score: f64, issues: Vec<String>) -> StageResult {
        let score = score.clamp(0.0, 100.0);
        if score >= self.threshold && issues.is_empty() {
            StageResult::passing(&self.stage, score)
        } else if score >= self.threshold {
            // Passing score but with advisory issues attached
            let mut result = StageResult::passing(&self.stage, score);
            result.needs_refinement = true;
            result.issues = issues;
            result
        } else {
            StageResult::failing(&self.stage, score, issues)
        }
    }
}

#[async_trait]
impl StageValidator for MockValidator {
    fn stage_name(&self) -> &str {
        &self.stage
    }

    async fn validate(
        &self,
        _content: &str,
        _requirements: &ContentRequirements,
    ) -> Result<StageResult, StageError> {
        let prior = self.validate_calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Working { score } => Ok(StageResult::passing(&self.stage, *score)),
            MockBehavior::Fixed { score } => Ok(self.result_for_score(*score, Vec::new())),
            MockBehavior::Improving { start, step } => {
                let score = (start + step * prior as f64).min(100.0);
                Ok(self.result_for_score(score, Vec::new()))
            }
            MockBehavior::WithIssues { score, issues } => {
                Ok(self.result_for_score(*score, issues.clone()))
            }
            MockBehavior::Failing => Err(StageError::ExecutionFailed(format!(
                "mock validator '{}' configured to fail",
                self.stage
            ))),
            MockBehavior::RefineFailing { score, issues } => {
                Ok(self.result_for_score(*score, issues.clone()))
            }
        }
    }

    async fn refine(&self, content: &str, _issues: &[String]) -> Result<String, StageError> {
        self.refine_calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Failing | MockBehavior::RefineFailing { .. } => Err(
                StageError::RefinementFailed(format!(
                    "mock validator '{}' configured to fail refinement",
                    self.stage
                )),
            ),
            _ => Ok(format!("{} [refined by {}]", content, self.stage)),
        }
    }
}
