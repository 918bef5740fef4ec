/*!
 * Mock validator helpers shared across the test suite.
 *
 * Builds on the library's `MockValidator` and adds a recording validator
 * that captures the content each call received, for asserting that
 * refined drafts are threaded forward between stages.
 */

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use quillgate::content::{ContentRequirements, Dimension, StageResult};
use quillgate::errors::StageError;
use quillgate::validators::StageValidator;
use quillgate::validators::mock::MockValidator;

/// One passing mock validator per required dimension, scoring high enough
/// to approve.
pub fn approving_validator_set() -> Vec<Arc<dyn StageValidator>> {
    Dimension::ALL
        .iter()
        .map(|d| Arc::new(MockValidator::working(d.as_str())) as Arc<dyn StageValidator>)
        .collect()
}

/// One fixed-score mock validator per required dimension.
pub fn fixed_validator_set(score: f64) -> Vec<Arc<dyn StageValidator>> {
    Dimension::ALL
        .iter()
        .map(|d| Arc::new(MockValidator::fixed(d.as_str(), score)) as Arc<dyn StageValidator>)
        .collect()
}

/// Validator that records the content of every validate call.
#[derive(Debug)]
pub struct RecordingValidator {
    stage: String,
    score: f64,
    seen_content: Mutex<Vec<String>>,
}

impl RecordingValidator {
    /// Create a recording validator that always passes with `score`.
    pub fn new(stage: &str, score: f64) -> Self {
        Self {
            stage: stage.to_string(),
            score,
            seen_content: Mutex::new(Vec::new()),
        }
    }

    /// Content drafts seen so far, in call order.
    pub fn seen(&self) -> Vec<String> {
        self.seen_content.lock().unwrap().clone()
    }
}

#[async_trait]
impl StageValidator for RecordingValidator {
    fn stage_name(&self) -> &str {
        &self.stage
    }

    async fn validate(
        &self,
        content: &str,
        _requirements: &ContentRequirements,
    ) -> Result<StageResult, StageError> {
        self.seen_content.lock().unwrap().push(content.to_string());
        Ok(StageResult::passing(&self.stage, self.score))
    }

    async fn refine(&self, content: &str, _issues: &[String]) -> Result<String, StageError> {
        Ok(content.to_string())
    }
}
