/*!
 * Sequential content quality pipeline.
 *
 * Runs the configured stage validators in order over an evolving content
 * draft. Each stage sees the current draft, which may have been rewritten
 * by the previous stage's inline refinement. The first stage to fail its
 * threshold halts the run (fail-fast); later stages are never invoked.
 */

use std::sync::Arc;

use log::debug;

use crate::content::{ContentRequirements, StageResult, ValidationResult};
use crate::errors::PipelineError;
use crate::validators::StageValidator;

/// Orchestrates sequential execution of stage validators.
pub struct ContentQualityPipeline {
    validators: Vec<Arc<dyn StageValidator>>,
}

impl ContentQualityPipeline {
    /// Create a pipeline over the given validators, in execution order.
    pub fn new(validators: Vec<Arc<dyn StageValidator>>) -> Result<Self, PipelineError> {
        if validators.is_empty() {
            return Err(PipelineError::NoValidators);
        }
        Ok(Self { validators })
    }

    /// Number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.validators.len()
    }

    /// Validate content through every stage, refining inline where stages
    /// request it.
    ///
    /// Stages run strictly one after another: stage N+1 never starts before
    /// stage N's (possibly refining) output is finalized. A validator error
    /// aborts the whole run and the partial stage trace is discarded.
    pub async fn validate_content(
        &self,
        content: &str,
        requirements: &ContentRequirements,
    ) -> Result<ValidationResult, PipelineError> {
        if content.trim().is_empty() {
            return Err(PipelineError::EmptyContent);
        }

        let mut current = content.to_string();
        let mut trace: Vec<StageResult> = Vec::with_capacity(self.validators.len());

        for validator in &self.validators {
            let stage = validator.stage_name().to_string();

            let result = validator
                .validate(&current, requirements)
                .await
                .map_err(|e| PipelineError::StageExecution {
                    stage: stage.clone(),
                    message: e.to_string(),
                })?;

            debug!(
                "Stage '{}' scored {:.1} (passes: {}, issues: {})",
                stage,
                result.score,
                result.passes_threshold,
                result.issues.len()
            );

            let passes = result.passes_threshold;
            let wants_refinement = result.needs_refinement && !result.issues.is_empty();
            let issues = result.issues.clone();
            trace.push(result);

            if wants_refinement {
                current = validator.refine(&current, &issues).await.map_err(|e| {
                    PipelineError::StageExecution {
                        stage: stage.clone(),
                        message: e.to_string(),
                    }
                })?;
                debug!("Stage '{}' refined content ({} chars)", stage, current.len());
            }

            if !passes {
                return Ok(ValidationResult::failed(&stage, trace));
            }
        }

        Ok(ValidationResult::passed(trace, current))
    }
}
