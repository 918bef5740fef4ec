/*!
 * Tests for error types and conversions
 */

use quillgate::errors::{
    ApprovalError, PipelineError, QualityError, RefinementError, ScoringError, StageError,
};

#[test]
fn test_scoringError_missingDimensions_shouldDisplayJoinedNames() {
    let error = ScoringError::MissingDimensions(vec![
        "humanization".to_string(),
        "userValue".to_string(),
    ]);
    let display = format!("{}", error);
    assert!(display.contains("missing required dimensions"));
    assert!(display.contains("humanization, userValue"));
}

#[test]
fn test_scoringError_invalidScore_shouldDisplayStageAndValue() {
    let error = ScoringError::InvalidScore {
        stage: "seo".to_string(),
        score: 101.5,
    };
    let display = format!("{}", error);
    assert!(display.contains("seo"));
    assert!(display.contains("101.5"));
}

#[test]
fn test_pipelineError_stageExecution_shouldDisplayStageAndMessage() {
    let error = PipelineError::StageExecution {
        stage: "eeat".to_string(),
        message: "analyzer timed out".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("eeat"));
    assert!(display.contains("analyzer timed out"));
}

#[test]
fn test_refinementError_invalidIterationBound_shouldDisplayGivenValue() {
    let error = RefinementError::InvalidIterationBound { given: 11 };
    let display = format!("{}", error);
    assert!(display.contains("11"));
    assert!(display.contains("1-10"));
}

#[test]
fn test_approvalError_fromScoringError_shouldWrapCorrectly() {
    let scoring_error = ScoringError::EmptyResults;
    let approval_error: ApprovalError = scoring_error.into();

    let display = format!("{}", approval_error);
    assert!(display.contains("scoring error"));
    assert!(display.contains("empty result set"));
}

#[test]
fn test_qualityError_fromScoringError_shouldWrapCorrectly() {
    let scoring_error = ScoringError::EmptyResults;
    let quality_error: QualityError = scoring_error.into();

    assert!(matches!(quality_error, QualityError::Scoring(_)));
    assert!(format!("{}", quality_error).contains("scoring error"));
}

#[test]
fn test_qualityError_fromStageError_shouldWrapCorrectly() {
    let stage_error = StageError::ExecutionFailed("analyzer crashed".to_string());
    let quality_error: QualityError = stage_error.into();

    let display = format!("{}", quality_error);
    assert!(display.contains("stage error"));
    assert!(display.contains("analyzer crashed"));
}

#[test]
fn test_qualityError_fromAnyhowError_shouldBecomeUnknown() {
    let anyhow_error = anyhow::anyhow!("something unexpected");
    let quality_error: QualityError = anyhow_error.into();

    assert!(matches!(quality_error, QualityError::Unknown(_)));
    assert!(format!("{}", quality_error).contains("something unexpected"));
}
