/*!
 * End-to-end tests driving content from validation through refinement to
 * the approval decision.
 */

use std::sync::Arc;

use quillgate::approval::{ApprovalStatus, ContentApprovalSystem};
use quillgate::content::Dimension;
use quillgate::pipeline::ContentQualityPipeline;
use quillgate::refinement::AutomatedRefinementEngine;
use quillgate::scoring::QualityScorer;
use quillgate::validators::StageValidator;
use quillgate::validators::mock::MockValidator;

use crate::common::mock_validators::approving_validator_set;
use crate::common::{full_stage_results, sample_draft, test_requirements};

#[tokio::test]
async fn test_workflow_passingPipeline_shouldYieldApproval() {
    let pipeline = ContentQualityPipeline::new(approving_validator_set()).unwrap();
    let system = ContentApprovalSystem::new();

    let validation = pipeline
        .validate_content(&sample_draft(), &test_requirements())
        .await
        .unwrap();
    assert!(validation.is_passed());

    let approval = system
        .approve_content(&validation.stage_results, None)
        .unwrap();

    assert_eq!(approval.status, ApprovalStatus::Approved);
    assert!(approval.critical_issues.is_empty());
}

#[test]
fn test_workflow_highScores_shouldApproveAboveNinety() {
    let system = ContentApprovalSystem::new();
    let results = full_stage_results([90.0, 92.0, 95.0, 98.0, 88.0, 91.0]);

    let approval = system.approve_content(&results, None).unwrap();

    assert_eq!(approval.status, ApprovalStatus::Approved);
    assert!(approval.overall_score > 90.0);
    assert!(approval.critical_issues.is_empty());
}

#[test]
fn test_workflow_mediocreScores_shouldRejectWithRecommendations() {
    let system = ContentApprovalSystem::new();
    let results = full_stage_results([70.0, 75.0, 80.0, 85.0, 70.0, 75.0]);

    let approval = system.approve_content(&results, None).unwrap();

    assert_eq!(approval.status, ApprovalStatus::Rejected);
    assert!(!approval.recommendations.is_empty());
}

#[test]
fn test_workflow_criticalDimensions_shouldRejectWithCriticalIssues() {
    let system = ContentApprovalSystem::new();
    // authority 70, eeat 80, seo 85; the rest passing
    let results = full_stage_results([95.0, 70.0, 80.0, 85.0, 95.0, 95.0]);

    let approval = system.approve_content(&results, None).unwrap();

    assert_eq!(approval.status, ApprovalStatus::Rejected);
    assert!(approval.critical_issues.iter().any(|i| i.contains("CRITICAL")));
}

#[tokio::test]
async fn test_workflow_refineThenRevalidate_shouldCarryRefinedDraft() {
    let requirements = test_requirements();
    let engine = AutomatedRefinementEngine::new();

    let refined = engine
        .refine_content(
            "Short draft missing the required terms.",
            &["keyword coverage weak".to_string()],
            &requirements,
            None,
        )
        .await
        .unwrap();

    // The rewrite wove the required keywords in
    assert!(refined.final_content.to_lowercase().contains("observability"));

    let pipeline = ContentQualityPipeline::new(approving_validator_set()).unwrap();
    let validation = pipeline
        .validate_content(&refined.final_content, &requirements)
        .await
        .unwrap();

    assert!(validation.is_passed());
    assert_eq!(validation.final_content.as_deref(), Some(refined.final_content.as_str()));
}

#[tokio::test]
async fn test_workflow_refinementAssessment_shouldAgreeWithScorer() {
    let validators: Vec<Arc<dyn StageValidator>> = Dimension::ALL
        .iter()
        .map(|d| Arc::new(MockValidator::fixed(d.as_str(), 80.0)) as Arc<dyn StageValidator>)
        .collect();
    let engine = AutomatedRefinementEngine::with_validators(validators);
    let scorer = QualityScorer::new();

    let result = engine
        .refine_content(
            &sample_draft(),
            &["readability suffers".to_string()],
            &test_requirements(),
            Some(2),
        )
        .await
        .unwrap();

    // All validators report 80, so the refinement loop's internal
    // assessment matches a direct scoring of the same verdicts
    let direct = scorer
        .calculate_overall_score(&full_stage_results([80.0; 6]))
        .unwrap();
    assert!((direct.overall_score - 80.0).abs() < 1e-9);
    assert!(result.convergence_reached);
}
