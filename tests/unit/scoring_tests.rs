/*!
 * Unit tests for weighted quality scoring
 */

use quillgate::content::{Dimension, StageResult};
use quillgate::errors::ScoringError;
use quillgate::scoring::{QualityScorer, ScoringConfig};

use crate::common::full_stage_results;

#[test]
fn test_calculateOverallScore_shouldEqualWeightedSumForArbitraryScores() {
    let scorer = QualityScorer::new();

    for scores in [
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [100.0, 100.0, 100.0, 100.0, 100.0, 100.0],
        [12.5, 37.0, 99.9, 61.2, 4.4, 88.8],
        [90.0, 92.0, 95.0, 98.0, 88.0, 91.0],
    ] {
        let results = full_stage_results(scores);
        let score = scorer.calculate_overall_score(&results).unwrap();

        let expected: f64 = Dimension::ALL
            .iter()
            .zip(scores)
            .map(|(d, s)| s * scorer.config().weight(*d))
            .sum();
        assert!(
            (score.overall_score - expected).abs() < 1e-9,
            "scores {scores:?}: got {} expected {}",
            score.overall_score,
            expected
        );
    }
}

#[test]
fn test_scoringConfig_weightSum_shouldBeOneForAllPresets() {
    for config in [
        ScoringConfig::default(),
        ScoringConfig::strict(),
        ScoringConfig::lenient(),
    ] {
        assert!((config.weight_sum() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_qualityGrade_shouldBeMonotonicOverFullRange() {
    let grade_rank = |grade: &str| match grade {
        "A+" => 7,
        "A" => 6,
        "B+" => 5,
        "B" => 4,
        "C+" => 3,
        "C" => 2,
        "D" => 1,
        _ => 0,
    };

    let mut previous = 0;
    let mut score = 0.0;
    while score <= 100.0 {
        let rank = grade_rank(QualityScorer::quality_grade(score));
        assert!(rank >= previous, "grade regressed at score {score}");
        previous = rank;
        score += 0.1;
    }

    assert_eq!(QualityScorer::quality_grade(100.0), "A+");
    assert_eq!(QualityScorer::quality_grade(90.0), "A");
    assert_eq!(QualityScorer::quality_grade(59.9), "F");
}

#[test]
fn test_calculateOverallScore_shouldBeDeterministicAcrossCalls() {
    let scorer = QualityScorer::new();
    let results = full_stage_results([55.0, 62.0, 71.0, 48.0, 83.0, 66.0]);

    let first = scorer.calculate_overall_score(&results).unwrap();
    let second = scorer.calculate_overall_score(&results).unwrap();

    assert_eq!(first.overall_score, second.overall_score);
    assert_eq!(first.recommendations, second.recommendations);
    assert_eq!(
        first
            .dimension_scores
            .iter()
            .map(|d| d.dimension)
            .collect::<Vec<_>>(),
        second
            .dimension_scores
            .iter()
            .map(|d| d.dimension)
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_calculateOverallScore_extraUnknownStages_shouldBeIgnored() {
    let scorer = QualityScorer::new();
    let mut results = full_stage_results([90.0, 92.0, 95.0, 98.0, 88.0, 91.0]);
    let baseline = scorer.calculate_overall_score(&results).unwrap();

    results.push(StageResult::passing("plagiarism", 10.0));
    let with_extra = scorer.calculate_overall_score(&results).unwrap();

    assert_eq!(baseline.overall_score, with_extra.overall_score);
}

#[test]
fn test_calculateOverallScore_negativeScore_shouldFail() {
    let scorer = QualityScorer::new();
    let mut results = full_stage_results([90.0, 92.0, 95.0, 98.0, 88.0, 91.0]);
    results[0].score = -0.5;

    let err = scorer.calculate_overall_score(&results).unwrap_err();

    assert!(matches!(err, ScoringError::InvalidScore { .. }));
    assert!(err.to_string().contains("humanization"));
}

#[test]
fn test_recommendations_everyFailingDimension_shouldBeNamed() {
    let scorer = QualityScorer::new();
    // Everything below threshold but overall above the critical floor
    let results = full_stage_results([70.0, 75.0, 80.0, 85.0, 70.0, 75.0]);

    let score = scorer.calculate_overall_score(&results).unwrap();

    assert!(score.overall_score >= 60.0);
    assert_eq!(score.recommendations.len(), 6);
    for dimension in Dimension::ALL {
        assert!(
            score
                .recommendations
                .iter()
                .any(|r| r.contains(dimension.as_str())),
            "no recommendation names {dimension}"
        );
    }
}
