/*!
 * Weighted quality scoring across the six required dimensions.
 *
 * Aggregates per-stage verdicts into a single overall score:
 * - Humanization: natural, human-sounding prose
 * - Authority: trust signals and sourcing
 * - E-E-A-T: experience, expertise, authoritativeness, trust
 * - SEO: search optimization
 * - NLP: linguistic quality
 * - User value: usefulness to the reader
 */

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::debug;

use crate::content::{Dimension, StageResult};
use crate::errors::ScoringError;

/// Weight and threshold tables for scoring.
///
/// Passed explicitly at construction; never ambient global state. Weights
/// must sum to 1.0 across the required dimensions.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Per-dimension weights (sum to 1.0)
    pub weights: HashMap<Dimension, f64>,

    /// Per-dimension pass thresholds
    pub thresholds: HashMap<Dimension, f64>,

    /// Overall score at or above which content passes
    pub passing_score: f64,

    /// Overall score below which content is critically deficient
    pub critical_floor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let weights = HashMap::from([
            (Dimension::Humanization, 0.20),
            (Dimension::Authority, 0.15),
            (Dimension::Eeat, 0.20),
            (Dimension::Seo, 0.20),
            (Dimension::Nlp, 0.10),
            (Dimension::UserValue, 0.15),
        ]);

        let thresholds = HashMap::from([
            (Dimension::Humanization, 85.0),
            (Dimension::Authority, 88.0),
            (Dimension::Eeat, 90.0),
            (Dimension::Seo, 95.0),
            (Dimension::Nlp, 80.0),
            (Dimension::UserValue, 85.0),
        ]);

        Self {
            weights,
            thresholds,
            passing_score: 90.0,
            critical_floor: 60.0,
        }
    }
}

impl ScoringConfig {
    /// Create a strict config for high-stakes publishing.
    pub fn strict() -> Self {
        let mut config = Self::default();
        config.passing_score = 95.0;
        for threshold in config.thresholds.values_mut() {
            *threshold = (*threshold + 3.0).min(100.0);
        }
        config
    }

    /// Create a lenient config for draft review.
    pub fn lenient() -> Self {
        let mut config = Self::default();
        config.passing_score = 80.0;
        for threshold in config.thresholds.values_mut() {
            *threshold -= 10.0;
        }
        config
    }

    /// Sum of the configured weights.
    pub fn weight_sum(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Weight for a dimension, 0.0 if unconfigured.
    pub fn weight(&self, dimension: Dimension) -> f64 {
        self.weights.get(&dimension).copied().unwrap_or(0.0)
    }

    /// Pass threshold for a dimension, 0.0 if unconfigured.
    pub fn threshold(&self, dimension: Dimension) -> f64 {
        self.thresholds.get(&dimension).copied().unwrap_or(0.0)
    }
}

/// Quality score for a single dimension.
#[derive(Debug, Clone, Copy)]
pub struct DimensionScore {
    /// The dimension this score belongs to
    pub dimension: Dimension,

    /// Raw score (0 - 100)
    pub score: f64,

    /// Weight used for aggregation
    pub weight: f64,

    /// Weighted contribution to the overall score
    pub weighted_score: f64,

    /// Whether the score meets the dimension's own threshold
    pub passes: bool,
}

/// Overall quality score with per-dimension breakdown.
#[derive(Debug, Clone)]
pub struct QualityScore {
    /// Overall weighted score (0 - 100)
    pub overall_score: f64,

    /// Whether the overall score meets the passing bar
    pub passes_threshold: bool,

    /// One entry per required dimension, in canonical order
    pub dimension_scores: Vec<DimensionScore>,

    /// Improvement recommendations, highest-gap dimensions first
    pub recommendations: Vec<String>,

    /// When the score was computed
    pub timestamp: DateTime<Utc>,
}

impl QualityScore {
    /// Get the lowest scoring dimension.
    pub fn weakest_dimension(&self) -> Option<Dimension> {
        self.dimension_scores
            .iter()
            .min_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal))
            .map(|d| d.dimension)
    }

    /// Number of dimensions below their own threshold.
    pub fn failing_dimension_count(&self) -> usize {
        self.dimension_scores.iter().filter(|d| !d.passes).count()
    }

    /// Get a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Quality: {:.1} (Grade: {}) - {} dimensions, {} below threshold",
            self.overall_score,
            QualityScorer::quality_grade(self.overall_score),
            self.dimension_scores.len(),
            self.failing_dimension_count()
        )
    }
}

/// Aggregates stage results into a weighted quality score.
pub struct QualityScorer {
    config: ScoringConfig,
}

impl QualityScorer {
    /// Create a new scorer with default weights and thresholds.
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }

    /// Create with custom configuration.
    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Get the scoring configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Aggregate stage results into an overall quality score.
    ///
    /// Requires exactly one result for each of the six dimensions; extra
    /// results for unknown stages are ignored. Scores outside 0-100 are
    /// rejected rather than clamped.
    pub fn calculate_overall_score(
        &self,
        results: &[StageResult],
    ) -> Result<QualityScore, ScoringError> {
        if results.is_empty() {
            return Err(ScoringError::EmptyResults);
        }

        for result in results {
            if !(0.0..=100.0).contains(&result.score) {
                return Err(ScoringError::InvalidScore {
                    stage: result.stage.clone(),
                    score: result.score,
                });
            }
        }

        let missing: Vec<String> = Dimension::ALL
            .iter()
            .filter(|d| !results.iter().any(|r| r.stage == d.as_str()))
            .map(|d| d.as_str().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ScoringError::MissingDimensions(missing));
        }

        let mut dimension_scores = Vec::with_capacity(Dimension::ALL.len());
        let mut overall_score = 0.0;

        for dimension in Dimension::ALL {
            // Presence was verified above
            let result = results
                .iter()
                .find(|r| r.stage == dimension.as_str())
                .ok_or_else(|| {
                    ScoringError::MissingDimensions(vec![dimension.as_str().to_string()])
                })?;

            let weight = self.config.weight(dimension);
            let weighted_score = result.score * weight;
            overall_score += weighted_score;

            dimension_scores.push(DimensionScore {
                dimension,
                score: result.score,
                weight,
                weighted_score,
                passes: result.score >= self.config.threshold(dimension),
            });
        }

        let recommendations = self.build_recommendations(overall_score, &dimension_scores);

        debug!(
            "Scored {} dimensions: overall {:.2}, {} recommendations",
            dimension_scores.len(),
            overall_score,
            recommendations.len()
        );

        Ok(QualityScore {
            overall_score,
            passes_threshold: overall_score >= self.config.passing_score,
            dimension_scores,
            recommendations,
            timestamp: Utc::now(),
        })
    }

    /// Build prioritized recommendations from failing dimensions.
    ///
    /// Dimensions are ordered by descending gap to their threshold; ties
    /// break on canonical dimension order so output is deterministic.
    fn build_recommendations(
        &self,
        overall_score: f64,
        dimension_scores: &[DimensionScore],
    ) -> Vec<String> {
        let mut failing: Vec<(f64, &DimensionScore)> = dimension_scores
            .iter()
            .filter(|d| !d.passes)
            .map(|d| (self.config.threshold(d.dimension) - d.score, d))
            .collect();

        failing.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then(a.1.dimension.ordinal().cmp(&b.1.dimension.ordinal()))
        });

        let mut recommendations: Vec<String> = failing
            .iter()
            .map(|(gap, d)| {
                format!(
                    "Improve {}: score {:.1} is {:.1} points below the {:.1} threshold",
                    d.dimension,
                    d.score,
                    gap,
                    self.config.threshold(d.dimension)
                )
            })
            .collect();

        if overall_score < self.config.critical_floor {
            recommendations.insert(
                0,
                format!(
                    "CRITICAL: overall score {:.1} requires comprehensive revision before dimension-level fixes",
                    overall_score
                ),
            );
        }

        recommendations
    }

    /// Get a letter grade for an overall score.
    ///
    /// Buckets use inclusive lower bounds; 100 maps to A+ and 59.9 to F.
    pub fn quality_grade(score: f64) -> &'static str {
        match score {
            s if s >= 95.0 => "A+",
            s if s >= 90.0 => "A",
            s if s >= 85.0 => "B+",
            s if s >= 80.0 => "B",
            s if s >= 75.0 => "C+",
            s if s >= 70.0 => "C",
            s if s >= 60.0 => "D",
            _ => "F",
        }
    }
}

impl Default for QualityScorer {
    fn default() -> Self {
        Self::new()
    }
}
