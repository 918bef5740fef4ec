/*!
 * Content approval gate.
 *
 * Converts an aggregate quality score into a publish decision:
 * - Critical-dimension overrides force rejection regardless of the
 *   overall score
 * - Near-miss scores land in a pending band instead of hard rejection
 * - Batch processing is fault-isolated per item
 */

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::content::{Dimension, StageResult};
use crate::errors::ApprovalError;
use crate::scoring::{QualityScore, QualityScorer};

/// Final decision for a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApprovalStatus {
    /// Publishable as-is
    Approved,
    /// Not publishable; resolution required
    Rejected,
    /// Close to the bar; minor improvements expected
    Pending,
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalStatus::Approved => f.write_str("approved"),
            ApprovalStatus::Rejected => f.write_str("rejected"),
            ApprovalStatus::Pending => f.write_str("pending"),
        }
    }
}

/// Criteria applied when deciding approval.
///
/// Defaults are supplied by the approval system and can be overridden per
/// call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalCriteria {
    /// Minimum overall score for approval
    pub minimum_overall_score: f64,

    /// Dimensions that must be present in the scored set
    pub required_dimensions: Vec<Dimension>,

    /// Dimension-specific floors whose violation forces rejection
    pub critical_dimension_thresholds: HashMap<Dimension, f64>,

    /// Whether content with critical issues may still be retried
    pub allow_partial_approval: bool,

    /// Width of the band below the minimum that yields pending instead of
    /// rejected
    #[serde(default = "default_pending_margin")]
    pub pending_margin: f64,
}

fn default_pending_margin() -> f64 {
    5.0
}

impl Default for ApprovalCriteria {
    fn default() -> Self {
        Self {
            minimum_overall_score: 90.0,
            required_dimensions: Dimension::ALL.to_vec(),
            critical_dimension_thresholds: HashMap::from([
                (Dimension::Seo, 95.0),
                (Dimension::Eeat, 90.0),
                (Dimension::Authority, 88.0),
            ]),
            allow_partial_approval: false,
            pending_margin: default_pending_margin(),
        }
    }
}

impl ApprovalCriteria {
    /// Parse criteria from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Final output of the approval gate for one piece of content.
#[derive(Debug, Clone)]
pub struct ApprovalResult {
    /// The decision
    pub status: ApprovalStatus,

    /// Human-readable explanation of the decision
    pub message: String,

    /// Aggregate score the decision was based on
    pub overall_score: f64,

    /// Letter grade for the aggregate score
    pub quality_grade: String,

    /// Improvement recommendations carried over from scoring
    pub recommendations: Vec<String>,

    /// When the decision was made
    pub approval_timestamp: DateTime<Utc>,

    /// Critical issues that forced rejection, if any
    pub critical_issues: Vec<String>,

    /// Whether resubmission after fixes is worthwhile
    pub can_retry: bool,
}

impl ApprovalResult {
    /// Get a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{}: {:.1} ({}) - {} critical issue(s)",
            self.status,
            self.overall_score,
            self.quality_grade,
            self.critical_issues.len()
        )
    }
}

/// One item in a batch approval request.
#[derive(Debug, Clone)]
pub struct BatchItem {
    /// Caller-supplied identifier
    pub id: String,

    /// Stage results for this item
    pub stage_results: Vec<StageResult>,
}

impl BatchItem {
    /// Create a batch item.
    pub fn new(id: &str, stage_results: Vec<StageResult>) -> Self {
        Self {
            id: id.to_string(),
            stage_results,
        }
    }
}

/// Aggregate statistics over a set of approval results.
#[derive(Debug, Clone, Default)]
pub struct ApprovalStats {
    /// Total results counted
    pub total: usize,

    /// Approved count
    pub approved: usize,

    /// Rejected count
    pub rejected: usize,

    /// Pending count
    pub pending: usize,

    /// Mean overall score (0.0 for empty input)
    pub average_score: f64,

    /// Count per letter grade
    pub grade_distribution: HashMap<String, usize>,
}

impl ApprovalStats {
    /// Get a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Approvals: {}/{} approved, {} pending, {} rejected (avg {:.1})",
            self.approved, self.total, self.pending, self.rejected, self.average_score
        )
    }
}

/// Converts quality scores into approval decisions.
pub struct ContentApprovalSystem {
    scorer: QualityScorer,
    default_criteria: ApprovalCriteria,
}

impl ContentApprovalSystem {
    /// Create an approval system with default scorer and criteria.
    pub fn new() -> Self {
        Self {
            scorer: QualityScorer::new(),
            default_criteria: ApprovalCriteria::default(),
        }
    }

    /// Create with custom default criteria.
    pub fn with_criteria(criteria: ApprovalCriteria) -> Self {
        Self {
            scorer: QualityScorer::new(),
            default_criteria: criteria,
        }
    }

    /// Replace the default scorer.
    pub fn with_scorer(mut self, scorer: QualityScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Decide approval for one content item's stage results.
    pub fn approve_content(
        &self,
        stage_results: &[StageResult],
        custom_criteria: Option<&ApprovalCriteria>,
    ) -> Result<ApprovalResult, ApprovalError> {
        if stage_results.is_empty() {
            return Err(ApprovalError::EmptyResults);
        }

        let criteria = custom_criteria.unwrap_or(&self.default_criteria);
        let score = self.scorer.calculate_overall_score(stage_results)?;

        let critical_issues = self.detect_critical_issues(&score, criteria);
        let missing_required = self.missing_required_dimensions(&score, criteria);

        let status = if !critical_issues.is_empty() {
            ApprovalStatus::Rejected
        } else if score.overall_score < criteria.minimum_overall_score {
            if score.overall_score >= criteria.minimum_overall_score - criteria.pending_margin {
                ApprovalStatus::Pending
            } else {
                ApprovalStatus::Rejected
            }
        } else if !missing_required.is_empty() {
            ApprovalStatus::Rejected
        } else {
            ApprovalStatus::Approved
        };

        let grade = QualityScorer::quality_grade(score.overall_score).to_string();
        let message = self.build_message(status, &score, &grade, criteria, &critical_issues);
        let can_retry = critical_issues.is_empty() || criteria.allow_partial_approval;

        debug!(
            "Approval decision: {} at {:.1} ({} critical issue(s))",
            status,
            score.overall_score,
            critical_issues.len()
        );

        Ok(ApprovalResult {
            status,
            message,
            overall_score: score.overall_score,
            quality_grade: grade,
            recommendations: score.recommendations,
            approval_timestamp: Utc::now(),
            critical_issues,
            can_retry,
        })
    }

    /// Detect issues that force rejection independently of the overall
    /// score.
    fn detect_critical_issues(
        &self,
        score: &QualityScore,
        criteria: &ApprovalCriteria,
    ) -> Vec<String> {
        let mut issues = Vec::new();

        // Iterate critical thresholds in canonical dimension order so the
        // issue list is deterministic.
        let mut floors: Vec<(Dimension, f64)> = criteria
            .critical_dimension_thresholds
            .iter()
            .map(|(d, f)| (*d, *f))
            .collect();
        floors.sort_by_key(|(d, _)| d.ordinal());

        for (dimension, floor) in floors {
            if let Some(ds) = score
                .dimension_scores
                .iter()
                .find(|d| d.dimension == dimension)
            {
                if ds.score < floor {
                    issues.push(format!(
                        "CRITICAL: {} score {:.1} is below the critical threshold {:.1}",
                        dimension, ds.score, floor
                    ));
                }
            }
        }

        let critical_floor = self.scorer.config().critical_floor;
        if score.overall_score < critical_floor {
            issues.push(format!(
                "CRITICAL: overall score {:.1} is unacceptably low",
                score.overall_score
            ));
        }

        if score.failing_dimension_count() >= 3 {
            issues.push(format!(
                "CRITICAL: multiple dimensions failing ({} below threshold)",
                score.failing_dimension_count()
            ));
        }

        issues
    }

    /// Required dimensions absent from the scored set.
    fn missing_required_dimensions(
        &self,
        score: &QualityScore,
        criteria: &ApprovalCriteria,
    ) -> Vec<Dimension> {
        criteria
            .required_dimensions
            .iter()
            .copied()
            .filter(|required| {
                !score
                    .dimension_scores
                    .iter()
                    .any(|d| d.dimension == *required)
            })
            .collect()
    }

    fn build_message(
        &self,
        status: ApprovalStatus,
        score: &QualityScore,
        grade: &str,
        criteria: &ApprovalCriteria,
        critical_issues: &[String],
    ) -> String {
        if !critical_issues.is_empty() {
            return format!(
                "Content rejected at {:.1}: {} critical issue(s) must be resolved before resubmission",
                score.overall_score,
                critical_issues.len()
            );
        }

        match status {
            ApprovalStatus::Approved => format!(
                "Content approved with grade {} ({:.1})",
                grade, score.overall_score
            ),
            ApprovalStatus::Pending => format!(
                "Content pending at {:.1}: minor improvements needed to reach {:.1}",
                score.overall_score, criteria.minimum_overall_score
            ),
            ApprovalStatus::Rejected => {
                if score.overall_score >= 85.0 {
                    format!(
                        "Content rejected at {:.1}: close to the {:.1} minimum, minor improvements needed",
                        score.overall_score, criteria.minimum_overall_score
                    )
                } else {
                    format!(
                        "Content rejected at {:.1}: below the {:.1} minimum",
                        score.overall_score, criteria.minimum_overall_score
                    )
                }
            }
        }
    }

    /// Approve a batch of items, isolating failures per item.
    ///
    /// An item whose approval errors is converted into a synthetic
    /// rejected result carrying the error message; the batch never aborts.
    pub fn batch_approve(&self, items: &[BatchItem]) -> HashMap<String, ApprovalResult> {
        let mut results = HashMap::with_capacity(items.len());

        for item in items {
            let result = match self.approve_content(&item.stage_results, None) {
                Ok(result) => result,
                Err(e) => {
                    warn!("batch item '{}' failed approval: {}", item.id, e);
                    Self::rejected_for_error(&e.to_string())
                }
            };
            results.insert(item.id.clone(), result);
        }

        results
    }

    /// Synthetic rejection for an item whose approval call failed.
    fn rejected_for_error(message: &str) -> ApprovalResult {
        ApprovalResult {
            status: ApprovalStatus::Rejected,
            message: format!("Approval failed: {}", message),
            overall_score: 0.0,
            quality_grade: "F".to_string(),
            recommendations: Vec::new(),
            approval_timestamp: Utc::now(),
            critical_issues: Vec::new(),
            can_retry: true,
        }
    }

    /// Aggregate statistics over a set of approval results.
    ///
    /// Returns zeroed stats for empty input rather than failing.
    pub fn approval_stats(results: &[ApprovalResult]) -> ApprovalStats {
        if results.is_empty() {
            return ApprovalStats::default();
        }

        let mut stats = ApprovalStats {
            total: results.len(),
            ..Default::default()
        };

        let mut score_sum = 0.0;
        for result in results {
            match result.status {
                ApprovalStatus::Approved => stats.approved += 1,
                ApprovalStatus::Rejected => stats.rejected += 1,
                ApprovalStatus::Pending => stats.pending += 1,
            }
            score_sum += result.overall_score;
            *stats
                .grade_distribution
                .entry(result.quality_grade.clone())
                .or_insert(0) += 1;
        }

        stats.average_score = score_sum / results.len() as f64;
        stats
    }
}

impl Default for ContentApprovalSystem {
    fn default() -> Self {
        Self::new()
    }
}
