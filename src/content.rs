/*!
 * Shared types for content quality assessment.
 *
 * Defines the inputs every stage validator receives (`ContentRequirements`),
 * the verdict each validator produces (`StageResult`), the fixed set of
 * quality dimensions, and the terminal output of a pipeline run
 * (`ValidationResult`).
 */

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of content being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Long-form article
    Article,
    /// Blog post
    Blog,
    /// Product description
    Product,
    /// Landing page copy
    Landing,
}

/// Requirements supplied with every validation call.
///
/// Immutable input: validators may read it but never change it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequirements {
    /// Who the content is written for
    pub target_audience: String,

    /// Desired tone of voice
    pub tone: String,

    /// Keywords the content should cover
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Minimum acceptable overall quality score, if the caller overrides it
    #[serde(default)]
    pub min_quality_score: Option<f64>,

    /// Kind of content being produced
    #[serde(default)]
    pub content_type: Option<ContentType>,
}

impl ContentRequirements {
    /// Create requirements with just an audience and tone.
    pub fn new(target_audience: &str, tone: &str) -> Self {
        Self {
            target_audience: target_audience.to_string(),
            tone: tone.to_string(),
            keywords: Vec::new(),
            min_quality_score: None,
            content_type: None,
        }
    }

    /// Set the keyword list.
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Parse requirements from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A named quality axis with its own weight and pass threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    /// How natural and human the text reads
    Humanization,
    /// Trust signals and source attribution
    Authority,
    /// Experience, expertise, authoritativeness, trust
    Eeat,
    /// Search optimization
    Seo,
    /// Linguistic quality
    Nlp,
    /// Usefulness to the reader
    UserValue,
}

impl Dimension {
    /// All required dimensions, in canonical order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Humanization,
        Dimension::Authority,
        Dimension::Eeat,
        Dimension::Seo,
        Dimension::Nlp,
        Dimension::UserValue,
    ];

    /// String identifier used in stage results.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Humanization => "humanization",
            Dimension::Authority => "authority",
            Dimension::Eeat => "eeat",
            Dimension::Seo => "seo",
            Dimension::Nlp => "nlp",
            Dimension::UserValue => "userValue",
        }
    }

    /// Parse a dimension from its string identifier.
    pub fn parse(s: &str) -> Option<Dimension> {
        Dimension::ALL.iter().copied().find(|d| d.as_str() == s)
    }

    /// Position in the canonical ordering, used for deterministic sorting.
    pub fn ordinal(&self) -> usize {
        Dimension::ALL
            .iter()
            .position(|d| d == self)
            .unwrap_or(usize::MAX)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validator's verdict for one content draft.
///
/// Produced fresh by each validator call and never mutated afterward.
#[derive(Debug, Clone)]
pub struct StageResult {
    /// Dimension identifier for the stage that produced this result
    pub stage: String,

    /// Score value (0 - 100)
    pub score: f64,

    /// Whether the stage considers the content acceptable
    pub passes_threshold: bool,

    /// Whether the stage recommends a refinement pass
    pub needs_refinement: bool,

    /// Issues found by the stage
    pub issues: Vec<String>,

    /// Time the stage spent, if measured
    pub processing_time_ms: Option<u64>,
}

impl StageResult {
    /// Create a passing result with no issues.
    pub fn passing(stage: &str, score: f64) -> Self {
        Self {
            stage: stage.to_string(),
            score,
            passes_threshold: true,
            needs_refinement: false,
            issues: Vec::new(),
            processing_time_ms: None,
        }
    }

    /// Create a failing result carrying the issues that were found.
    pub fn failing(stage: &str, score: f64, issues: Vec<String>) -> Self {
        Self {
            stage: stage.to_string(),
            score,
            passes_threshold: false,
            needs_refinement: true,
            issues,
            processing_time_ms: None,
        }
    }

    /// Pessimistic default used when a validator cannot be consulted.
    pub fn degraded(stage: &str) -> Self {
        Self {
            stage: stage.to_string(),
            score: 50.0,
            passes_threshold: false,
            needs_refinement: true,
            issues: vec![format!("{} assessment unavailable", stage)],
            processing_time_ms: None,
        }
    }

    /// Attach a processing time measurement.
    pub fn with_processing_time(mut self, ms: u64) -> Self {
        self.processing_time_ms = Some(ms);
        self
    }
}

/// Terminal status of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Every stage passed its threshold
    Passed,
    /// A stage failed and the run halted
    Failed,
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationStatus::Passed => f.write_str("passed"),
            ValidationStatus::Failed => f.write_str("failed"),
        }
    }
}

/// Terminal output of one pipeline run.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Overall pass/fail status
    pub overall_status: ValidationStatus,

    /// Stage that halted the run, if any
    pub failed_stage: Option<String>,

    /// Trace of every stage that executed, in order
    pub stage_results: Vec<StageResult>,

    /// Content after the last stage, only present on success
    pub final_content: Option<String>,
}

impl ValidationResult {
    /// Create a passing result carrying the final content.
    pub fn passed(stage_results: Vec<StageResult>, final_content: String) -> Self {
        Self {
            overall_status: ValidationStatus::Passed,
            failed_stage: None,
            stage_results,
            final_content: Some(final_content),
        }
    }

    /// Create a failing result naming the stage that halted the run.
    pub fn failed(failed_stage: &str, stage_results: Vec<StageResult>) -> Self {
        Self {
            overall_status: ValidationStatus::Failed,
            failed_stage: Some(failed_stage.to_string()),
            stage_results,
            final_content: None,
        }
    }

    /// Whether every stage passed.
    pub fn is_passed(&self) -> bool {
        self.overall_status == ValidationStatus::Passed
    }

    /// Get a human-readable summary.
    pub fn summary(&self) -> String {
        match &self.failed_stage {
            Some(stage) => format!(
                "Validation failed at stage '{}' after {} stage(s)",
                stage,
                self.stage_results.len()
            ),
            None => format!("Validation passed {} stage(s)", self.stage_results.len()),
        }
    }
}
