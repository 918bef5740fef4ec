/*!
 * Common test utilities for the quillgate test suite
 */

use quillgate::content::{ContentRequirements, Dimension, StageResult};

// Re-export the mock validators module
pub mod mock_validators;

/// Standard requirements used across tests
pub fn test_requirements() -> ContentRequirements {
    ContentRequirements::new("software engineers", "technical")
        .with_keywords(vec!["observability".to_string(), "tracing".to_string()])
}

/// Build one stage result per required dimension with the given scores,
/// in canonical dimension order.
pub fn full_stage_results(scores: [f64; 6]) -> Vec<StageResult> {
    Dimension::ALL
        .iter()
        .zip(scores)
        .map(|(d, s)| StageResult::passing(d.as_str(), s))
        .collect()
}

/// A content draft long enough to exercise structural transforms
pub fn sample_draft() -> String {
    "Distributed tracing ties individual requests together across services. \
     Spans record timing and metadata for each hop. Sampling keeps overhead \
     manageable in production. Correlating traces with logs shortens incident \
     response. Teams adopt it incrementally, starting at the edges."
        .to_string()
}
