//! Analysis Output
//!
//! The structured judging result produced by the AI evaluation workflow.
//! The record deserializes directly from the provider's JSON payload;
//! `validate` is the gate that keeps partially-populated or out-of-range
//! results from ever reaching a session.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Inclusive score range requested from the judge model.
pub const SCORE_MIN: u8 = 1;
/// Upper bound of the score range.
pub const SCORE_MAX: u8 = 10;

/// Structured judging analysis for a single project.
///
/// All seven fields are mandatory in the schema sent to the provider, so
/// deserialization fails on any missing field rather than defaulting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    /// Concise 2-3 sentence summary of the project's goal and functionality
    pub summary: String,
    /// Novelty score, 1-10
    pub innovation_score: u8,
    /// Technical difficulty and execution score, 1-10
    pub technical_complexity_score: u8,
    /// Market viability and potential impact score, 1-10
    pub business_potential_score: u8,
    /// Key strengths of the project
    pub strengths: Vec<String>,
    /// Potential weaknesses or areas for improvement
    pub weaknesses: Vec<String>,
    /// Questions to ask the team during their presentation
    pub suggested_questions: Vec<String>,
}

impl ProjectAnalysis {
    /// Validate the decoded analysis against the contract: all three scores
    /// in [1,10] and all three list fields non-empty.
    ///
    /// The prompt asks for exactly 3 items per list; that count is advisory
    /// and not enforced here.
    pub fn validate(&self) -> CoreResult<()> {
        for (label, score) in [
            ("innovationScore", self.innovation_score),
            ("technicalComplexityScore", self.technical_complexity_score),
            ("businessPotentialScore", self.business_potential_score),
        ] {
            if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
                return Err(CoreError::validation(format!(
                    "{} out of range: {} (expected {}-{})",
                    label, score, SCORE_MIN, SCORE_MAX
                )));
            }
        }

        for (label, items) in [
            ("strengths", &self.strengths),
            ("weaknesses", &self.weaknesses),
            ("suggestedQuestions", &self.suggested_questions),
        ] {
            if items.is_empty() {
                return Err(CoreError::validation(format!("{} is empty", label)));
            }
        }

        Ok(())
    }
}
