//! Judge Service
//!
//! The AI analysis client: builds judging prompts for a project, asks the
//! provider for structured or free-form output, and normalizes every
//! outcome into a typed result. Parsing is all-or-nothing; a partially
//! populated analysis is never returned.

use std::sync::Arc;

use hackboard_core::{Project, ProjectAnalysis};
use hackboard_llm::{GenerationRequest, LlmError, Schema, TextGenerator};
use thiserror::Error;
use tracing::{debug, error};

/// Sampling temperature for the judging analysis; evaluation favors
/// consistency over creativity.
const ANALYSIS_TEMPERATURE: f64 = 0.5;

/// Sampling temperature for tagline generation; creative variation wanted.
const TAGLINE_TEMPERATURE: f64 = 0.8;

/// Output ceiling for taglines; one sentence is expected.
const TAGLINE_MAX_TOKENS: u32 = 50;

/// Failures surfaced by the judge service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JudgeError {
    /// Network/provider-level failure (connection, authentication, quota)
    #[error("Provider call failed: {message}")]
    Transport { message: String },

    /// The provider's text failed the structured contract
    #[error("Malformed analysis response: {message}")]
    MalformedResponse { message: String },

    /// Fallback for unrecognized failure shapes
    #[error("An unknown error occurred: {message}")]
    Unknown { message: String },
}

impl From<LlmError> for JudgeError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::AuthenticationFailed { .. }
            | LlmError::RateLimited { .. }
            | LlmError::ModelNotFound { .. }
            | LlmError::InvalidRequest { .. }
            | LlmError::ServerError { .. }
            | LlmError::NetworkError { .. } => Self::Transport {
                message: err.to_string(),
            },
            LlmError::ParseError { .. } => Self::MalformedResponse {
                message: err.to_string(),
            },
            LlmError::Other { message } => Self::Unknown { message },
        }
    }
}

/// AI analysis client for judging sessions.
pub struct JudgeService {
    provider: Arc<dyn TextGenerator>,
}

impl JudgeService {
    /// Create a judge service backed by the given provider.
    pub fn new(provider: Arc<dyn TextGenerator>) -> Self {
        Self { provider }
    }

    /// Produce a structured judging analysis for `project`.
    ///
    /// Issues exactly one provider call per invocation; results are never
    /// cached, so repeated calls may legitimately differ.
    pub async fn analyze(&self, project: &Project) -> Result<ProjectAnalysis, JudgeError> {
        let request = GenerationRequest::new(analysis_prompt(project))
            .with_temperature(ANALYSIS_TEMPERATURE)
            .with_response_schema(analysis_schema());

        debug!(project_id = %project.id, "Requesting judging analysis");
        let raw = self.provider.generate(request).await.map_err(|e| {
            error!(project_id = %project.id, "Analysis call failed: {}", e);
            JudgeError::from(e)
        })?;

        let cleaned = strip_code_fence(&raw);
        let analysis: ProjectAnalysis =
            serde_json::from_str(cleaned).map_err(|e| JudgeError::MalformedResponse {
                message: format!("Failed to decode analysis JSON: {}", e),
            })?;

        analysis
            .validate()
            .map_err(|e| JudgeError::MalformedResponse {
                message: e.to_string(),
            })?;

        Ok(analysis)
    }

    /// Produce a one-sentence marketing tagline for `project`.
    ///
    /// The "no quotes, no lead-in" instruction lives in the prompt only;
    /// the returned text is trimmed but otherwise verbatim.
    pub async fn generate_tagline(&self, project: &Project) -> Result<String, JudgeError> {
        let request = GenerationRequest::new(tagline_prompt(project))
            .with_temperature(TAGLINE_TEMPERATURE)
            .with_max_output_tokens(TAGLINE_MAX_TOKENS);

        debug!(project_id = %project.id, "Requesting tagline");
        let raw = self.provider.generate(request).await.map_err(|e| {
            error!(project_id = %project.id, "Tagline call failed: {}", e);
            JudgeError::from(e)
        })?;

        Ok(raw.trim().to_string())
    }
}

/// Prompt for the structured judging analysis.
fn analysis_prompt(project: &Project) -> String {
    format!(
        "Analyze the following hackathon project submission. Provide a fair and critical \
         assessment based on the provided details.\n\n\
         Project Name: {}\n\
         Project Description: {}\n\
         Repository Link: {}\n\
         Demo Link: {}\n\n\
         Your task is to act as an impartial, critical hackathon judge. Evaluate the project \
         based on innovation, technical complexity, and business potential. Return your \
         analysis in the specified JSON format.",
        project.name, project.description, project.repo_url, project.demo_url
    )
}

/// Prompt for the presentation tagline.
fn tagline_prompt(project: &Project) -> String {
    format!(
        "Based on the following hackathon project, generate a catchy, one-sentence tagline \
         suitable for a presentation slide or announcement.\n\n\
         Project Name: {}\n\
         Project Description: {}\n\n\
         The tagline should be concise, memorable, and capture the essence of the project. \
         Return only the tagline text, without any quotes or introductory phrases.",
        project.name, project.description
    )
}

/// Response schema sent with the analysis request. All seven fields are
/// mandatory; the exactly-3 item counts are requested in the descriptions
/// but enforced only as non-empty on decode.
fn analysis_schema() -> Schema {
    Schema::object(
        vec![
            (
                "summary",
                Schema::string(
                    "A concise, 2-3 sentence summary of the project's goal and functionality.",
                ),
            ),
            (
                "innovationScore",
                Schema::integer("A score from 1-10 on the project's novelty and innovation."),
            ),
            (
                "technicalComplexityScore",
                Schema::integer("A score from 1-10 on the technical difficulty and execution."),
            ),
            (
                "businessPotentialScore",
                Schema::integer(
                    "A score from 1-10 on the project's market viability and potential impact.",
                ),
            ),
            (
                "strengths",
                Schema::array_of(
                    Schema::string("A strength."),
                    "A list of 3 key strengths of the project.",
                ),
            ),
            (
                "weaknesses",
                Schema::array_of(
                    Schema::string("A weakness."),
                    "A list of 3 potential weaknesses or areas for improvement.",
                ),
            ),
            (
                "suggestedQuestions",
                Schema::array_of(
                    Schema::string("A question."),
                    "A list of 3 insightful questions to ask the team during their presentation.",
                ),
            ),
        ],
        vec![
            "summary",
            "innovationScore",
            "technicalComplexityScore",
            "businessPotentialScore",
            "strengths",
            "weaknesses",
            "suggestedQuestions",
        ],
    )
}

/// Strip an optional markdown code fence from a provider response.
///
/// The provider sometimes wraps JSON payloads in ```json ... ``` even when
/// a JSON response was requested.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") through the end of the fence line
    let Some(newline) = rest.find('\n') else {
        return trimmed;
    };
    let body = &rest[newline + 1..];
    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}
