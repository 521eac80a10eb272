//! Judge Service Integration Tests
//!
//! Exercises the analysis client against the scripted provider: prompt and
//! request shape, fence stripping, validation, and the error taxonomy.

use hackboard::services::judge::{JudgeError, JudgeService};
use hackboard_llm::LlmError;

use crate::support::{analysis_json, ecotrack, MockProvider};

// ============================================================================
// Analyze
// ============================================================================

#[tokio::test]
async fn test_analyze_returns_validated_result() {
    let provider = MockProvider::new();
    provider.push_ok(analysis_json());
    let judge = JudgeService::new(provider.clone());

    let analysis = judge.analyze(&ecotrack()).await.unwrap();
    assert_eq!(analysis.innovation_score, 7);
    assert_eq!(analysis.technical_complexity_score, 6);
    assert_eq!(analysis.business_potential_score, 8);
    assert_eq!(analysis.strengths, vec!["a", "b", "c"]);

    let request = provider.last_request().unwrap();
    assert_eq!(request.temperature, Some(0.5));
    assert!(request.max_output_tokens.is_none());
    assert!(request.prompt.contains("EcoTrack"));
    assert!(request.prompt.contains("https://demo.ecotrack.io"));

    let schema = request.response_schema.unwrap();
    assert_eq!(schema.required.unwrap().len(), 7);
}

#[tokio::test]
async fn test_analyze_strips_markdown_fence() {
    let provider = MockProvider::new();
    provider.push_ok(analysis_json());
    provider.push_ok(&format!("```json\n{}\n```", analysis_json()));
    let judge = JudgeService::new(provider.clone());

    let bare = judge.analyze(&ecotrack()).await.unwrap();
    let fenced = judge.analyze(&ecotrack()).await.unwrap();
    assert_eq!(bare, fenced);
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_analyze_rejects_missing_fields() {
    let provider = MockProvider::new();
    provider.push_ok(r#"{"summary": "only a summary"}"#);
    let judge = JudgeService::new(provider);

    let err = judge.analyze(&ecotrack()).await.unwrap_err();
    assert!(matches!(err, JudgeError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_analyze_rejects_out_of_range_score() {
    let provider = MockProvider::new();
    provider.push_ok(
        r#"{
            "summary": "s",
            "innovationScore": 0,
            "technicalComplexityScore": 6,
            "businessPotentialScore": 8,
            "strengths": ["a"],
            "weaknesses": ["b"],
            "suggestedQuestions": ["c"]
        }"#,
    );
    let judge = JudgeService::new(provider);

    let err = judge.analyze(&ecotrack()).await.unwrap_err();
    match err {
        JudgeError::MalformedResponse { message } => {
            assert!(message.contains("innovationScore"));
        }
        other => panic!("Expected MalformedResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn test_analyze_maps_provider_failures() {
    let provider = MockProvider::new();
    provider.push_err(LlmError::NetworkError {
        message: "connection refused".to_string(),
    });
    provider.push_err(LlmError::Other {
        message: "glitch".to_string(),
    });
    let judge = JudgeService::new(provider);

    let err = judge.analyze(&ecotrack()).await.unwrap_err();
    assert!(matches!(err, JudgeError::Transport { .. }));

    let err = judge.analyze(&ecotrack()).await.unwrap_err();
    assert!(matches!(err, JudgeError::Unknown { .. }));
}

// ============================================================================
// Taglines
// ============================================================================

#[tokio::test]
async fn test_tagline_trims_but_keeps_text_verbatim() {
    let provider = MockProvider::new();
    // The "no quotes" instruction is prompt-only; a stray quote survives
    provider.push_ok("  \"Soil truth, straight from the ground.\"\n");
    let judge = JudgeService::new(provider.clone());

    let tagline = judge.generate_tagline(&ecotrack()).await.unwrap();
    assert_eq!(tagline, "\"Soil truth, straight from the ground.\"");

    let request = provider.last_request().unwrap();
    assert_eq!(request.temperature, Some(0.8));
    assert_eq!(request.max_output_tokens, Some(50));
    assert!(request.response_schema.is_none());
    assert!(request.prompt.contains("without any quotes"));
}

#[tokio::test]
async fn test_tagline_failure_carries_message() {
    let provider = MockProvider::new();
    provider.push_err(LlmError::ServerError {
        message: "backend overloaded".to_string(),
        status: Some(503),
    });
    let judge = JudgeService::new(provider);

    let err = judge.generate_tagline(&ecotrack()).await.unwrap_err();
    match err {
        JudgeError::Transport { message } => assert!(!message.is_empty()),
        other => panic!("Expected Transport, got {:?}", other),
    }
}
