//! Evaluation Session Integration Tests
//!
//! Exercises the session state machine end to end: trigger transitions,
//! single-flight across both operations, operation isolation, and the
//! stale-response guard when the selection changes mid-flight.

use std::sync::Arc;
use std::time::Duration;

use hackboard::services::evaluation::{EvaluationController, OperationState};
use hackboard::services::judge::JudgeService;
use hackboard_core::{Project, ProjectStatus};
use hackboard_llm::LlmError;

use crate::support::{analysis_json, ecotrack, wait_for_calls, wait_for_state, MockProvider};

fn controller_with(provider: Arc<MockProvider>) -> EvaluationController {
    EvaluationController::new(Arc::new(JudgeService::new(provider)))
}

fn other_project() -> Project {
    Project::new(
        "proj-002",
        "MediMatch",
        "Clinical trial matching",
        vec!["Arjun Patel".to_string()],
        ProjectStatus::Submitted,
        "https://github.com/x/medimatch",
        "https://medimatch.demo.dev",
    )
}

#[tokio::test]
async fn test_analysis_success_scenario() {
    let provider = MockProvider::new();
    provider.push_ok(analysis_json());
    let controller = controller_with(provider);
    let mut rx = controller.subscribe();

    let opened = controller.open_session(ecotrack());
    assert!(opened.analysis.is_idle());
    assert!(opened.tagline.is_idle());

    controller.trigger_analysis();
    let snapshot = wait_for_state(&mut rx, |s| !s.analysis.is_pending() && !s.analysis.is_idle())
        .await;

    let analysis = snapshot.analysis.value().expect("analysis should succeed");
    assert_eq!(analysis.innovation_score, 7);
    assert_eq!(analysis.technical_complexity_score, 6);
    assert_eq!(analysis.business_potential_score, 8);
    assert_eq!(analysis.suggested_questions, vec!["g", "h", "i"]);
    // The other operation stays untouched
    assert!(snapshot.tagline.is_idle());
}

#[tokio::test]
async fn test_single_flight_across_both_operations() {
    let provider = MockProvider::new();
    provider.push_ok(analysis_json());
    provider.push_ok("A tagline.");
    let gate = provider.install_gate();
    let controller = controller_with(provider.clone());
    let mut rx = controller.subscribe();

    controller.open_session(ecotrack());
    controller.trigger_analysis();
    wait_for_calls(&provider, 1).await;

    // While the analysis is in flight, neither trigger may start a call
    controller.trigger_tagline();
    controller.trigger_analysis();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(provider.calls(), 1);

    let snapshot = controller.current_state().unwrap();
    assert!(snapshot.analysis.is_pending());
    assert!(snapshot.tagline.is_idle());

    gate.notify_one();
    let snapshot = wait_for_state(&mut rx, |s| !s.analysis.is_pending()).await;
    assert!(snapshot.analysis.value().is_some());

    // Once settled, the tagline trigger is accepted again
    controller.trigger_tagline();
    gate.notify_one();
    let snapshot = wait_for_state(&mut rx, |s| !s.tagline.is_idle() && !s.tagline.is_pending())
        .await;
    assert_eq!(snapshot.tagline.value().map(String::as_str), Some("A tagline."));
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_stale_completion_is_discarded() {
    let provider = MockProvider::new();
    provider.push_ok(analysis_json());
    let gate = provider.install_gate();
    let controller = controller_with(provider.clone());

    controller.open_session(ecotrack());
    controller.trigger_analysis();
    wait_for_calls(&provider, 1).await;

    // Organizer switches projects while the call is still in flight
    controller.open_session(other_project());
    gate.notify_one();
    tokio::time::sleep(Duration::from_millis(50)).await;

    let snapshot = controller.current_state().unwrap();
    assert_eq!(snapshot.project_id, "proj-002");
    assert!(snapshot.analysis.is_idle(), "stale result must not apply");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_completion_after_close_is_discarded() {
    let provider = MockProvider::new();
    provider.push_ok("A tagline.");
    let gate = provider.install_gate();
    let controller = controller_with(provider.clone());

    controller.open_session(ecotrack());
    controller.trigger_tagline();
    wait_for_calls(&provider, 1).await;

    controller.close_session();
    gate.notify_one();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(controller.current_state().is_none());
}

#[tokio::test]
async fn test_operations_fail_independently() {
    let provider = MockProvider::new();
    provider.push_err(LlmError::NetworkError {
        message: "request timed out".to_string(),
    });
    provider.push_ok(analysis_json());
    let controller = controller_with(provider.clone());
    let mut rx = controller.subscribe();

    controller.open_session(ecotrack());

    controller.trigger_tagline();
    let snapshot = wait_for_state(&mut rx, |s| s.tagline.failure().is_some()).await;
    assert!(!snapshot.tagline.failure().unwrap().is_empty());
    assert!(snapshot.analysis.is_idle());

    // The analysis still runs after the tagline failed
    controller.trigger_analysis();
    let snapshot = wait_for_state(&mut rx, |s| s.analysis.value().is_some()).await;
    assert!(snapshot.analysis.value().is_some());
    // The tagline's failure is preserved, not cleared by the other operation
    assert!(snapshot.tagline.failure().is_some());
}

#[tokio::test]
async fn test_retrigger_restarts_finished_operation() {
    let provider = MockProvider::new();
    provider.push_err(LlmError::ServerError {
        message: "backend overloaded".to_string(),
        status: Some(500),
    });
    provider.push_ok(analysis_json());
    let controller = controller_with(provider.clone());
    let mut rx = controller.subscribe();

    controller.open_session(ecotrack());

    controller.trigger_analysis();
    wait_for_state(&mut rx, |s| s.analysis.failure().is_some()).await;

    // Re-trigger discards the previous error and starts a fresh cycle
    controller.trigger_analysis();
    let snapshot = wait_for_state(&mut rx, |s| s.analysis.value().is_some()).await;
    assert_eq!(snapshot.analysis.value().unwrap().innovation_score, 7);
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_trigger_without_session_is_noop() {
    let provider = MockProvider::new();
    let controller = controller_with(provider.clone());

    controller.trigger_analysis();
    controller.trigger_tagline();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(provider.calls(), 0);
    assert!(controller.current_state().is_none());
}

#[tokio::test]
async fn test_opening_new_session_resets_state() {
    let provider = MockProvider::new();
    provider.push_ok(analysis_json());
    let controller = controller_with(provider.clone());
    let mut rx = controller.subscribe();

    controller.open_session(ecotrack());
    controller.trigger_analysis();
    wait_for_state(&mut rx, |s| s.analysis.value().is_some()).await;

    // A new selection always starts from Idle/Idle
    let snapshot = controller.open_session(other_project());
    assert_eq!(snapshot.project_id, "proj-002");
    assert!(matches!(snapshot.analysis, OperationState::Idle));
    assert!(matches!(snapshot.tagline, OperationState::Idle));
}
