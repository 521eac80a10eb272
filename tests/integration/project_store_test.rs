//! Project Store and Selection Flow Tests
//!
//! Dashboard-level flows across the store, the app state, and session
//! opening.

use hackboard::models::project::{NewProjectRequest, ProjectFilter};
use hackboard::state::AppState;
use hackboard::AppConfig;
use hackboard_core::ProjectStatus;

use crate::support::MockProvider;

fn app_state() -> AppState {
    AppState::with_provider(AppConfig::default(), MockProvider::new())
}

#[test]
fn test_dashboard_stats_from_seed_data() {
    let state = app_state();
    let stats = state.store().stats();
    assert_eq!(stats.total_projects, 5);
    assert_eq!(stats.submissions_received, 4);
    assert_eq!(stats.judging_count, 1);
}

#[test]
fn test_filter_search_is_case_insensitive() {
    let state = app_state();
    let results = state.store().filter(&ProjectFilter {
        status: None,
        search: Some("ECOTRACK".to_string()),
    });
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "proj-001");
}

#[test]
fn test_add_submission_then_select_it() {
    let state = app_state();
    let project = state
        .store()
        .add(NewProjectRequest {
            name: "NightOwl".to_string(),
            description: "Sleep cycle tracker for shift workers".to_string(),
            team_members: vec!["Dana Wolf".to_string()],
            repo_url: "https://github.com/x/nightowl".to_string(),
            demo_url: "https://nightowl.demo.io".to_string(),
        })
        .unwrap();

    assert_eq!(project.status, ProjectStatus::Submitted);
    assert_eq!(state.store().stats().total_projects, 6);

    let snapshot = state.select_project(&project.id).unwrap();
    assert_eq!(snapshot.project_id, project.id);
    assert!(snapshot.analysis.is_idle());
}

#[test]
fn test_winners_view_contents() {
    let state = app_state();
    let winners = state.store().winners();
    let names: Vec<&str> = winners.iter().map(|p| p.name.as_str()).collect();
    assert!(names.contains(&"MediMatch"));
    assert!(names.contains(&"PolyglotPal"));
    assert_eq!(winners.len(), 2);
}
