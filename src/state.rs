//! Application State
//!
//! Wires the project store, the Gemini-backed judge, and the evaluation
//! controller together, and exposes the selection boundary the view layer
//! drives (select/deselect project).

use std::sync::Arc;

use hackboard_llm::{GeminiProvider, TextGenerator};
use tracing::debug;

use crate::models::settings::AppConfig;
use crate::services::evaluation::{EvaluationController, SessionSnapshot};
use crate::services::judge::JudgeService;
use crate::services::projects::ProjectStore;
use crate::utils::error::AppResult;

/// Top-level application state.
pub struct AppState {
    config: AppConfig,
    store: Arc<ProjectStore>,
    evaluation: EvaluationController,
}

impl AppState {
    /// Build the state with a Gemini provider derived from `config`.
    pub fn new(config: AppConfig) -> Self {
        let provider: Arc<dyn TextGenerator> =
            Arc::new(GeminiProvider::new(config.provider_config()));
        Self::with_provider(config, provider)
    }

    /// Build the state with an explicit provider (used by tests to inject
    /// mock providers).
    pub fn with_provider(config: AppConfig, provider: Arc<dyn TextGenerator>) -> Self {
        let judge = Arc::new(JudgeService::new(provider));
        Self {
            config,
            store: Arc::new(ProjectStore::with_seed_data()),
            evaluation: EvaluationController::new(judge),
        }
    }

    /// Build the state from the process environment.
    pub fn from_env() -> Self {
        Self::new(AppConfig::from_env())
    }

    /// The active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The project store.
    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// The evaluation session controller.
    pub fn evaluation(&self) -> &EvaluationController {
        &self.evaluation
    }

    /// Select a project for evaluation: looks it up in the store and opens
    /// a fresh session for it. Any previous session is replaced.
    pub fn select_project(&self, id: &str) -> AppResult<SessionSnapshot> {
        let project = self.store.get(id)?;
        debug!(project_id = %project.id, "Project selected");
        Ok(self.evaluation.open_session(project))
    }

    /// Deselect the current project, ending its session.
    pub fn deselect_project(&self) {
        self.evaluation.close_session();
    }
}
