//! Hackboard - Dashboard Service Library
//!
//! This library provides the service layer for the hackathon organizer
//! dashboard. It includes:
//! - In-memory project store with filtering, search, and dashboard stats
//! - AI-assisted judging: structured project analysis and tagline generation
//! - Per-project evaluation sessions with single-flight state tracking
//! - Application state wiring and configuration

pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export models
pub use models::analytics::DashboardStats;
pub use models::project::{NewProjectRequest, ProjectFilter};
pub use models::settings::AppConfig;

// Re-export services
pub use services::evaluation::{EvaluationController, OperationState, SessionSnapshot};
pub use services::judge::{JudgeError, JudgeService};
pub use services::projects::ProjectStore;

pub use state::AppState;
pub use utils::error::{AppError, AppResult};
