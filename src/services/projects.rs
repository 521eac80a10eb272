//! Project Store
//!
//! In-memory store for hackathon submissions, seeded from mock data. State
//! lives only for the process lifetime; there is no persistence layer.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use hackboard_core::{Project, ProjectStatus};
use tracing::debug;
use uuid::Uuid;

use crate::models::analytics::DashboardStats;
use crate::models::project::{NewProjectRequest, ProjectFilter};
use crate::utils::error::{AppError, AppResult};

/// Append-only in-memory project store.
///
/// New submissions are prepended so the most recent entry lists first,
/// matching the dashboard's ordering.
pub struct ProjectStore {
    projects: RwLock<Vec<Project>>,
}

impl ProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(Vec::new()),
        }
    }

    /// Create a store seeded with the mock submissions.
    pub fn with_seed_data() -> Self {
        Self {
            projects: RwLock::new(seed_projects()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Project>> {
        // Writers never panic while holding the lock; recover if poisoned
        self.projects.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Project>> {
        self.projects.write().unwrap_or_else(|e| e.into_inner())
    }

    /// All projects, most recent first.
    pub fn list(&self) -> Vec<Project> {
        self.read().clone()
    }

    /// Look up a project by id.
    pub fn get(&self, id: &str) -> AppResult<Project> {
        self.read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Project not found: {}", id)))
    }

    /// Register a new submission from form input.
    pub fn add(&self, request: NewProjectRequest) -> AppResult<Project> {
        request.validate()?;

        let project = Project::new(
            Uuid::new_v4().to_string(),
            request.name.trim(),
            request.description.trim(),
            request.team_members,
            ProjectStatus::Submitted,
            request.repo_url,
            request.demo_url,
        );

        debug!(project_id = %project.id, name = %project.name, "Registered new submission");
        self.write().insert(0, project.clone());
        Ok(project)
    }

    /// Projects passing the given status/search filter.
    pub fn filter(&self, filter: &ProjectFilter) -> Vec<Project> {
        self.read()
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }

    /// Projects that placed (Winner or Finalist).
    pub fn winners(&self) -> Vec<Project> {
        self.read()
            .iter()
            .filter(|p| p.status.is_winner_tier())
            .cloned()
            .collect()
    }

    /// Aggregate statistics for the dashboard overview.
    pub fn stats(&self) -> DashboardStats {
        let projects = self.read();
        DashboardStats {
            total_projects: projects.len(),
            total_participants: projects.iter().map(|p| p.team_members.len()).sum(),
            submissions_received: projects.iter().filter(|p| p.status.is_submitted()).count(),
            judging_count: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Judging)
                .count(),
        }
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock submissions shown before any real data is entered.
fn seed_projects() -> Vec<Project> {
    vec![
        Project::new(
            "proj-001",
            "EcoTrack",
            "IoT soil sensor dashboard that helps urban farmers monitor soil health in real time.",
            vec!["Maya Chen".into(), "Leo Park".into(), "Sofia Reyes".into()],
            ProjectStatus::Judging,
            "https://github.com/x/ecotrack",
            "https://demo.ecotrack.io",
        ),
        Project::new(
            "proj-002",
            "MediMatch",
            "Matches clinical trial openings to patient profiles using anonymized health records.",
            vec!["Arjun Patel".into(), "Nina Sorokin".into()],
            ProjectStatus::Winner,
            "https://github.com/x/medimatch",
            "https://medimatch.demo.dev",
        ),
        Project::new(
            "proj-003",
            "QuickQueue",
            "Virtual waiting room widget that lets small businesses manage walk-in traffic.",
            vec!["Tom Okafor".into()],
            ProjectStatus::Submitted,
            "https://github.com/x/quickqueue",
            "https://quickqueue.vercel.app",
        ),
        Project::new(
            "proj-004",
            "PolyglotPal",
            "Real-time conversation practice with AI partners in fourteen languages.",
            vec!["Emma Lindqvist".into(), "Yuki Tanaka".into(), "Omar Haddad".into()],
            ProjectStatus::Finalist,
            "https://github.com/x/polyglotpal",
            "https://polyglotpal.app",
        ),
        Project::new(
            "proj-005",
            "GridSense",
            "Neighborhood-level power outage prediction from smart meter telemetry.",
            vec!["Lucas Meyer".into(), "Priya Nair".into()],
            ProjectStatus::InProgress,
            "https://github.com/x/gridsense",
            "https://gridsense.demo.io",
        ),
    ]
}
