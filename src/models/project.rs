//! Project Requests
//!
//! Request structures for creating and querying submissions. The `Project`
//! entity itself lives in `hackboard-core`.

use hackboard_core::{Project, ProjectStatus};
use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};

/// Field capture for a new submission from the submission form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub team_members: Vec<String>,
    #[serde(default)]
    pub repo_url: String,
    #[serde(default)]
    pub demo_url: String,
}

impl NewProjectRequest {
    /// Validate the form fields; name and description are required.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Project name must not be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::validation(
                "Project description must not be empty",
            ));
        }
        Ok(())
    }
}

/// Filter/search criteria for the submissions list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectFilter {
    /// Restrict to a single status; `None` means "All"
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    /// Case-insensitive match against project name or team member names
    #[serde(default)]
    pub search: Option<String>,
}

impl ProjectFilter {
    /// Whether `project` passes this filter.
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(status) = self.status {
            if project.status != status {
                return false;
            }
        }
        match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                project.name.to_lowercase().contains(&term)
                    || project
                        .team_members
                        .join(", ")
                        .to_lowercase()
                        .contains(&term)
            }
        }
    }
}
