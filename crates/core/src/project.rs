//! Project Model
//!
//! Data structures for hackathon submissions. Field names serialize in
//! camelCase to stay compatible with the dashboard front-end JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a hackathon submission.
///
/// Display strings match the labels shown in the dashboard UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Submitted,
    Judging,
    Finalist,
    Winner,
}

impl ProjectStatus {
    /// Whether the team has handed in their project (anything past InProgress).
    pub fn is_submitted(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Whether the project placed (Winner or Finalist).
    pub fn is_winner_tier(&self) -> bool {
        matches!(self, Self::Winner | Self::Finalist)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InProgress => "In Progress",
            Self::Submitted => "Submitted",
            Self::Judging => "Judging",
            Self::Finalist => "Finalist",
            Self::Winner => "Winner",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in progress" | "in_progress" => Ok(Self::InProgress),
            "submitted" => Ok(Self::Submitted),
            "judging" => Ok(Self::Judging),
            "finalist" => Ok(Self::Finalist),
            "winner" => Ok(Self::Winner),
            _ => Err(format!("Unknown project status: {}", s)),
        }
    }
}

/// One hackathon team's submission record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Opaque unique identifier, stable for the project's lifetime
    pub id: String,
    /// Project display name
    pub name: String,
    /// Free-text project description
    pub description: String,
    /// Display names of the team members
    pub team_members: Vec<String>,
    /// Set once at creation, immutable afterwards
    pub submission_time: DateTime<Utc>,
    /// Current lifecycle state
    pub status: ProjectStatus,
    /// Source repository link
    pub repo_url: String,
    /// Live demo link
    pub demo_url: String,
}

impl Project {
    /// Create a new project record with the given identity and links.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        team_members: Vec<String>,
        status: ProjectStatus,
        repo_url: impl Into<String>,
        demo_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            team_members,
            submission_time: Utc::now(),
            status,
            repo_url: repo_url.into(),
            demo_url: demo_url.into(),
        }
    }
}
