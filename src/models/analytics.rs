//! Analytics Models
//!
//! Aggregate statistics shown on the dashboard overview.

use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total number of registered projects
    pub total_projects: usize,
    /// Sum of team sizes across all projects
    pub total_participants: usize,
    /// Projects past the InProgress state
    pub submissions_received: usize,
    /// Projects currently in judging
    pub judging_count: usize,
}
