//! Data Models
//!
//! Request/response structures and configuration for the dashboard services.
//! The domain entities themselves (`Project`, `ProjectAnalysis`) live in
//! `hackboard-core`.

pub mod analytics;
pub mod project;
pub mod settings;
