//! Hackboard Core
//!
//! Foundational types shared across the Hackboard workspace: the hackathon
//! domain model, the AI analysis result record, and core error types. This
//! crate has zero dependencies on application-level code (HTTP clients, LLM
//! providers, etc.).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `project` - Hackathon submission model (`Project`, `ProjectStatus`)
//! - `analysis` - Structured judging output (`ProjectAnalysis`)
//!
//! ## Design Principles
//!
//! 1. **Minimal dependencies (serde/chrono/thiserror)** - keeps build times low
//! 2. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod analysis;
pub mod error;
pub mod project;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Domain Model ───────────────────────────────────────────────────────
pub use project::{Project, ProjectStatus};

// ── Analysis Output ────────────────────────────────────────────────────
pub use analysis::ProjectAnalysis;
