//! Business Logic Services
//!
//! - `projects` - in-memory submission store, filtering, dashboard stats
//! - `judge` - AI analysis client (structured judging + taglines)
//! - `evaluation` - per-project evaluation session state machine

pub mod evaluation;
pub mod judge;
pub mod projects;
