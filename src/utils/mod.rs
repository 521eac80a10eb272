//! Utility Modules

pub mod error;
