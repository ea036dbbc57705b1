//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, infrastructure, and the UI:
//! - Theme resolution (`ThemeProvider`)
//! - The scope handing the provider to the UI (`ThemeContext`)

pub mod context;
pub mod provider;
