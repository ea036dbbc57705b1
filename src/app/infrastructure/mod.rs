//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - The host OS theme bridge
//! - Platform-specific detection
//! - Preference storage
//! - Error types

pub mod bridge;
pub mod error;
pub mod platform;
pub mod storage;
