//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Theme preference and effective theme
//! - The themed root element
//! - Shell configuration
//! - Message types for the event system

pub mod messages;
pub mod root;
pub mod settings;
pub mod theme;

pub use messages::{Message, QueryTicket, SubscriptionId, ThemeEvent};
pub use root::{ClassList, ThemeRoot};
pub use settings::ShellConfig;
pub use theme::{EffectiveTheme, ThemePreference};
