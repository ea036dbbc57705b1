//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (themes, root element, config, messages)
//! - `controllers/` - Orchestration (ThemeProvider, ThemeContext)
//! - `infrastructure/` - External integrations (bridge, platform probe, storage, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod state;

// Re-exports for convenient external access
pub use controllers::context::ThemeContext;
pub use controllers::provider::ThemeProvider;
pub use domain::{ClassList, EffectiveTheme, Message, ShellConfig, ThemeEvent, ThemePreference, ThemeRoot};
pub use infrastructure::bridge::{EventSink, HostBridge, Subscription, ThemeBridge};
pub use infrastructure::error::{AppError, BridgeError, ThemeError};
pub use infrastructure::platform::{PlatformProbe, SystemProbe, detect_system_dark_mode};
pub use infrastructure::storage::{JsonFileStore, MemoryStore, PreferenceStore};
