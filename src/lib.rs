//! LumenShell - a minimal desktop shell with light, dark and system themes.
//!
//! The interesting part lives in [`app::controllers::provider::ThemeProvider`];
//! everything else is the FLTK window around it.

pub mod app;
pub mod ui;
