//! FLTK widgets: the main window, its menu and theme painting.

pub mod main_window;
pub mod menu;
pub mod theme;
