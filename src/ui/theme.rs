use fltk::{
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::domain::root::{ClassList, ThemeRoot};
use crate::app::domain::theme::EffectiveTheme;

/// Colors used for one effective theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: (u8, u8, u8),
    pub foreground: (u8, u8, u8),
    pub surface: (u8, u8, u8),
    pub selection: (u8, u8, u8),
}

impl Palette {
    pub fn for_theme(theme: EffectiveTheme) -> Self {
        match theme {
            EffectiveTheme::Dark => Self {
                background: (25, 25, 25),
                foreground: (220, 220, 220),
                surface: (35, 35, 35),
                selection: (60, 60, 60), // Hover color
            },
            EffectiveTheme::Light => Self {
                background: (240, 240, 240),
                foreground: (0, 0, 0),
                surface: (240, 240, 240),
                selection: (200, 200, 200),
            },
        }
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgb(r, g, b)
}

pub fn apply_theme(window: &mut Window, menu: &mut MenuBar, body: &mut Frame, theme: EffectiveTheme) {
    let palette = Palette::for_theme(theme);

    window.set_color(rgb(palette.background));
    window.set_label_color(rgb(palette.foreground));
    menu.set_color(rgb(palette.surface));
    menu.set_text_color(rgb(palette.foreground));
    menu.set_selection_color(rgb(palette.selection));
    body.set_color(rgb(palette.background));
    body.set_label_color(rgb(palette.foreground));

    window.redraw();
    menu.redraw();
    body.redraw();
}

/// The window's root: carries the marker classes and repaints on change.
pub struct WidgetRoot {
    classes: ClassList,
    window: Window,
    menu: MenuBar,
    body: Frame,
}

impl WidgetRoot {
    pub fn new(window: Window, menu: MenuBar, body: Frame) -> Self {
        Self {
            classes: ClassList::new(),
            window,
            menu,
            body,
        }
    }
}

impl ThemeRoot for WidgetRoot {
    fn apply_marker(&mut self, theme: EffectiveTheme) {
        let changed = self.classes.marker() != Some(theme);
        self.classes.apply_marker(theme);
        if !changed {
            return;
        }

        apply_theme(&mut self.window, &mut self.menu, &mut self.body, theme);
        self.body.set_label(&format!("{} theme", theme));
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, theme.is_dark());
    }

    fn marker(&self) -> Option<EffectiveTheme> {
        self.classes.marker()
    }
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    if !window.shown() {
        return;
    }

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
