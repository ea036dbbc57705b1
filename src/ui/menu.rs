use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::domain::theme::ThemePreference;

/// Menu path of the radio item for `preference`.
pub fn theme_item_path(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::Light => "View/Theme/Light",
        ThemePreference::Dark => "View/Theme/Dark",
        ThemePreference::System => "View/Theme/System",
    }
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, current: ThemePreference) {
    let s = sender;

    // File
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // View
    for &preference in ThemePreference::all() {
        let flag = if preference == current { MenuFlag::Radio | MenuFlag::Value } else { MenuFlag::Radio };
        menu.add(theme_item_path(preference), Shortcut::None, flag, { let s = *s; move |_| s.send(Message::SetTheme(preference)) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_item_paths_are_distinct() {
        let mut paths: Vec<_> = ThemePreference::all().iter().map(|p| theme_item_path(*p)).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.starts_with("View/Theme/")));
    }
}
