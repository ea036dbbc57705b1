use fltk::{app::Sender, dialog, menu::MenuBar, prelude::*, window::Window};

use super::controllers::context::ThemeContext;
use super::controllers::provider::ThemeProvider;
use super::domain::messages::Message;
use super::domain::settings::ShellConfig;
use super::domain::theme::ThemePreference;
use super::infrastructure::bridge::{HostBridge, ThemeBridge};
use super::infrastructure::platform::PlatformProbe;
use super::infrastructure::storage::{JsonFileStore, MemoryStore};
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::{build_menu, theme_item_path};
use crate::ui::theme::WidgetRoot;

pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    pub sender: Sender<Message>,
    pub theme: ThemeContext,
}

impl AppState {
    /// Wire the theme provider to the window and build the menu.
    pub fn new(widgets: MainWidgets, sender: Sender<Message>, config: &ShellConfig) -> Self {
        let MainWidgets {
            wind,
            mut menu,
            body,
        } = widgets;

        let root = WidgetRoot::new(wind.clone(), menu.clone(), body);
        let bridge = HostBridge::connect(sender, config).map(|b| Box::new(b) as Box<dyn ThemeBridge>);
        let provider = match JsonFileStore::open_default() {
            Ok(store) => ThemeProvider::new(config, store, root, bridge, PlatformProbe),
            Err(e) => {
                log::warn!("Theme preference will not be saved: {}", e);
                ThemeProvider::new(config, MemoryStore::new(), root, bridge, PlatformProbe)
            }
        };

        build_menu(&mut menu, &sender, provider.theme());

        Self {
            window: wind,
            menu,
            sender,
            theme: ThemeContext::new(provider),
        }
    }

    /// Handle one message. Returns false when the app should quit.
    pub fn dispatch(&mut self, msg: Message) -> bool {
        match msg {
            Message::SetTheme(preference) => self.set_theme(preference),
            Message::Theme(event) => match self.theme.use_theme_mut() {
                Ok(provider) => provider.handle_event(event),
                Err(e) => log::error!("{}", e),
            },
            Message::Quit => return false,
        }
        true
    }

    pub fn set_theme(&mut self, preference: ThemePreference) {
        let result = self
            .theme
            .use_theme_mut()
            .and_then(|provider| provider.set_theme(preference));
        if let Err(e) = result {
            log::error!("{}", e);
            dialog::alert_default(&e.to_string());
        }
        self.sync_theme_menu();
    }

    /// Check the radio item of the active preference.
    fn sync_theme_menu(&self) {
        let Ok(provider) = self.theme.use_theme() else {
            return;
        };
        let active = provider.theme();
        for &preference in ThemePreference::all() {
            self.update_menu_checkbox(theme_item_path(preference), preference == active);
        }
    }

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }
}
