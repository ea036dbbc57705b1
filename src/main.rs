use fltk::{app, prelude::*};

use lumen_shell::app::domain::{Message, ShellConfig};
use lumen_shell::app::state::AppState;
use lumen_shell::ui::main_window::build_main_window;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let config = ShellConfig::load();
    let widgets = build_main_window();
    let mut state = AppState::new(widgets, sender, &config);

    state.window.show();

    #[cfg(target_os = "windows")]
    if let Ok(Some(theme)) = state.theme.use_theme().map(|p| p.effective_theme()) {
        lumen_shell::ui::theme::set_windows_titlebar_theme(&state.window, theme.is_dark());
    }

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if !state.dispatch(msg) {
                app.quit();
            }
        }
    }
}
