use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use fltk::app;

use brief_pad::app::gemini::{GeminiClient, TextGenerator};
use brief_pad::app::messages::Message;
use brief_pad::app::settings::{AppSettings, ThemeMode};
use brief_pad::app::state::AppState;
use brief_pad::ui::dialogs::about::show_about_dialog;
use brief_pad::ui::main_window::build_main_window;

fn main() {
    let fltk_app = app::App::default();

    let settings = Rc::new(RefCell::new(AppSettings::load()));
    let initial_dark = settings.borrow().theme_mode == ThemeMode::Dark;

    let (sender, receiver) = app::channel::<Message>();
    let widgets = build_main_window(&sender, initial_dark);

    // The API key is read once here; a missing key still lets the window
    // open, and every generation call reports the failure instead.
    let client: Arc<dyn TextGenerator> = Arc::new(GeminiClient::from_env());

    let mut state = AppState::new(widgets, sender, Rc::clone(&settings), client);
    state.show();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::SelectKind(kind) => state.select_kind(kind),
                Message::ToggleFastModel => state.toggle_fast_model(),
                Message::Generate => state.generate(),
                Message::GenerationFinished(result) => state.generation_finished(result),
                Message::ExportMarkdown => state.export_markdown(),
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::ShowAbout => show_about_dialog(),
                Message::Quit => fltk_app.quit(),
            }
        }
    }
}
