use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use chrono::Utc;
use fltk::{
    app::Sender,
    button::{Button, CheckButton, RadioRoundButton},
    dialog,
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextDisplay, TextEditor},
    window::Window,
};

use super::buffer::buffer_text;
use super::document::DocumentKind;
use super::gemini::{GenerationError, TextGenerator};
use super::markdown::project;
use super::messages::Message;
use super::session::{INITIAL_BRIEF, OUTPUT_PLACEHOLDER, OutputView, Session};
use super::settings::{AppSettings, ThemeMode};
use crate::ui::main_window::MainWidgets;
use crate::ui::output_view::{
    STYLE_ERROR, STYLE_MUTED, render_blocks, render_notice, style_table,
};
use crate::ui::theme::palette;

/// Owns the widgets and the session record, and applies every message from
/// the dispatch loop. All mutation happens here, on the main thread; worker
/// threads only ever send a `GenerationFinished` message back.
pub struct AppState {
    pub session: Session,
    pub window: Window,
    pub menu: MenuBar,
    pub header: Frame,
    pub tagline: Frame,
    pub input_label: Frame,
    pub input: TextEditor,
    pub input_buffer: TextBuffer,
    pub kind_buttons: Vec<(DocumentKind, RadioRoundButton)>,
    pub fast_toggle: CheckButton,
    pub generate_btn: Button,
    pub output_title: Frame,
    pub export_btn: Button,
    pub output: TextDisplay,
    pub output_buffer: TextBuffer,
    pub style_buffer: TextBuffer,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<AppSettings>>,
    pub dark_mode: bool,
    client: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
        client: Arc<dyn TextGenerator>,
    ) -> Self {
        let MainWidgets {
            wind,
            menu,
            header,
            tagline,
            input_label,
            input,
            input_buffer,
            kind_buttons,
            fast_toggle,
            generate_btn,
            output_title,
            export_btn,
            output,
            output_buffer,
            style_buffer,
        } = widgets;

        let dark_mode = settings.borrow().theme_mode == ThemeMode::Dark;
        let mut state = Self {
            session: Session::new(),
            window: wind,
            menu,
            header,
            tagline,
            input_label,
            input,
            input_buffer,
            kind_buttons,
            fast_toggle,
            generate_btn,
            output_title,
            export_btn,
            output,
            output_buffer,
            style_buffer,
            sender,
            settings,
            dark_mode,
            client,
        };

        state.input_buffer.set_text(INITIAL_BRIEF);
        let font_size = state.settings.borrow().font_size as i32;
        state.input.set_text_size(font_size);
        state.output.set_text_size(font_size);

        for (kind, btn) in &mut state.kind_buttons {
            if *kind == state.session.kind {
                btn.set_value(true);
            }
        }
        state.fast_toggle.set_value(state.session.use_fast_model);
        state.output_title.set_label(state.session.kind.label());

        state.apply_theme();
        state.refresh_output();
        state
    }

    pub fn show(&mut self) {
        self.window.show();
    }

    // --- Input panel ---

    pub fn select_kind(&mut self, kind: DocumentKind) {
        self.session.set_kind(kind);
        self.output_title.set_label(kind.label());
        self.window.redraw();
    }

    pub fn toggle_fast_model(&mut self) {
        self.session.use_fast_model = self.fast_toggle.value();
    }

    /// Stage a request and hand it to a worker thread. The thread reports
    /// back through the channel; nothing else runs while a request is in
    /// flight, and a request is never aborted once dispatched.
    pub fn generate(&mut self) {
        let source = buffer_text(&self.input_buffer);
        if let Some(request) = self.session.begin(&source) {
            let client = Arc::clone(&self.client);
            let sender = self.sender;
            std::thread::spawn(move || {
                let result = client.generate(request.model, &request.prompt);
                sender.send(Message::GenerationFinished(result));
            });
        }
        self.refresh_output();
    }

    pub fn generation_finished(&mut self, result: Result<String, GenerationError>) {
        self.session.finish(result);
        self.refresh_output();
    }

    // --- Output panel ---

    pub fn export_markdown(&mut self) {
        if !self.session.can_export() {
            return;
        }
        let suggested = self.session.export_filename(Utc::now());
        let directory = self.settings.borrow().last_export_directory.clone();
        let Some(path) =
            crate::ui::file_dialogs::native_export_dialog(directory.as_deref(), &suggested)
        else {
            return;
        };

        if let Some(parent) = Path::new(&path).parent() {
            let mut s = self.settings.borrow_mut();
            s.last_export_directory = Some(parent.to_string_lossy().to_string());
            let _ = s.save();
        }

        if let Err(e) = fs::write(&path, &self.session.last_output) {
            dialog::alert_default(&format!("Error exporting file: {}", e));
        }
    }

    /// Re-render the output region from the session record and sync the
    /// generate/export controls with the request lifecycle.
    pub fn refresh_output(&mut self) {
        let font_size = self.settings.borrow().font_size as i32;
        let rendered = match self.session.output_view() {
            OutputView::Pending => render_notice("Generating\u{2026}", STYLE_MUTED),
            OutputView::Error(message) => render_notice(message, STYLE_ERROR),
            OutputView::Placeholder => render_notice(OUTPUT_PLACEHOLDER, STYLE_MUTED),
            OutputView::Content(text) => render_blocks(&project(text)),
        };
        self.output_buffer.set_text(&rendered.text);
        self.style_buffer.set_text(&rendered.style);
        self.output
            .set_highlight_data(self.style_buffer.clone(), style_table(font_size, self.dark_mode));

        if self.session.is_pending {
            self.generate_btn.set_label("Generating\u{2026}");
            self.generate_btn.deactivate();
        } else {
            self.generate_btn.set_label("Generate");
            self.generate_btn.activate();
        }

        if self.session.can_export() {
            self.export_btn.show();
        } else {
            self.export_btn.hide();
        }

        self.window.redraw();
    }

    // --- Chrome ---

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        {
            let mut s = self.settings.borrow_mut();
            s.theme_mode = if self.dark_mode { ThemeMode::Dark } else { ThemeMode::Light };
            let _ = s.save();
        }
        self.apply_theme();
        self.refresh_output();
    }

    pub fn apply_theme(&mut self) {
        let p = palette(self.dark_mode);

        self.window.set_color(p.window_bg);
        self.menu.set_color(p.surface);
        self.menu.set_text_color(p.text);
        self.menu.set_selection_color(p.selection);

        self.header.set_label_color(p.strong);
        self.tagline.set_label_color(p.muted);
        self.input_label.set_label_color(p.text);
        self.output_title.set_label_color(p.strong);

        self.input.set_color(p.field_bg);
        self.input.set_text_color(p.text);
        self.input.set_cursor_color(p.strong);
        self.input.set_selection_color(p.selection);
        self.output.set_color(p.field_bg);

        for (_, btn) in &mut self.kind_buttons {
            btn.set_label_color(p.text);
            btn.set_selection_color(p.accent);
        }
        self.fast_toggle.set_label_color(p.text);
        self.fast_toggle.set_selection_color(p.accent);

        self.generate_btn.set_color(p.action);
        self.generate_btn.set_label_color(Color::White);
        self.export_btn.set_color(p.surface);
        self.export_btn.set_label_color(p.text);

        self.window.redraw();
    }
}
