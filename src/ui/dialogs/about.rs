use fltk::{
    button::Button,
    dialog,
    enums::{Align, Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

const PROJECT_URL: &str = "https://github.com/briefpad/briefpad";

/// Show About dialog
pub fn show_about_dialog() {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog_window = Window::default()
        .with_size(420, 340)
        .with_label("About BriefPad")
        .center_screen();
    dialog_window.make_modal(true);

    let mut flex = Flex::new(10, 10, 400, 320, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label("BriefPad");
    title.set_label_size(24);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 36);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Version {}", version));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 24);

    let mut desc_frame = Frame::default();
    desc_frame.set_label("Turns raw project notes into polished documents");
    desc_frame.set_label_size(12);
    desc_frame.set_label_color(Color::from_rgb(100, 100, 100));
    flex.fixed(&desc_frame, 24);

    let info_text = "Copyright \u{00a9} 2026 BriefPad Contributors\n\
         Licensed under the MIT License\n\n\
         Built with Rust and FLTK\n\
         Documents generated with the Gemini API";

    let mut info_frame = Frame::default();
    info_frame.set_label(info_text);
    info_frame.set_label_size(12);
    info_frame.set_align(Align::Center | Align::Inside);
    flex.fixed(&info_frame, 110);

    let mut button_row = Flex::default();
    button_row.set_type(fltk::group::FlexType::Row);
    button_row.set_spacing(10);
    let mut project_btn = Button::default().with_label("Project Page");
    let mut close_btn = Button::default().with_label("Close");
    button_row.end();
    flex.fixed(&button_row, 35);

    flex.end();
    dialog_window.end();

    project_btn.set_callback(move |_| {
        if let Err(e) = open::that(PROJECT_URL) {
            dialog::alert_default(&format!("Failed to open browser: {}", e));
        }
    });

    let mut dialog_close = dialog_window.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog_window.show();
    super::run_dialog(&dialog_window);
}
