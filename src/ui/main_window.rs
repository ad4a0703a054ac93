use fltk::{
    app::{self, Sender},
    button::{Button, CheckButton, RadioRoundButton},
    enums::{Align, Event, Font, Shortcut},
    frame::Frame,
    group::{Flex, FlexType},
    menu::{MenuBar, MenuFlag},
    prelude::*,
    text::{TextBuffer, TextDisplay, TextEditor, WrapMode},
    window::Window,
};

use crate::app::document::DocumentKind;
use crate::app::gemini::FAST_MODEL;
use crate::app::messages::Message;

const WINDOW_WIDTH: i32 = 980;
const WINDOW_HEIGHT: i32 = 640;

pub struct MainWidgets {
    pub wind: Window,
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
}

pub fn build_main_window(sender: &Sender<Message>, initial_dark: bool) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, "BriefPad");
    wind.set_xclass("BriefPad");

    let mut flex = Flex::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    flex.set_type(FlexType::Column);

    let mut menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);
    build_menu(&mut menu, sender, initial_dark);

    let mut header = Frame::default().with_label("BriefPad");
    header.set_label_font(Font::HelveticaBold);
    header.set_label_size(20);
    header.set_align(Align::Left | Align::Inside);
    flex.fixed(&header, 30);

    let mut tagline = Frame::default().with_label("AI-powered project documents");
    tagline.set_label_size(12);
    tagline.set_align(Align::Left | Align::Inside);
    flex.fixed(&tagline, 18);

    let mut body = Flex::default();
    body.set_type(FlexType::Row);
    body.set_margin(12);
    body.set_spacing(16);

    // Left panel: brief input, kind selector, model toggle, generate.
    let mut left = Flex::default();
    left.set_type(FlexType::Column);
    left.set_spacing(10);

    let mut input_label = Frame::default().with_label("Meeting Notes / Project Brief");
    input_label.set_label_font(Font::HelveticaBold);
    input_label.set_label_size(14);
    input_label.set_align(Align::Left | Align::Inside);
    left.fixed(&input_label, 22);

    let input_buffer = TextBuffer::default();
    let mut input = TextEditor::default();
    input.set_buffer(input_buffer.clone());
    input.wrap_mode(WrapMode::AtBounds, 0);

    let mut kind_row = Flex::default();
    kind_row.set_type(FlexType::Row);
    let mut kind_buttons = Vec::new();
    for kind in DocumentKind::ALL {
        let mut btn = RadioRoundButton::default().with_label(kind.label());
        btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::SelectKind(kind))
        });
        kind_buttons.push((kind, btn));
    }
    kind_row.end();
    left.fixed(&kind_row, 28);

    let mut fast_toggle = CheckButton::default()
        .with_label(&format!("Fast AI responses ({})", FAST_MODEL));
    fast_toggle.set_callback({
        let s = *sender;
        move |_| s.send(Message::ToggleFastModel)
    });
    left.fixed(&fast_toggle, 26);

    let mut generate_btn = Button::default().with_label("Generate");
    generate_btn.set_label_font(Font::HelveticaBold);
    generate_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::Generate)
    });
    left.fixed(&generate_btn, 40);

    left.end();

    // Right panel: kind title, export action, rendered output.
    let mut right = Flex::default();
    right.set_type(FlexType::Column);
    right.set_spacing(10);

    let mut title_row = Flex::default();
    title_row.set_type(FlexType::Row);

    let mut output_title = Frame::default().with_label(DocumentKind::default().label());
    output_title.set_label_font(Font::HelveticaBold);
    output_title.set_label_size(14);
    output_title.set_align(Align::Left | Align::Inside);

    let mut export_btn = Button::default().with_label("Export .md");
    export_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::ExportMarkdown)
    });
    export_btn.hide();
    title_row.fixed(&export_btn, 100);
    title_row.end();
    right.fixed(&title_row, 28);

    let output_buffer = TextBuffer::default();
    let style_buffer = TextBuffer::default();
    let mut output = TextDisplay::default();
    output.set_buffer(output_buffer.clone());
    output.wrap_mode(WrapMode::AtBounds, 0);

    right.end();
    body.end();

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Route the window manager's close into the dispatch loop.
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::Quit);
            }
        }
    });

    MainWidgets {
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
    }
}

fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, initial_dark: bool) {
    menu.add("File/Export Markdown...", Shortcut::Ctrl | 'e', MenuFlag::Normal, {
        let s = *sender;
        move |_| s.send(Message::ExportMarkdown)
    });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, {
        let s = *sender;
        move |_| s.send(Message::Quit)
    });

    menu.add("Project/Generate", Shortcut::Ctrl | 'g', MenuFlag::Normal, {
        let s = *sender;
        move |_| s.send(Message::Generate)
    });

    let dm_flag = if initial_dark { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::None, dm_flag, {
        let s = *sender;
        move |_| s.send(Message::ToggleDarkMode)
    });

    menu.add("Help/About BriefPad", Shortcut::None, MenuFlag::Normal, {
        let s = *sender;
        move |_| s.send(Message::ShowAbout)
    });
}
