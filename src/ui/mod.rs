pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod output_view;
pub mod theme;
