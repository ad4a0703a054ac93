use fltk::dialog::{FileDialogType, NativeFileChooser};

/// Native save dialog preset with the suggested export filename.
/// Returns the chosen path, or None if the user cancelled.
pub fn native_export_dialog(directory: Option<&str>, suggested_name: &str) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_filter("Markdown\t*.md");
    if let Some(dir) = directory {
        let _ = nfc.set_directory(&dir);
    }
    nfc.set_preset_file(suggested_name);
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
