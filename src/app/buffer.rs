/// Read a TextBuffer's contents without leaking the C-side copy.
///
/// fltk-rs's `TextBuffer::text()` copies the malloc'd string returned by
/// `Fl_Text_Buffer_text()` into a Rust String but never frees the original
/// pointer, leaking the full buffer size on every call. Going through the
/// FFI directly lets us free it.
pub fn buffer_text(buf: &fltk::text::TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: the inner pointer is valid while `buf` lives, the returned C
    // string is null-terminated (or null when the buffer is empty), and the
    // free() matches FLTK's malloc.
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}
