use super::document::DocumentKind;
use super::gemini::GenerationError;

/// All messages that flow through the FLTK channel.
/// Widget callbacks send one of these; the dispatch loop in main handles
/// them. `GenerationFinished` is the only one sent from a worker thread.
#[derive(Debug, Clone)]
pub enum Message {
    // Input panel
    SelectKind(DocumentKind),
    ToggleFastModel,
    Generate,

    // Output panel
    ExportMarkdown,

    // Background generation outcome
    GenerationFinished(Result<String, GenerationError>),

    // Chrome
    ToggleDarkMode,
    ShowAbout,
    Quit,
}
