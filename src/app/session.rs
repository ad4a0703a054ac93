use chrono::{DateTime, Utc};

use super::document::DocumentKind;
use super::gemini::{GenerationError, model_for};
use super::prompt::build_prompt;

/// Shown when the user triggers generation with nothing to analyze.
pub const VALIDATION_ERROR: &str = "Please enter some text to analyze.";
/// Prefix for failures that come back from the generation client.
pub const ERROR_PREFIX: &str = "An error occurred";
/// Shown when a failure carries no reason at all.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";
/// Shown in the output region before anything has been generated.
pub const OUTPUT_PLACEHOLDER: &str = "Your generated document will appear here.";

/// Sample brief pre-filled into the input area on startup.
pub const INITIAL_BRIEF: &str = "Projecto: Sitio Web de Capacitación para Desarrolladores

Descripción:
Crear un sitio web para un programa de capacitación dirigido a desarrolladores. El sitio debe proporcionar información sobre el curso, horarios y fechas.

Horarios de las sesiones de capacitación:
- Lunes: 14:00 a 17:00
- Martes: 15:00 a 18:00
- Viernes: 14:00 a 17:00

Fechas de las sesiones:
- 16 de diciembre de 2025
- 20 de diciembre de 2025
- 25 de diciembre de 2025";

/// A request staged for a worker thread: the model to call and the full
/// prompt. Built fresh on every generate action, never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub model: &'static str,
    pub prompt: String,
}

/// What the output region should currently show, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputView<'a> {
    Pending,
    Error(&'a str),
    Placeholder,
    Content(&'a str),
}

/// The per-window mutable state: selected kind, model toggle, request
/// lifecycle flags and the last outcome. The input text itself lives in the
/// editor's `TextBuffer` (single source of truth) and is passed in when a
/// request is staged.
///
/// Invariant: `is_pending` is true only between `begin` returning a request
/// and the matching `finish`; at most one request is ever staged at a time.
#[derive(Debug, Clone)]
pub struct Session {
    pub kind: DocumentKind,
    pub use_fast_model: bool,
    pub is_pending: bool,
    pub last_error: Option<String>,
    pub last_output: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            kind: DocumentKind::Summary,
            use_fast_model: true,
            is_pending: false,
            last_error: None,
            last_output: String::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and stage a generation request. Empty (after trimming)
    /// input sets the validation error and stages nothing; a request
    /// already in flight also stages nothing. Otherwise the previous
    /// error and output are cleared and the session goes pending.
    pub fn begin(&mut self, source_text: &str) -> Option<PreparedRequest> {
        if self.is_pending {
            return None;
        }
        if source_text.trim().is_empty() {
            self.last_error = Some(VALIDATION_ERROR.to_string());
            return None;
        }
        self.last_error = None;
        self.last_output.clear();
        self.is_pending = true;
        Some(PreparedRequest {
            model: model_for(self.use_fast_model),
            prompt: build_prompt(source_text, self.kind),
        })
    }

    /// Apply the outcome of the in-flight request. The result is applied
    /// unconditionally — there is no cancellation, so a request dispatched
    /// before the user changed kind or toggle still lands here.
    pub fn finish(&mut self, result: Result<String, GenerationError>) {
        self.is_pending = false;
        match result {
            Ok(text) => {
                self.last_output = text;
                self.last_error = None;
            }
            Err(err) => {
                let reason = err.to_string();
                self.last_error = Some(if reason.trim().is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    format!("{}: {}", ERROR_PREFIX, reason)
                });
            }
        }
    }

    pub fn set_kind(&mut self, kind: DocumentKind) {
        self.kind = kind;
    }

    /// Export is offered only for a settled, successful result.
    pub fn can_export(&self) -> bool {
        !self.last_output.is_empty() && !self.is_pending && self.last_error.is_none()
    }

    pub fn output_view(&self) -> OutputView<'_> {
        if self.is_pending {
            OutputView::Pending
        } else if let Some(err) = &self.last_error {
            OutputView::Error(err)
        } else if self.last_output.is_empty() {
            OutputView::Placeholder
        } else {
            OutputView::Content(&self.last_output)
        }
    }

    /// Suggested export filename: kind stem plus a filesystem-safe UTC
    /// timestamp in ISO-8601 shape.
    pub fn export_filename(&self, now: DateTime<Utc>) -> String {
        format!(
            "{}_{}.md",
            self.kind.file_stem(),
            now.format("%Y-%m-%dT%H-%M-%SZ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::gemini::{FAST_MODEL, STANDARD_MODEL, TextGenerator};
    use crate::app::markdown::{Block, project};
    use crate::app::prompt::COMMON_INSTRUCTION;
    use chrono::TimeZone;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned generator recording every call it receives.
    struct StubGenerator {
        calls: AtomicUsize,
        seen: Mutex<Vec<(String, String)>>,
        response: Result<String, GenerationError>,
    }

    impl StubGenerator {
        fn ok(text: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
                response: Ok(text.to_string()),
            }
        }

        fn err(reason: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
                response: Err(GenerationError::new(reason)),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TextGenerator for StubGenerator {
        fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen
                .lock()
                .unwrap()
                .push((model.to_string(), prompt.to_string()));
            self.response.clone()
        }
    }

    /// Drive one full generate cycle the way the dispatch loop does.
    fn run_generation(session: &mut Session, source: &str, client: &StubGenerator) {
        if let Some(request) = session.begin(source) {
            assert!(session.is_pending, "pending must be set before the call runs");
            let result = client.generate(request.model, &request.prompt);
            session.finish(result);
        }
    }

    #[test]
    fn test_default_state() {
        let session = Session::new();
        assert_eq!(session.kind, DocumentKind::Summary);
        assert!(session.use_fast_model);
        assert!(!session.is_pending);
        assert!(session.last_error.is_none());
        assert!(session.last_output.is_empty());
        assert_eq!(session.output_view(), OutputView::Placeholder);
    }

    #[test]
    fn test_empty_input_never_reaches_the_client() {
        let mut session = Session::new();
        let client = StubGenerator::ok("unused");
        run_generation(&mut session, "", &client);
        run_generation(&mut session, "   \n\t ", &client);
        assert_eq!(client.call_count(), 0);
        assert_eq!(session.last_error.as_deref(), Some(VALIDATION_ERROR));
        assert!(!session.is_pending);
    }

    #[test]
    fn test_validation_error_keeps_previous_output() {
        let mut session = Session::new();
        run_generation(&mut session, "notes", &StubGenerator::ok("result"));
        run_generation(&mut session, "  ", &StubGenerator::ok("unused"));
        assert_eq!(session.last_output, "result");
        assert_eq!(session.output_view(), OutputView::Error(VALIDATION_ERROR));
        assert!(!session.can_export());
    }

    #[test]
    fn test_successful_generation() {
        let mut session = Session::new();
        let client = StubGenerator::ok("# Done");
        run_generation(&mut session, "some notes", &client);
        assert_eq!(client.call_count(), 1);
        assert!(!session.is_pending);
        assert_eq!(session.last_output, "# Done");
        assert!(session.last_error.is_none());
        assert_eq!(session.output_view(), OutputView::Content("# Done"));
        assert!(session.can_export());
    }

    #[test]
    fn test_begin_clears_previous_outcome() {
        let mut session = Session::new();
        run_generation(&mut session, "notes", &StubGenerator::ok("old"));
        let request = session.begin("more notes");
        assert!(request.is_some());
        assert!(session.is_pending);
        assert!(session.last_output.is_empty());
        assert!(session.last_error.is_none());
        assert_eq!(session.output_view(), OutputView::Pending);
    }

    #[test]
    fn test_failure_wraps_reason() {
        let mut session = Session::new();
        run_generation(&mut session, "notes", &StubGenerator::err("HTTP 403"));
        assert_eq!(
            session.last_error.as_deref(),
            Some("An error occurred: HTTP 403")
        );
        assert!(session.last_output.is_empty());
        assert!(!session.is_pending);
        assert!(!session.can_export());
    }

    #[test]
    fn test_failure_without_reason_becomes_unknown_error() {
        let mut session = Session::new();
        run_generation(&mut session, "notes", &StubGenerator::err("  "));
        assert_eq!(session.last_error.as_deref(), Some(UNKNOWN_ERROR));
    }

    #[test]
    fn test_no_second_request_while_pending() {
        let mut session = Session::new();
        assert!(session.begin("notes").is_some());
        assert!(session.begin("notes").is_none());
        assert!(session.is_pending);
    }

    #[test]
    fn test_model_follows_the_toggle() {
        let mut session = Session::new();
        let request = session.begin("notes").unwrap();
        assert_eq!(request.model, FAST_MODEL);
        session.finish(Ok("x".to_string()));

        session.use_fast_model = false;
        let request = session.begin("notes").unwrap();
        assert_eq!(request.model, STANDARD_MODEL);
    }

    #[test]
    fn test_stale_result_is_still_applied() {
        // Changing the kind while a request is in flight does not cancel
        // it; the eventual result lands in the shared output slot.
        let mut session = Session::new();
        let request = session.begin("notes").unwrap();
        assert!(request.prompt.contains("concise summary"));
        session.set_kind(DocumentKind::Budget);
        session.finish(Ok("summary text".to_string()));
        assert_eq!(session.last_output, "summary text");
        assert_eq!(session.kind, DocumentKind::Budget);
    }

    #[test]
    fn test_export_filename_shape() {
        let mut session = Session::new();
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 30, 5).unwrap();
        assert_eq!(session.export_filename(now), "Summary_2026-08-06T12-30-05Z.md");

        session.set_kind(DocumentKind::UserStories);
        let name = session.export_filename(now);
        let pattern =
            regex_lite::Regex::new(r"^UserStories_\d{4}-\d{2}-\d{2}T\d{2}-\d{2}-\d{2}Z\.md$")
                .unwrap();
        assert!(pattern.is_match(&name), "{}", name);
    }

    #[test]
    fn test_end_to_end_summary_with_fast_model() {
        let mut session = Session::new();
        let client = StubGenerator::ok("# Resumen\n- item");
        run_generation(&mut session, INITIAL_BRIEF, &client);

        let seen = client.seen.lock().unwrap();
        let (model, prompt) = &seen[0];
        assert_eq!(model, FAST_MODEL);
        assert!(prompt.starts_with(COMMON_INSTRUCTION));
        assert!(prompt.contains("concise summary"));
        assert!(prompt.contains(INITIAL_BRIEF));

        assert_eq!(
            project(&session.last_output),
            vec![
                Block::Heading { level: 1, text: "Resumen".to_string() },
                Block::Bullet("item".to_string()),
            ]
        );
        assert!(session.can_export());
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 0, 0, 0).unwrap();
        assert!(session.export_filename(now).starts_with("Summary_"));
    }
}
