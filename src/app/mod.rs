//! Application layer: the per-window session state, prompt assembly, the
//! Gemini client, and the markdown projection that feeds the output view.
//!
//! Widgets live in `crate::ui`; everything here that carries logic is
//! widget-free so it can be exercised directly in tests.

pub mod buffer;
pub mod document;
pub mod error;
pub mod gemini;
pub mod markdown;
pub mod messages;
pub mod prompt;
pub mod session;
pub mod settings;
pub mod state;

// Re-exports for convenient external access
pub use document::DocumentKind;
pub use error::{AppError, Result};
pub use gemini::{GeminiClient, GenerationError, TextGenerator};
pub use messages::Message;
pub use session::Session;
pub use settings::{AppSettings, ThemeMode};
