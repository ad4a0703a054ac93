use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The cheaper, quicker model behind the "Fast AI responses" toggle.
pub const FAST_MODEL: &str = "gemini-2.5-flash-lite";
/// The standard model used when the toggle is off.
pub const STANDARD_MODEL: &str = "gemini-2.5-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_ENV: &str = "GEMINI_API_KEY";
const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

/// Pick between the two fixed model identifiers.
pub fn model_for(use_fast: bool) -> &'static str {
    if use_fast { FAST_MODEL } else { STANDARD_MODEL }
}

/// Single failure class for generation. Whatever went wrong on the wire
/// (connect, auth, quota, malformed body) ends up here with a
/// human-readable reason; callers never see finer-grained causes.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct GenerationError(String);

impl GenerationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Anything that can turn a prompt into generated text. The app talks to
/// this instead of a concrete vendor client so tests can substitute a
/// canned generator.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

fn request_body(prompt: &str) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate's parts, if any.
    fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate
            .content?
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

/// Blocking client for the Gemini `generateContent` endpoint. One request
/// per call: no retries, no streaming, no caching.
pub struct GeminiClient {
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }

    /// Read the API key from the environment once at startup. A missing key
    /// falls back to a placeholder so the app still opens; every generation
    /// call will then fail with an auth error from the service.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_else(|_| {
            eprintln!(
                "{} is not set. Using a placeholder; generation will fail until a key is provided.",
                API_KEY_ENV
            );
            API_KEY_PLACEHOLDER.to_string()
        });
        Self::new(api_key)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("BriefPad/", env!("CARGO_PKG_VERSION")))
            // No local timeout: the wait is bounded by the service.
            .timeout(None)
            .build()
            .map_err(|e| GenerationError::new(format!("failed to create HTTP client: {}", e)))?;

        let url = format!("{}/{}:generateContent", API_BASE, model);
        let response = client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(prompt))
            .send()
            .map_err(|e| {
                GenerationError::new(format!("failed to reach the generation service: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(GenerationError::new(format!(
                "generation service returned {}",
                response.status()
            )));
        }

        let parsed: GenerateResponse = response.json().map_err(|e| {
            GenerationError::new(format!("failed to parse the generation response: {}", e))
        })?;

        parsed
            .into_text()
            .ok_or_else(|| GenerationError::new("the generation response contained no text"))
    }
}
