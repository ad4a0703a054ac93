//! BriefPad turns free-form project notes into polished markdown documents
//! (summaries, budgets, milestones, user stories) by sending a single prompt
//! to the Gemini API and rendering the returned markdown in a desktop window.

pub mod app;
pub mod ui;
