use super::document::DocumentKind;

/// Role and formatting instruction shared by every document kind.
pub const COMMON_INSTRUCTION: &str = "You are an expert project manager and assistant for a high-end web development agency. Your audience is professional frontend developers. Analyze the following meeting notes/project description and generate the requested document. The output must be well-structured, clear, and concise. Format the entire response in Markdown.";

const SUMMARY_INSTRUCTION: &str = "Provide a concise summary of the key decisions, action items, and next steps. Use Markdown lists and bold text to highlight important information.";
const BUDGET_INSTRUCTION: &str = "Generate a detailed budget breakdown. Structure it by phase (e.g., Discovery, Design, Development, Deployment) and include estimated hours or cost ranges. Use a Markdown table for clarity.";
const MILESTONES_INSTRUCTION: &str = "Define the key project milestones with estimated timelines. Present it as a clear, ordered list in Markdown.";
const USER_STORIES_INSTRUCTION: &str = "Formulate user stories based on the input. Use the format 'As a [user type], I want [goal] so that [benefit]'. Group them by feature or epic using Markdown headings.";

fn kind_instruction(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Budget => BUDGET_INSTRUCTION,
        DocumentKind::Milestones => MILESTONES_INSTRUCTION,
        DocumentKind::UserStories => USER_STORIES_INSTRUCTION,
        // Summary, and any kind added later, gets the summary instruction.
        _ => SUMMARY_INSTRUCTION,
    }
}

/// Assemble the full prompt for one generation request. Deterministic and
/// total; the source text is passed through verbatim inside a fenced block
/// so the model can tell instruction from content. No length limit is
/// enforced here — the service owns that and reports it as a failure.
pub fn build_prompt(source_text: &str, kind: DocumentKind) -> String {
    format!(
        "{}\n\n{}\n\nInput:\n```\n{}\n```",
        COMMON_INSTRUCTION,
        kind_instruction(kind),
        source_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_includes_common_instruction_and_source() {
        let source = "Build a training site.\nWith schedules.";
        for kind in DocumentKind::ALL {
            let prompt = build_prompt(source, kind);
            assert!(prompt.starts_with(COMMON_INSTRUCTION), "{:?}", kind);
            assert!(prompt.contains(source), "{:?}", kind);
        }
    }

    #[test]
    fn test_kind_specific_instructions() {
        let source = "notes";
        assert!(build_prompt(source, DocumentKind::Summary).contains("concise summary"));
        assert!(build_prompt(source, DocumentKind::Budget).contains("budget breakdown"));
        assert!(build_prompt(source, DocumentKind::Milestones).contains("key project milestones"));
        assert!(build_prompt(source, DocumentKind::UserStories).contains("As a [user type]"));
    }

    #[test]
    fn test_source_is_fenced_and_verbatim() {
        let source = "line one\n  indented **stars** kept\n";
        let prompt = build_prompt(source, DocumentKind::Summary);
        let expected_tail = format!("Input:\n```\n{}\n```", source);
        assert!(prompt.ends_with(&expected_tail));
    }

    #[test]
    fn test_summary_is_the_fallback_instruction() {
        // The wildcard arm of kind_instruction carries the summary text.
        assert_eq!(kind_instruction(DocumentKind::Summary), SUMMARY_INSTRUCTION);
    }
}
