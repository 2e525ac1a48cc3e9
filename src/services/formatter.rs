use once_cell::sync::Lazy;
use regex::Regex;

static TOPIC_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\*\*Topic:\*\*-([^\r\n]*)").expect("topic heading pattern is valid")
});

static SUBTOPIC_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\*\*Subtopic:\*\*-([^\r\n]*)").expect("subtopic heading pattern is valid")
});

static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\* ").expect("bullet pattern is valid"));

/// Rewrites refined lesson-plan text into structured Markdown.
///
/// Section markers become headings preceded by a blank line, and `* ` bullet
/// prefixes become `- `. Text without markers passes through with only the
/// bullet rule applied. Idempotent: converted headings and bullets no longer
/// match their source patterns.
///
/// Applied only to lesson-plan output, never to quiz output.
pub fn format_lesson_plan(text: &str) -> String {
    let text = TOPIC_HEADING_RE.replace_all(text, "\n### **Topic:** ${1}");
    let text = SUBTOPIC_HEADING_RE.replace_all(&text, "\n#### **Subtopic:** ${1}");
    BULLET_RE.replace_all(&text, "- ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_marker_becomes_level_three_heading() {
        let output = format_lesson_plan("intro line\n**Topic:**-Algebra\nbody");

        assert!(output.contains("\n\n### **Topic:** Algebra"));
    }

    #[test]
    fn subtopic_marker_becomes_level_four_heading() {
        let output = format_lesson_plan("**Subtopic:**-Linear Equations\n");

        assert!(output.contains("#### **Subtopic:** Linear Equations"));
    }

    #[test]
    fn bullet_prefix_is_converted() {
        let output = format_lesson_plan("* Item one\n* Item two");

        assert_eq!(output, "- Item one\n- Item two");
    }

    #[test]
    fn already_converted_bullet_is_unchanged() {
        let output = format_lesson_plan("- Item one");

        assert_eq!(output, "- Item one");
    }

    #[test]
    fn text_without_markers_passes_through() {
        let input = "Day 1: warm-up exercises.\nDay 2: group work.";

        assert_eq!(format_lesson_plan(input), input);
    }

    #[test]
    fn bold_text_mid_line_is_not_treated_as_a_bullet() {
        let input = "**bold** text stays intact";

        assert_eq!(format_lesson_plan(input), input);
    }

    #[test]
    fn formatter_is_idempotent() {
        let input = "plan intro\n**Topic:**-Light Reactions\n* Step one\n**Subtopic:**-Pigments\n* Step two";

        let once = format_lesson_plan(input);
        let twice = format_lesson_plan(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn rules_apply_in_order_on_mixed_input() {
        let input = "**Topic:**-Photosynthesis\n* Light reactions\n**Subtopic:**-Calvin Cycle\n* Carbon fixation";

        let output = format_lesson_plan(input);

        assert!(output.contains("### **Topic:** Photosynthesis"));
        assert!(output.contains("#### **Subtopic:** Calvin Cycle"));
        assert!(output.contains("- Light reactions"));
        assert!(output.contains("- Carbon fixation"));
        assert!(!output.contains("* Light reactions"));
    }
}
