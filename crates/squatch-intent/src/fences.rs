// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Markdown code-fence stripping for model output expected to be JSON.

/// Strip a surrounding markdown code fence (``` or ```json) from model output.
///
/// Models asked for raw JSON frequently wrap it anyway. Returns the inner
/// text trimmed; input without fences is returned trimmed as-is.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_unfenced_text() {
        assert_eq!(strip_code_fences(r#"  {"tool": null}  "#), r#"{"tool": null}"#);
    }

    #[test]
    fn strips_plain_fence() {
        let fenced = "```\n{\"tool\": \"contacts_get-contacts\"}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"tool\": \"contacts_get-contacts\"}");
    }

    #[test]
    fn strips_json_tagged_fence() {
        let fenced = "```json\n{\"action\": \"get_all_contacts\"}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"action\": \"get_all_contacts\"}");
    }

    #[test]
    fn handles_unterminated_fence() {
        let fenced = "```json\n{\"a\": 1}";
        assert_eq!(strip_code_fences(fenced), "{\"a\": 1}");
    }
}
