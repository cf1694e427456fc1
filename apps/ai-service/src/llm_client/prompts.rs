// Shared prompt fragments.
// Each component that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every system prompt whose reply is decoded as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Joins a role prompt with the JSON-only instruction.
pub fn json_system_prompt(role_prompt: &str) -> String {
    format!("{role_prompt}\n\n{JSON_ONLY_INSTRUCTION}")
}

/// Substitutes `{name}` placeholders in a single pass over `template`.
///
/// Inserted values are copied verbatim and never rescanned, so braces inside
/// user text survive unchanged. Placeholders without a value are left as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let found = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, end))
        });
        match found {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_system_prompt_keeps_role_first() {
        let prompt = json_system_prompt("You are a parser.");
        assert!(prompt.starts_with("You are a parser."));
        assert!(prompt.contains("valid JSON only"));
    }

    #[test]
    fn test_fill_template_substitutes_each_placeholder() {
        let filled = fill_template("A: {a}\nB: {b}", &[("a", "one"), ("b", "two")]);
        assert_eq!(filled, "A: one\nB: two");
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let filled = fill_template(
            "Resume: {resume_text}\nSkills: {skills}",
            &[("resume_text", "uses {skills} and {x}"), ("skills", "Rust")],
        );
        assert_eq!(filled, "Resume: uses {skills} and {x}\nSkills: Rust");
    }

    #[test]
    fn test_fill_template_keeps_unknown_and_unclosed_braces() {
        assert_eq!(fill_template("{unknown} {a", &[("a", "x")]), "{unknown} {a");
    }
}
