//! Prompt assembly for template-driven stages.
//!
//! Plain concatenation, no escaping, no size limits. Acceptance criteria are
//! included to guide the model but never emitted into the generated document.

/// Full user prompt for one CSV template section.
pub fn section_prompt(
    instruction: &str,
    context: &str,
    output_format: &str,
    acceptance: &str,
) -> String {
    format!(
        "{instruction}\n\n{context}\n\nFormat:\n{output_format}\n\nAcceptance Criteria:\n{acceptance}\n"
    )
}

/// Append a `--- name ---` delimited block to a cumulative context.
pub fn append_labeled(context: &mut String, name: &str, content: &str) {
    context.push_str("\n\n--- ");
    context.push_str(name);
    context.push_str(" ---\n");
    context.push_str(content);
}

/// Base context plus a `Dependent Sections:` block listing the named
/// prior outputs. Returns the base unchanged when there are none.
pub fn with_dependencies(base: &str, blocks: &[(String, String)]) -> String {
    if blocks.is_empty() {
        return base.to_string();
    }
    let joined = blocks
        .iter()
        .map(|(name, content)| format!("--- {name} ---\n{content}"))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{base}\n\nDependent Sections:\n{joined}")
}
