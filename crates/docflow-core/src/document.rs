//! Markdown section handling for generated documents.
//!
//! Documents are flat: a title, an intro paragraph, then `## `-delimited
//! sections in insertion order. There is no nested-header handling and no
//! malformed-markdown recovery — a misspelled header silently loses its
//! content, which matches how downstream stages consume these files.

pub const SECTION_PREFIX: &str = "## ";
pub const MILESTONE_START: &str = "<!-- MILESTONE_START -->";
pub const MILESTONE_END: &str = "<!-- MILESTONE_END -->";

// ---------------------------------------------------------------------------
// Section extraction
// ---------------------------------------------------------------------------

/// Extract recognized `## ` sections from markdown in a single linear scan.
///
/// Returns `(name, content)` pairs in document order. Content is the text
/// strictly between the header and the next `## `-prefixed line (or end of
/// document), trimmed. Headers not in `recognized` are dropped along with
/// their content.
pub fn extract_sections(content: &str, recognized: &[&str]) -> Vec<(String, String)> {
    let mut sections: Vec<(String, String)> = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in content.lines() {
        if let Some(header) = line.strip_prefix(SECTION_PREFIX) {
            let name = header.trim();
            if let Some((n, body)) = current.take() {
                sections.push((n, body.join("\n").trim().to_string()));
            }
            if recognized.contains(&name) {
                current = Some((name.to_string(), Vec::new()));
            }
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }
    if let Some((n, body)) = current.take() {
        sections.push((n, body.join("\n").trim().to_string()));
    }
    sections
}

/// The body of a single named `## ` section, if present.
pub fn section_block(content: &str, name: &str) -> Option<String> {
    extract_sections(content, &[name])
        .into_iter()
        .next()
        .map(|(_, body)| body)
}

/// Concatenated `## ` blocks for the recognized names only — used to shrink
/// prompt context before a generation call.
pub fn critical_sections(content: &str, recognized: &[&str]) -> String {
    extract_sections(content, recognized)
        .iter()
        .map(|(name, body)| format!("\n## {name}\n{body}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Milestone blocks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneBlock {
    pub name: String,
    pub content: String,
}

/// Milestone blocks delimited by the `<!-- MILESTONE_START/END -->` comment
/// markers. The name comes from the first `## Milestone...` heading inside
/// the block, falling back to a positional label. An unterminated start
/// marker ends the scan.
pub fn extract_milestones(content: &str) -> Vec<MilestoneBlock> {
    let mut out = Vec::new();
    let mut rest = content;

    while let Some(start) = rest.find(MILESTONE_START) {
        let after = &rest[start + MILESTONE_START.len()..];
        let Some(end) = after.find(MILESTONE_END) else {
            break;
        };
        let block = after[..end].trim();
        let name = block
            .lines()
            .find_map(|l| {
                l.strip_prefix(SECTION_PREFIX)
                    .filter(|h| h.starts_with("Milestone"))
            })
            .map(|h| h.trim().to_string())
            .unwrap_or_else(|| format!("Milestone {}", out.len()));
        out.push(MilestoneBlock {
            name,
            content: block.to_string(),
        });
        rest = &after[end + MILESTONE_END.len()..];
    }
    out
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render `## `-delimited sections in insertion order.
pub fn render_sections(sections: &[(String, String)]) -> String {
    let mut out = String::new();
    for (name, body) in sections {
        out.push_str(&format!("## {name}\n\n{body}\n\n"));
    }
    out
}

/// Assemble a full generated document: title, intro, then sections.
pub fn render_document(title: &str, intro: &str, sections: &[(String, String)]) -> String {
    format!("# {title}\n\n{intro}\n\n{}", render_sections(sections))
}
