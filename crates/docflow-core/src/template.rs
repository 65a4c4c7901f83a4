//! Prompt templates: CSV instruction tables and markdown placeholder files.

use crate::error::{DocflowError, Result};
use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// CSV instruction templates
// ---------------------------------------------------------------------------

/// One row of a CSV instruction template. Each row drives one generation
/// call and becomes one `## ` section of the output document.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionTemplate {
    #[serde(rename = "Section")]
    pub section: String,
    #[serde(rename = "Role Emulated")]
    pub role: String,
    #[serde(rename = "Prompt Instruction")]
    pub instruction: String,
    #[serde(rename = "Output Format")]
    pub output_format: String,
    #[serde(rename = "Acceptance Criteria")]
    pub acceptance: String,
}

/// Load a CSV instruction template. Columns are matched by header name, so
/// column order in the file doesn't matter.
pub fn load_csv_template(path: &Path) -> Result<Vec<SectionTemplate>> {
    if !path.is_file() {
        return Err(DocflowError::TemplateNotFound(path.display().to_string()));
    }
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<SectionTemplate>, _>>()?;
    if rows.is_empty() {
        return Err(DocflowError::EmptyTemplate(path.display().to_string()));
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Markdown templates
// ---------------------------------------------------------------------------

/// Load a markdown template containing `{{TOKEN}}` placeholders.
pub fn load_markdown_template(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(DocflowError::TemplateNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Replace `{{TOKEN}}` placeholders with the given values.
///
/// Substitution is total and order-independent for disjoint tokens. A token
/// that has no entry in `values` is left verbatim in the output — templates
/// are not validated beyond presence checks.
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (token, value) in values {
        out = out.replace(&format!("{{{{{token}}}}}"), value);
    }
    out
}
