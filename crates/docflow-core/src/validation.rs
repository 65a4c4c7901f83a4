//! Validation-tracking file lifecycle.
//!
//! The tracking file collects validation findings as the PRD and spec stages
//! run, then carries a "Corrections Applied" scaffold that the corrector
//! stage later rewrites in place. It is the only generated file that is
//! modified after being written.

use crate::document;
use crate::error::Result;
use crate::io;
use std::path::{Path, PathBuf};

pub const CORRECTIONS_HEADER: &str = "## Corrections Applied";

pub const CTO_SECTION: &str = "CTO Technical Validation";
pub const FINDINGS_SECTION: &str = "Technical Validation Findings & Decisions";
pub const OPEN_QUESTIONS_SECTION: &str = "Open Questions & Assumptions";

const TRACKING_HEADER: &str = "# Technical Validation Tracking\n\n\
This document tracks validation findings and corrections applied to the technical architecture.\n\n";

const PENDING_SCAFFOLD: &str = "## Corrections Applied\n\n\
*This section will be updated after post-generation corrections are applied.*\n\n\
### Architecture Changes Made\n- *Pending correction analysis*\n\n\
### Validation Issues Resolved\n- *Pending correction analysis*\n\n\
### Remaining Open Issues\n- *Pending correction analysis*\n";

// ---------------------------------------------------------------------------
// ValidationLog
// ---------------------------------------------------------------------------

/// Handle to a validation-tracking file.
pub struct ValidationLog {
    path: PathBuf,
}

impl ValidationLog {
    /// Start a fresh tracking file, replacing any previous one.
    pub fn create(path: &Path) -> Result<Self> {
        let initial = format!("{TRACKING_HEADER}## Validation Findings by Section\n\n");
        io::atomic_write(path, initial.as_bytes())?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Open an existing tracking file; `None` if it doesn't exist.
    /// Stages that merely contribute findings warn and move on when the
    /// file is absent.
    pub fn existing(path: &Path) -> Option<Self> {
        if path.is_file() {
            Some(Self {
                path: path.to_path_buf(),
            })
        } else {
            None
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one finding under its `### ` section heading.
    pub fn add_finding(&self, section: &str, finding: &str) -> Result<()> {
        io::append_text(&self.path, &format!("### {section}\n{finding}\n\n"))
    }

    /// Append the pending "Corrections Applied" scaffold. The corrector
    /// rewrites this region once corrections have actually been made.
    pub fn append_pending_corrections(&self) -> Result<()> {
        io::append_text(&self.path, PENDING_SCAFFOLD)
    }

    /// Replace everything from the "Corrections Applied" header to the end
    /// of the file with the real correction record. Appends the section if
    /// the scaffold was never written.
    pub fn record_corrections(&self, corrections: &[&str], notes: &str) -> Result<()> {
        let content = std::fs::read_to_string(&self.path)?;
        let kept = match content.find(CORRECTIONS_HEADER) {
            Some(pos) => &content[..pos],
            None => content.as_str(),
        };

        let mut section = format!("{CORRECTIONS_HEADER}\n\n### Architecture Changes Made\n");
        if corrections.is_empty() {
            section.push_str("- No correction patterns detected in validation findings.\n");
        } else {
            for c in corrections {
                section.push_str(&format!("- {c}\n"));
            }
        }
        section.push_str(&format!("\n### Correction Notes\n{notes}\n"));

        io::atomic_write(&self.path, format!("{kept}{section}").as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Extraction from a generated spec
// ---------------------------------------------------------------------------

/// Validation content pulled out of a generated technical specification.
#[derive(Debug, Default)]
pub struct SpecValidation {
    pub cto_validation: Option<String>,
    pub technical_findings: Option<String>,
    pub open_questions: Option<String>,
}

pub fn extract_from_spec(spec: &str) -> SpecValidation {
    SpecValidation {
        cto_validation: document::section_block(spec, CTO_SECTION),
        technical_findings: document::section_block(spec, FINDINGS_SECTION),
        open_questions: document::section_block(spec, OPEN_QUESTIONS_SECTION),
    }
}

/// Render a complete tracking file from extracted spec content. Absent
/// sections get an explicit placeholder line instead of being skipped.
pub fn render_tracking(v: &SpecValidation) -> String {
    let mut out = String::from(TRACKING_HEADER);

    let blocks = [
        (CTO_SECTION, &v.cto_validation, "*No CTO validation found in specification.*"),
        (FINDINGS_SECTION, &v.technical_findings, "*No technical validation findings found in specification.*"),
        (OPEN_QUESTIONS_SECTION, &v.open_questions, "*No open questions found in specification.*"),
    ];
    for (name, body, placeholder) in blocks {
        out.push_str(&format!("## {name}\n\n"));
        out.push_str(body.as_deref().unwrap_or(placeholder));
        out.push_str("\n\n");
    }
    out.push_str(PENDING_SCAFFOLD);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn log_lifecycle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("validation_tracking.md");

        let log = ValidationLog::create(&path).unwrap();
        log.add_finding("Technical Validation", "The API does not provide transcripts.")
            .unwrap();
        log.append_pending_corrections().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Technical Validation Tracking"));
        assert!(content.contains("### Technical Validation\nThe API does not provide transcripts."));
        assert!(content.contains("- *Pending correction analysis*"));
    }

    #[test]
    fn existing_requires_a_file() {
        let dir = TempDir::new().unwrap();
        assert!(ValidationLog::existing(&dir.path().join("absent.md")).is_none());
        let path = dir.path().join("present.md");
        std::fs::write(&path, "x").unwrap();
        assert!(ValidationLog::existing(&path).is_some());
    }

    #[test]
    fn record_corrections_replaces_scaffold() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("validation_tracking.md");
        let log = ValidationLog::create(&path).unwrap();
        log.add_finding("Technical Validation", "finding").unwrap();
        log.append_pending_corrections().unwrap();

        log.record_corrections(&["External API limitation"], "Corrected documents written.")
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("### Technical Validation\nfinding"));
        assert!(content.contains("- External API limitation"));
        assert!(!content.contains("Pending correction analysis"));
        assert_eq!(content.matches(CORRECTIONS_HEADER).count(), 1);
    }

    #[test]
    fn extract_and_render_roundtrip() {
        let spec = "\
# Technical Specification

## Key Components

stuff

## CTO Technical Validation

Feasible with caveats.

## Open Questions & Assumptions

- Is the quota sufficient?
";
        let v = extract_from_spec(spec);
        assert_eq!(v.cto_validation.as_deref(), Some("Feasible with caveats."));
        assert!(v.technical_findings.is_none());

        let tracking = render_tracking(&v);
        assert!(tracking.contains("Feasible with caveats."));
        assert!(tracking.contains("*No technical validation findings found in specification.*"));
        assert!(tracking.contains("- Is the quota sufficient?"));
        assert!(tracking.contains(CORRECTIONS_HEADER));
    }
}
