//! Post-generation architecture corrections.
//!
//! Scans the validation-tracking file for known failure patterns, asks the
//! model for corrected architecture sections at a low temperature, and
//! writes `_corrected.md` siblings next to the PRD and spec. The tracking
//! file's "Corrections Applied" region is rewritten in place — the only
//! mutation of an already-written file in the whole pipeline.

use crate::error::{DocflowError, Result};
use crate::generator::Generator;
use crate::io;
use crate::paths;
use crate::validation::ValidationLog;
use std::path::PathBuf;

/// The corrector runs colder than the generation stages.
pub const CORRECTION_TEMPERATURE: f32 = 0.3;

#[derive(Debug, Clone)]
pub struct CorrectorOptions {
    pub prd_file: PathBuf,
    pub spec_file: PathBuf,
    pub validation_file: PathBuf,
}

#[derive(Debug)]
pub struct CorrectionOutcome {
    pub corrections: Vec<&'static str>,
    pub corrected_prd: PathBuf,
    pub corrected_spec: PathBuf,
}

/// Known failure patterns looked for in validation findings. Matching is
/// keyword-based; anything subtler is left for a human pass.
pub fn detect_corrections(findings: &str) -> Vec<&'static str> {
    let lower = findings.to_lowercase();
    let mut needed = Vec::new();

    if lower.contains("does not provide") || lower.contains("limitation") {
        needed.push("External API limitation");
    }
    if lower.contains("missing") {
        needed.push("Missing processing component");
    }
    if lower.contains("unrealistic") || lower.contains("assumption") {
        needed.push("Unrealistic technical assumptions");
    }
    needed
}

fn correction_prompt(corrections: &[&str], prd: &str, spec: &str) -> String {
    let findings = if corrections.is_empty() {
        "- (no specific patterns detected; review for consistency)".to_string()
    } else {
        corrections
            .iter()
            .map(|c| format!("- {c}"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        "You are a Senior Technical Architect correcting technical architecture issues identified in validation.

**Validation Findings:**
{findings}

**Current PRD Technical Architecture:**
{prd}

**Current Spec Technical Architecture:**
{spec}

**Correction Requirements:**
1. Fix any external API limitations by substituting capabilities the APIs actually offer
2. Add missing data processing components
3. Correct unrealistic data flows
4. Ensure consistency between PRD and Spec
5. Keep corrections generic - don't over-engineer for specific products

**Output Format:**
Provide corrected versions of:
1. PRD Technical Architecture section
2. Spec data processing sections
3. Updated architecture diagrams

Focus ONLY on technical architecture corrections. Be generic and reusable for any product idea."
    )
}

pub fn apply(gen: &Generator, opts: &CorrectorOptions) -> Result<CorrectionOutcome> {
    let log = ValidationLog::existing(&opts.validation_file).ok_or_else(|| {
        DocflowError::ValidationNotFound(opts.validation_file.display().to_string())
    })?;

    let findings = std::fs::read_to_string(&opts.validation_file)?;
    let corrections = detect_corrections(&findings);
    tracing::info!(count = corrections.len(), "correction patterns detected");

    let prd = io::read_input(&opts.prd_file)?;
    let spec = io::read_input(&opts.spec_file)?;

    let corrected = gen.complete(None, &correction_prompt(&corrections, &prd, &spec), None)?;

    // Both corrected documents carry the full correction output; splitting it
    // back into per-document sections is a manual step.
    let corrected_prd = paths::corrected_doc(&opts.prd_file);
    let corrected_spec = paths::corrected_doc(&opts.spec_file);
    io::atomic_write(&corrected_prd, corrected.as_bytes())?;
    io::atomic_write(&corrected_spec, corrected.as_bytes())?;

    log.record_corrections(
        &corrections,
        &format!(
            "Corrected documents written to {} and {}.",
            corrected_prd.display(),
            corrected_spec.display()
        ),
    )?;

    Ok(CorrectionOutcome {
        corrections,
        corrected_prd,
        corrected_spec,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::validation::ValidationLog as Log;
    use tempfile::TempDir;

    fn test_generator(server: &mockito::Server) -> Generator {
        let config = Config {
            api_key: "test-key".to_string(),
            model: "gpt-4".to_string(),
            base_url: Some(server.url()),
            temperature: 0.7,
        };
        Generator::new(&config).with_temperature(CORRECTION_TEMPERATURE)
    }

    #[test]
    fn detects_known_patterns() {
        let findings = "The upstream API does not provide transcripts. \
                        The plan is missing a speech-to-text step and rests on an unverified assumption.";
        let detected = detect_corrections(findings);
        assert_eq!(
            detected,
            vec![
                "External API limitation",
                "Missing processing component",
                "Unrealistic technical assumptions",
            ]
        );
    }

    #[test]
    fn clean_findings_detect_nothing() {
        assert!(detect_corrections("All sections validated successfully.").is_empty());
    }

    #[test]
    fn missing_validation_file_is_fatal() {
        let server = mockito::Server::new();
        let dir = TempDir::new().unwrap();
        let opts = CorrectorOptions {
            prd_file: dir.path().join("prd.md"),
            spec_file: dir.path().join("spec.md"),
            validation_file: dir.path().join("absent.md"),
        };
        let err = apply(&test_generator(&server), &opts).unwrap_err();
        assert!(matches!(err, DocflowError::ValidationNotFound(_)));
    }

    #[test]
    fn writes_corrected_siblings_and_updates_tracking() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(
                r#"{"choices": [{"message": {"role": "assistant", "content": "corrected architecture"}}]}"#,
            )
            .create();

        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("prd_v1.md"), "prd body").unwrap();
        std::fs::write(dir.path().join("tech_spec_v1.md"), "spec body").unwrap();
        let validation = dir.path().join("validation_tracking.md");
        let log = Log::create(&validation).unwrap();
        log.add_finding("Technical Validation", "The API has a limitation.")
            .unwrap();
        log.append_pending_corrections().unwrap();

        let opts = CorrectorOptions {
            prd_file: dir.path().join("prd_v1.md"),
            spec_file: dir.path().join("tech_spec_v1.md"),
            validation_file: validation.clone(),
        };
        let outcome = apply(&test_generator(&server), &opts).unwrap();

        assert_eq!(outcome.corrections, vec!["External API limitation"]);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("prd_v1_corrected.md")).unwrap(),
            "corrected architecture"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("tech_spec_v1_corrected.md")).unwrap(),
            "corrected architecture"
        );

        let tracking = std::fs::read_to_string(&validation).unwrap();
        assert!(tracking.contains("- External API limitation"));
        assert!(!tracking.contains("Pending correction analysis"));
    }
}
