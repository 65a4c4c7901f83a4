//! Technical specification generation stage.
//!
//! Unlike the PRD stage, context here is dependency-scoped: each section's
//! prompt sees the base context plus only the prior sections it declares a
//! dependency on. Validation and CTO sections feed the tracking file and are
//! excluded from the spec document itself.

use crate::document;
use crate::error::Result;
use crate::generator::Generator;
use crate::io;
use crate::prompt;
use crate::template;
use crate::validation::ValidationLog;
use std::path::PathBuf;

pub const DOC_TITLE: &str = "Technical Specification";
const DOC_INTRO: &str = "This document provides detailed technical specifications based on the Product Requirements Document (PRD).";

#[derive(Debug, Clone)]
pub struct SpecOptions {
    /// PRD markdown file (primary input).
    pub prd_file: PathBuf,
    /// CSV instruction template.
    pub template: PathBuf,
    /// Output markdown file.
    pub output: PathBuf,
    /// Existing validation tracking file to extend (missing file warns,
    /// it does not fail the stage).
    pub validation_file: PathBuf,
    /// Original product idea file for additional context.
    pub product_idea: Option<PathBuf>,
}

/// Which previously generated sections feed each section's prompt context.
/// Sections not listed see only the base context.
fn dependencies_for(section: &str) -> &'static [&'static str] {
    match section {
        "Data Flow & Sequence Diagrams" => &["High-Level Architecture Diagram"],
        "Key Components" => &["High-Level Architecture Diagram"],
        "External Integrations & APIs" => &["Key Components"],
        "Data Models & Schemas" => &["Key Components"],
        "Parsing & NLP Logic" => &["Key Components", "Data Models & Schemas"],
        "Edge-Case & Error Handling" => &["Key Components", "External Integrations & APIs"],
        "Non-Functional Requirements" => &["Key Components"],
        "Security & Privacy" => &["External Integrations & APIs", "Data Models & Schemas"],
        "Observability & Monitoring" => &["Key Components", "Non-Functional Requirements"],
        "Testing & Validation Plan" => &["Key Components", "Non-Functional Requirements"],
        "Implementation Roadmap" => &["Key Components", "External Integrations & APIs"],
        _ => &[],
    }
}

fn is_validation_section(name: &str) -> bool {
    name.contains("Validation") || name.contains("CTO")
}

pub fn generate(gen: &Generator, opts: &SpecOptions) -> Result<()> {
    let rows = template::load_csv_template(&opts.template)?;
    let prd = io::read_input(&opts.prd_file)?;

    let mut base = format!("PRD Content:\n{prd}");
    if let Some(idea_path) = &opts.product_idea {
        if idea_path.is_file() {
            let idea = io::read_input(idea_path)?;
            base.push_str(&format!("\n\nOriginal Product Idea:\n{idea}"));
        }
    }

    let log = ValidationLog::existing(&opts.validation_file);
    if log.is_none() {
        tracing::warn!(
            path = %opts.validation_file.display(),
            "validation tracking file not found, findings will not be recorded"
        );
    }

    let mut sections: Vec<(String, String)> = Vec::new();
    for row in &rows {
        tracing::info!(section = %row.section, "generating spec section");
        println!("Running section: {}...", row.section);

        let deps: Vec<(String, String)> = dependencies_for(&row.section)
            .iter()
            .filter_map(|d| sections.iter().find(|(n, _)| n == d).cloned())
            .collect();
        let context = prompt::with_dependencies(&base, &deps);
        let user = prompt::section_prompt(
            &row.instruction,
            &context,
            &row.output_format,
            &row.acceptance,
        );
        let output = gen.complete(Some(&row.role), &user, None)?;

        if is_validation_section(&row.section) {
            if let Some(log) = &log {
                log.add_finding(&row.section, &output)?;
            }
        }
        sections.push((row.section.clone(), output));
    }

    // Validation sections live in the tracking file only.
    let doc_sections: Vec<(String, String)> = sections
        .into_iter()
        .filter(|(name, _)| !is_validation_section(name))
        .collect();
    let doc = document::render_document(DOC_TITLE, DOC_INTRO, &doc_sections);
    io::atomic_write(&opts.output, doc.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::validation::ValidationLog as Log;
    use tempfile::TempDir;

    const TEMPLATE: &str = "\
Section,Role Emulated,Prompt Instruction,Output Format,Acceptance Criteria
High-Level Architecture Diagram,Architect,Draw the architecture.,Mermaid,Readable
Key Components,Architect,List the components.,Bulleted list,Complete
CTO Technical Validation,CTO,Validate feasibility.,Prose,Honest
";

    fn test_generator(server: &mockito::Server) -> Generator {
        let config = Config {
            api_key: "test-key".to_string(),
            model: "gpt-4".to_string(),
            base_url: Some(server.url()),
            temperature: 0.7,
        };
        Generator::new(&config)
    }

    #[test]
    fn validation_sections_go_to_tracking_not_spec() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(
                r#"{"choices": [{"message": {"role": "assistant", "content": "section text"}}]}"#,
            )
            .expect(3)
            .create();

        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("prd.md"), "# PRD\n\n## Product Overview\n\nan app\n")
            .unwrap();
        std::fs::write(dir.path().join("spec.csv"), TEMPLATE).unwrap();
        let validation = dir.path().join("validation_tracking.md");
        Log::create(&validation).unwrap();

        let opts = SpecOptions {
            prd_file: dir.path().join("prd.md"),
            template: dir.path().join("spec.csv"),
            output: dir.path().join("tech_spec.md"),
            validation_file: validation.clone(),
            product_idea: None,
        };
        generate(&test_generator(&server), &opts).unwrap();

        let doc = std::fs::read_to_string(&opts.output).unwrap();
        assert!(doc.contains("## Key Components"));
        assert!(!doc.contains("CTO Technical Validation"));

        let tracking = std::fs::read_to_string(&validation).unwrap();
        assert!(tracking.contains("### CTO Technical Validation\nsection text"));
    }

    #[test]
    fn missing_validation_file_only_warns() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "ok"}}]}"#)
            .expect(3)
            .create();

        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("prd.md"), "prd content").unwrap();
        std::fs::write(dir.path().join("spec.csv"), TEMPLATE).unwrap();

        let opts = SpecOptions {
            prd_file: dir.path().join("prd.md"),
            template: dir.path().join("spec.csv"),
            output: dir.path().join("tech_spec.md"),
            validation_file: dir.path().join("absent.md"),
            product_idea: None,
        };
        generate(&test_generator(&server), &opts).unwrap();
        assert!(opts.output.exists());
        assert!(!opts.validation_file.exists());
    }

    #[test]
    fn dependency_table_is_scoped() {
        assert_eq!(
            dependencies_for("Key Components"),
            &["High-Level Architecture Diagram"]
        );
        assert!(dependencies_for("Purpose & Scope").is_empty());
        assert!(dependencies_for("Unknown Section").is_empty());
    }
}
