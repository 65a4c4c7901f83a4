//! PRD generation stage.
//!
//! Template-driven: each CSV row is one generation call. Context accumulates
//! across sections so later sections see everything written before them.

use crate::document;
use crate::error::Result;
use crate::generator::Generator;
use crate::io;
use crate::prompt;
use crate::template;
use crate::validation::ValidationLog;
use std::path::PathBuf;

pub const DOC_TITLE: &str = "Product Requirements Document (PRD)";
const DOC_INTRO: &str = "This document outlines the product requirements and specifications.";

#[derive(Debug, Clone)]
pub struct PrdOptions {
    /// Product idea text file.
    pub input: PathBuf,
    /// CSV instruction template.
    pub template: PathBuf,
    /// Output markdown file.
    pub output: PathBuf,
    /// Validation tracking file, (re)initialized by this stage.
    pub validation_output: PathBuf,
}

fn is_validation_section(name: &str) -> bool {
    name.contains("Validation")
}

pub fn generate(gen: &Generator, opts: &PrdOptions) -> Result<()> {
    let rows = template::load_csv_template(&opts.template)?;
    let idea = io::read_input(&opts.input)?;

    let log = ValidationLog::create(&opts.validation_output)?;
    let mut context = format!("Product Idea:\n{idea}");
    let mut sections: Vec<(String, String)> = Vec::new();

    for row in &rows {
        tracing::info!(section = %row.section, "generating PRD section");
        println!("Running section: {}...", row.section);

        let user = prompt::section_prompt(
            &row.instruction,
            &context,
            &row.output_format,
            &row.acceptance,
        );
        let output = gen.complete(Some(&row.role), &user, None)?;

        prompt::append_labeled(&mut context, &row.section, &output);
        if is_validation_section(&row.section) {
            log.add_finding(&row.section, &output)?;
        }
        sections.push((row.section.clone(), output));
    }

    let doc = document::render_document(DOC_TITLE, DOC_INTRO, &sections);
    io::atomic_write(&opts.output, doc.as_bytes())?;
    log.append_pending_corrections()?;
    Ok(())
}
