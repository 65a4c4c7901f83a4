//! Action plan generation stage.
//!
//! Single call, markdown-template driven. Only the critical sections of the
//! upstream documents go into the prompt to keep it small.

use crate::document;
use crate::error::Result;
use crate::generator::Generator;
use crate::io;
use crate::template;
use std::path::PathBuf;

pub const SPEC_CRITICAL_SECTIONS: &[&str] = &[
    "Purpose & Scope",
    "High-Level Architecture Diagram",
    "Key Components",
    "External Integrations & APIs",
    "Data Models & Schemas",
    "Non-Functional Requirements",
];

pub const PRD_CRITICAL_SECTIONS: &[&str] = &["Product Overview", "User Requirements"];

/// Substituted for `{{PRD_MD}}` when no PRD is available.
pub const NO_PRD_MARKER: &str = "No PRD provided - using technical specification only.";

const SYSTEM_PROMPT: &str = "You are a pragmatic Technical Lead collaborating with a Senior Product Manager. Generate actionable, implementation-focused content.";
const MAX_TOKENS: u32 = 2000;

#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Technical specification markdown file.
    pub spec_file: PathBuf,
    /// PRD file for additional context.
    pub prd_file: Option<PathBuf>,
    /// Markdown template with `{{SPEC_MD}}`/`{{PRD_MD}}`/`{{PRODUCT_NAME}}`.
    pub template: PathBuf,
    /// Output markdown file.
    pub output: PathBuf,
    pub product_name: String,
}

pub fn generate(gen: &Generator, opts: &PlanOptions) -> Result<()> {
    let spec = io::read_input(&opts.spec_file)?;
    let tpl = template::load_markdown_template(&opts.template)?;

    let critical_spec = document::critical_sections(&spec, SPEC_CRITICAL_SECTIONS);
    tracing::info!(
        spec_words = spec.split_whitespace().count(),
        critical_words = critical_spec.split_whitespace().count(),
        "reduced spec to critical sections"
    );

    let prd_block = match &opts.prd_file {
        Some(path) if path.is_file() => {
            let prd = io::read_input(path)?;
            document::critical_sections(&prd, PRD_CRITICAL_SECTIONS)
        }
        Some(path) => {
            tracing::warn!(path = %path.display(), "PRD file not found, proceeding without PRD context");
            NO_PRD_MARKER.to_string()
        }
        None => NO_PRD_MARKER.to_string(),
    };

    let user = template::substitute(
        &tpl,
        &[
            ("SPEC_MD", critical_spec.as_str()),
            ("PRD_MD", prd_block.as_str()),
            ("PRODUCT_NAME", opts.product_name.as_str()),
        ],
    );

    let out = gen.complete(Some(SYSTEM_PROMPT), &user, Some(MAX_TOKENS))?;
    io::atomic_write(&opts.output, out.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    const SPEC: &str = "\
# Technical Specification

## Purpose & Scope

scope text

## Key Components

- one

## Security & Privacy

secret stuff
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
    fn missing_prd_uses_explicit_marker() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(mockito::Matcher::PartialJsonString(format!(
                r#"{{"messages": [{{}}, {{"content": "plan from:\n\n## Purpose & Scope\nscope text\n\n## Key Components\n- one\n\nprd: {NO_PRD_MARKER}\nname: Product"}}]}}"#
            )))
            .with_status(200)
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "the plan"}}]}"#)
            .create();

        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("spec.md"), SPEC).unwrap();
        std::fs::write(
            dir.path().join("plan.md"),
            "plan from:\n{{SPEC_MD}}\n\nprd: {{PRD_MD}}\nname: {{PRODUCT_NAME}}",
        )
        .unwrap();

        let opts = PlanOptions {
            spec_file: dir.path().join("spec.md"),
            prd_file: None,
            template: dir.path().join("plan.md"),
            output: dir.path().join("action_plan.md"),
            product_name: "Product".to_string(),
        };
        generate(&test_generator(&server), &opts).unwrap();
        mock.assert();
        assert_eq!(
            std::fs::read_to_string(&opts.output).unwrap(),
            "the plan"
        );
    }

    #[test]
    fn unreadable_prd_path_degrades_to_marker() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "plan"}}]}"#)
            .create();

        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("spec.md"), SPEC).unwrap();
        std::fs::write(dir.path().join("plan.md"), "{{SPEC_MD}} {{PRD_MD}}").unwrap();

        let opts = PlanOptions {
            spec_file: dir.path().join("spec.md"),
            prd_file: Some(dir.path().join("gone.md")),
            template: dir.path().join("plan.md"),
            output: dir.path().join("action_plan.md"),
            product_name: "Product".to_string(),
        };
        generate(&test_generator(&server), &opts).unwrap();
        assert!(opts.output.exists());
    }
}
