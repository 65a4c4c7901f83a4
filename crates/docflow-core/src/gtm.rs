//! Go-to-market plan stage.
//!
//! Single call from the full PRD and tech spec; no section extraction here —
//! the marketing prompt wants the complete picture.

use crate::error::Result;
use crate::generator::Generator;
use crate::io;
use std::path::PathBuf;

const SYSTEM_PROMPT: &str = "You are an expert Product Marketing Manager and Competitive Intelligence Analyst with extensive experience in creating comprehensive Go-To-Market strategies. Focus on actionable insights, clear positioning, and measurable outcomes.";
const MAX_TOKENS: u32 = 4000;

#[derive(Debug, Clone)]
pub struct GtmOptions {
    pub prd_file: PathBuf,
    pub spec_file: PathBuf,
    pub output: PathBuf,
}

fn gtm_prompt(prd: &str, spec: &str) -> String {
    format!(
        "You are an expert Product Marketing Manager creating a comprehensive Go-To-Market Plan.

PRD CONTENT:
{prd}

TECHNICAL SPECIFICATION:
{spec}

Please create a detailed Go-To-Market Plan that includes:

## Go-To-Market Strategy
- Target audience segments (2-3 primary segments)
- Core positioning statement
- Key messaging pillars (3 main pillars)
- Launch tactics table with channel, tactic, KPI, and owner
- 30-60-90 day success metrics

## SWOT Analysis
- **Strengths** (internal advantages)
- **Weaknesses** (internal limitations)
- **Opportunities** (external factors to leverage)
- **Threats** (external challenges)
- Summary insights and differentiation strategy

## Competitive Positioning
- Competitive landscape overview
- Key differentiators
- Market positioning strategy

## Launch Timeline & Milestones
- Pre-launch activities
- Launch phases
- Post-launch optimization

Please provide a well-structured, actionable GTM plan that can guide marketing and business development efforts."
    )
}

pub fn generate(gen: &Generator, opts: &GtmOptions) -> Result<()> {
    let prd = io::read_input(&opts.prd_file)?;
    let spec = io::read_input(&opts.spec_file)?;

    let out = gen.complete(Some(SYSTEM_PROMPT), &gtm_prompt(&prd, &spec), Some(MAX_TOKENS))?;
    io::atomic_write(&opts.output, out.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    #[test]
    fn both_inputs_are_required() {
        let server = mockito::Server::new();
        let config = Config {
            api_key: "test-key".to_string(),
            model: "gpt-4".to_string(),
            base_url: Some(server.url()),
            temperature: 0.7,
        };
        let gen = Generator::new(&config);

        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("prd.md"), "prd").unwrap();

        let opts = GtmOptions {
            prd_file: dir.path().join("prd.md"),
            spec_file: dir.path().join("absent.md"),
            output: dir.path().join("gtm_plan.md"),
        };
        let err = generate(&gen, &opts).unwrap_err();
        assert!(matches!(err, crate::DocflowError::InputNotFound(_)));
        assert!(!opts.output.exists());
    }

    #[test]
    fn prompt_embeds_both_documents() {
        let p = gtm_prompt("THE PRD", "THE SPEC");
        assert!(p.contains("PRD CONTENT:\nTHE PRD"));
        assert!(p.contains("TECHNICAL SPECIFICATION:\nTHE SPEC"));
        assert!(p.contains("## SWOT Analysis"));
    }
}
