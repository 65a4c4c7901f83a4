//! Milestone specification stage.
//!
//! Single call that expands every milestone block of the action plan into a
//! developer-ready specification, using critical sections of the tech spec
//! for implementation detail.

use crate::document;
use crate::error::Result;
use crate::generator::Generator;
use crate::io;
use std::path::PathBuf;

pub const SPEC_CRITICAL_SECTIONS: &[&str] = &[
    "Purpose & Scope",
    "High-Level Architecture Diagram",
    "Key Components",
    "Data Models & Schemas",
    "External Integrations & APIs",
    "Implementation Roadmap",
];

pub const PLAN_CRITICAL_SECTIONS: &[&str] = &[
    "Critical Unknowns & Validations",
    "Guiding Principles",
    "Milestones",
];

const SYSTEM_PROMPT: &str = "You are an expert software architect creating detailed, actionable milestone specifications for development teams. Focus on specific technical implementation details and clear, step-by-step guidance.";
const MAX_TOKENS: u32 = 6000;

/// Stand-in action plan used when none is supplied: a single bootstrap
/// milestone wrapped in the extraction markers.
const DEFAULT_PLAN: &str = "\
## Milestones

<!-- MILESTONE_START -->
## Milestone 1 - Core Infrastructure

**Goal:** Set up basic project structure and core infrastructure

**Key Tasks:**
- Initialize project structure
- Set up persistent storage
- Configure development environment

**Deliverables:**
- Working development environment
- Basic storage schema
- Project structure

**Exit Tests:**
- Environment can be set up successfully
- Storage connections work
- Basic functionality tests pass
<!-- MILESTONE_END -->
";

#[derive(Debug, Clone)]
pub struct MilestonesOptions {
    /// Technical specification markdown file.
    pub spec_file: PathBuf,
    /// Action plan with milestone marker blocks. The built-in default plan
    /// is used when omitted.
    pub action_plan: Option<PathBuf>,
    /// Output markdown file.
    pub output: PathBuf,
}

fn milestone_prompt(critical_spec: &str, critical_plan: &str) -> String {
    format!(
        "You are an expert Technical Lead creating detailed milestone specifications for developers.

TECHNICAL SPECIFICATION (Critical Sections Only):
{critical_spec}

ACTION PLAN (Critical Sections Only):
{critical_plan}

Create a comprehensive milestone specification document with this structure:

# Milestone Specifications

For each milestone in the action plan, create:

## [MILESTONE_NAME]

### Technical Requirements
- API endpoints and data models
- Storage schema changes
- Integration points

### Implementation Guide
- Step-by-step implementation
- Code structure decisions
- Error handling and edge cases

### Code Structure
- File organization and naming conventions
- Key interfaces and contracts
- Dependencies and imports

### Testing & Validation
- Unit test requirements
- Integration test scenarios
- Acceptance criteria validation

### Dependencies & Prerequisites
- External services and APIs
- Internal system dependencies
- Environment setup requirements

For each milestone:
1. Extract the goal, key tasks, deliverables, and exit tests from the action plan
2. Enrich with specific technical implementation details from the technical spec
3. Focus on WHAT to build and HOW to build it
4. Make it detailed enough for a developer to implement without questions

Do NOT include high-level context that belongs elsewhere. Each milestone should be a focused, actionable technical specification for building that specific phase."
    )
}

pub fn generate(gen: &Generator, opts: &MilestonesOptions) -> Result<()> {
    let spec = io::read_input(&opts.spec_file)?;
    let plan = match &opts.action_plan {
        Some(path) => io::read_input(path)?,
        None => DEFAULT_PLAN.to_string(),
    };

    let milestones = document::extract_milestones(&plan);
    println!("Total milestones extracted: {}", milestones.len());
    tracing::info!(count = milestones.len(), "milestones found in action plan");

    let critical_spec = document::critical_sections(&spec, SPEC_CRITICAL_SECTIONS);
    let critical_plan = document::critical_sections(&plan, PLAN_CRITICAL_SECTIONS);

    let out = gen.complete(
        Some(SYSTEM_PROMPT),
        &milestone_prompt(&critical_spec, &critical_plan),
        Some(MAX_TOKENS),
    )?;
    io::atomic_write(&opts.output, out.as_bytes())?;
    Ok(())
}
