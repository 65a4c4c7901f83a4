use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Default locations
// ---------------------------------------------------------------------------

pub const OUTPUT_DIR: &str = "output";

pub const PRD_TEMPLATE: &str = "templates/prd_instructions.csv";
pub const SPEC_TEMPLATE: &str = "templates/spec_instructions.csv";
pub const PLAN_TEMPLATE: &str = "templates/action_plan_template.md";

pub const PRD_OUTPUT: &str = "output/prd.md";
pub const SPEC_OUTPUT: &str = "output/tech_spec.md";
pub const PLAN_OUTPUT: &str = "output/action_plan.md";
pub const MILESTONES_OUTPUT: &str = "output/milestone_specs.md";
pub const GTM_OUTPUT: &str = "output/gtm_plan.md";
pub const VALIDATION_OUTPUT: &str = "output/validation_tracking.md";

// Base names for versioned pipeline output.
pub const PRD_BASE: &str = "prd";
pub const SPEC_BASE: &str = "tech_spec";
pub const PLAN_BASE: &str = "action_plan";
pub const MILESTONES_BASE: &str = "milestone_specs";
pub const GTM_BASE: &str = "gtm_plan";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `<dir>/<base>_v<version>.md`
pub fn versioned_doc(dir: &Path, base: &str, version: &str) -> PathBuf {
    dir.join(format!("{base}_v{version}.md"))
}

/// Sibling path with a `_corrected` suffix: `output/prd_v2.md` →
/// `output/prd_v2_corrected.md`.
pub fn corrected_doc(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}_corrected.md"))
}
