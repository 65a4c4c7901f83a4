//! Master pipeline: run stages as child processes in dependency order.
//!
//! Stages communicate solely via files on disk; the master passes each
//! stage's output path as the next stage's input and halts on the first
//! non-zero exit. No parallelism, no partial-result recovery, no rollback.

use crate::error::{DocflowError, Result};
use crate::paths;
use std::path::{Path, PathBuf};
use std::process::Command;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Stage {
    /// Subcommand name, also used in failure reports.
    pub name: &'static str,
    /// Full argv for the child invocation (subcommand included).
    pub args: Vec<String>,
    /// The document this stage is expected to produce.
    pub output: PathBuf,
}

/// Run one stage as a child process, stdio inherited.
pub fn run_stage(program: &Path, stage: &Stage) -> Result<()> {
    tracing::info!(stage = stage.name, "running stage");
    let status = Command::new(program)
        .args(&stage.args)
        .status()
        .map_err(|e| DocflowError::StageSpawn {
            stage: stage.name.to_string(),
            source: e,
        })?;
    if !status.success() {
        return Err(DocflowError::StageFailed {
            stage: stage.name.to_string(),
            code: status.code().unwrap_or(-1),
        });
    }
    Ok(())
}

/// Run stages in order. The first failure halts the chain; later stages are
/// never invoked.
pub fn run_chain(program: &Path, stages: &[Stage]) -> Result<()> {
    for stage in stages {
        run_stage(program, stage)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// RunPlan
// ---------------------------------------------------------------------------

/// Everything needed to lay out one versioned pipeline run.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub idea_file: PathBuf,
    pub output_dir: PathBuf,
    pub version: String,
    pub skip_prd: bool,
    pub skip_spec: bool,
    pub skip_plan: bool,
    pub skip_milestones: bool,
    pub skip_gtm: bool,
}

impl RunPlan {
    /// Ordered stage list with versioned output paths.
    ///
    /// A skipped upstream stage makes downstream stages fall back to the
    /// best available input: the idea file stands in for a skipped PRD, a
    /// skipped action plan leaves milestones on the built-in default block.
    /// The tech spec has no substitute — stages that need it refuse to run
    /// without it.
    pub fn stages(&self) -> Result<Vec<Stage>> {
        let dir = &self.output_dir;
        let idea = path_arg(&self.idea_file);
        let prd_out = paths::versioned_doc(dir, paths::PRD_BASE, &self.version);
        let spec_out = paths::versioned_doc(dir, paths::SPEC_BASE, &self.version);
        let plan_out = paths::versioned_doc(dir, paths::PLAN_BASE, &self.version);
        let milestones_out = paths::versioned_doc(dir, paths::MILESTONES_BASE, &self.version);
        let gtm_out = paths::versioned_doc(dir, paths::GTM_BASE, &self.version);
        let validation_out = dir.join("validation_tracking.md");

        let mut stages = Vec::new();

        if !self.skip_prd {
            stages.push(Stage {
                name: "prd",
                args: vec![
                    "prd".into(),
                    idea.clone(),
                    "--output".into(),
                    path_arg(&prd_out),
                    "--validation-output".into(),
                    path_arg(&validation_out),
                ],
                output: prd_out.clone(),
            });
        }

        if !self.skip_spec {
            let input = if self.skip_prd {
                idea.clone()
            } else {
                path_arg(&prd_out)
            };
            stages.push(Stage {
                name: "spec",
                args: vec![
                    "spec".into(),
                    input,
                    "--output".into(),
                    path_arg(&spec_out),
                    "--validation-file".into(),
                    path_arg(&validation_out),
                ],
                output: spec_out.clone(),
            });
        }

        if !self.skip_plan {
            if self.skip_spec {
                return Err(DocflowError::StageDependency {
                    stage: "plan",
                    needs: "spec",
                });
            }
            let mut args = vec![
                "plan".to_string(),
                path_arg(&spec_out),
                "--output".into(),
                path_arg(&plan_out),
            ];
            if !self.skip_prd {
                args.push("--prd-file".into());
                args.push(path_arg(&prd_out));
            }
            stages.push(Stage {
                name: "plan",
                args,
                output: plan_out.clone(),
            });
        }

        if !self.skip_milestones {
            if self.skip_spec {
                return Err(DocflowError::StageDependency {
                    stage: "milestones",
                    needs: "spec",
                });
            }
            let mut args = vec![
                "milestones".to_string(),
                path_arg(&spec_out),
                "--output".into(),
                path_arg(&milestones_out),
            ];
            if !self.skip_plan {
                args.push("--action-plan-file".into());
                args.push(path_arg(&plan_out));
            }
            stages.push(Stage {
                name: "milestones",
                args,
                output: milestones_out,
            });
        }

        if !self.skip_gtm {
            if self.skip_spec {
                return Err(DocflowError::StageDependency {
                    stage: "gtm",
                    needs: "spec",
                });
            }
            let prd_input = if self.skip_prd {
                idea.clone()
            } else {
                path_arg(&prd_out)
            };
            stages.push(Stage {
                name: "gtm",
                args: vec![
                    "gtm".into(),
                    prd_input,
                    path_arg(&spec_out),
                    "--output".into(),
                    path_arg(&gtm_out),
                ],
                output: gtm_out,
            });
        }

        Ok(stages)
    }
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}
