use crate::output::print_table;
use anyhow::Context;
use docflow_core::pipeline::{self, RunPlan};
use docflow_core::{io, version};
use std::io::Write as _;
use std::path::{Path, PathBuf};

pub struct RunArgs {
    pub idea: String,
    pub version_label: Option<String>,
    pub output_dir: PathBuf,
    pub skip_prd: bool,
    pub skip_spec: bool,
    pub skip_action_plan: bool,
    pub skip_milestones: bool,
    pub skip_gtm: bool,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    io::ensure_dir(&args.output_dir)?;

    let version = args
        .version_label
        .clone()
        .unwrap_or_else(|| version::next_version(&args.output_dir).to_string());

    println!("Starting document pipeline");
    println!("  Output directory: {}", args.output_dir.display());
    println!("  Version: {version}");

    // Raw-text ideas go through a tempfile so child stages see a real path.
    // The guard keeps the file alive until every stage has run.
    let mut tmp_guard = None;
    let idea_file = if Path::new(&args.idea).is_file() {
        PathBuf::from(&args.idea)
    } else {
        let mut tmp = tempfile::Builder::new()
            .prefix("docflow-idea-")
            .suffix(".txt")
            .tempfile()
            .context("failed to create temporary idea file")?;
        tmp.write_all(args.idea.as_bytes())?;
        let path = tmp.path().to_path_buf();
        tmp_guard = Some(tmp);
        path
    };

    let plan = RunPlan {
        idea_file,
        output_dir: args.output_dir.clone(),
        version: version.clone(),
        skip_prd: args.skip_prd,
        skip_spec: args.skip_spec,
        skip_plan: args.skip_action_plan,
        skip_milestones: args.skip_milestones,
        skip_gtm: args.skip_gtm,
    };
    let stages = plan.stages()?;

    for name in ["prd", "spec", "plan", "milestones", "gtm"] {
        if !stages.iter().any(|s| s.name == name) {
            println!("Skipping {name} stage");
        }
    }

    let exe = std::env::current_exe().context("cannot locate the docflow executable")?;
    for stage in &stages {
        println!("\n=== {} ===", stage.name);
        pipeline::run_stage(&exe, stage)?;
    }
    drop(tmp_guard);

    println!("\nPipeline finished (version {version}). Generated files:");
    let rows: Vec<Vec<String>> = stages
        .iter()
        .map(|s| {
            let size = std::fs::metadata(&s.output)
                .map(|m| format!("{} bytes", m.len()))
                .unwrap_or_else(|_| "missing".to_string());
            vec![s.name.to_string(), s.output.display().to_string(), size]
        })
        .collect();
    print_table(&["STAGE", "FILE", "SIZE"], rows);
    Ok(())
}
