use anyhow::Context;
use docflow_core::config::Config;
use docflow_core::generator::Generator;
use docflow_core::milestones::{self, MilestonesOptions};
use std::path::{Path, PathBuf};

pub fn run(
    spec_file: &Path,
    action_plan_file: Option<PathBuf>,
    output: &Path,
) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let gen = Generator::new(&config);

    println!("Generating comprehensive milestone specifications...");
    milestones::generate(
        &gen,
        &MilestonesOptions {
            spec_file: spec_file.to_path_buf(),
            action_plan: action_plan_file,
            output: output.to_path_buf(),
        },
    )
    .context("milestone specification generation failed")?;

    println!("Milestone specifications generated: {}", output.display());
    Ok(())
}
