use anyhow::Context;
use docflow_core::config::Config;
use docflow_core::generator::Generator;
use docflow_core::plan::{self, PlanOptions};
use std::path::{Path, PathBuf};

pub fn run(
    spec_file: &Path,
    prd_file: Option<PathBuf>,
    template: &Path,
    output: &Path,
    product_name: &str,
) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let gen = Generator::new(&config);

    println!("Generating Action Plan...");
    plan::generate(
        &gen,
        &PlanOptions {
            spec_file: spec_file.to_path_buf(),
            prd_file,
            template: template.to_path_buf(),
            output: output.to_path_buf(),
            product_name: product_name.to_string(),
        },
    )
    .context("action plan generation failed")?;

    println!("Action Plan generated: {}", output.display());
    Ok(())
}
