use anyhow::Context;
use docflow_core::config::Config;
use docflow_core::generator::Generator;
use docflow_core::gtm::{self, GtmOptions};
use std::path::Path;

pub fn run(prd_file: &Path, spec_file: &Path, output: &Path) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let gen = Generator::new(&config);

    println!("Generating Go-To-Market Plan...");
    gtm::generate(
        &gen,
        &GtmOptions {
            prd_file: prd_file.to_path_buf(),
            spec_file: spec_file.to_path_buf(),
            output: output.to_path_buf(),
        },
    )
    .context("go-to-market plan generation failed")?;

    println!("Go-To-Market plan generated: {}", output.display());
    Ok(())
}
