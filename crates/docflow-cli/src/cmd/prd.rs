use anyhow::Context;
use docflow_core::config::Config;
use docflow_core::generator::Generator;
use docflow_core::prd::{self, PrdOptions};
use std::path::Path;

pub fn run(
    input: &Path,
    template: &Path,
    output: &Path,
    validation_output: &Path,
) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let gen = Generator::new(&config);

    prd::generate(
        &gen,
        &PrdOptions {
            input: input.to_path_buf(),
            template: template.to_path_buf(),
            output: output.to_path_buf(),
            validation_output: validation_output.to_path_buf(),
        },
    )
    .context("PRD generation failed")?;

    println!("PRD generated: {}", output.display());
    println!(
        "Validation tracking started: {}",
        validation_output.display()
    );
    Ok(())
}
