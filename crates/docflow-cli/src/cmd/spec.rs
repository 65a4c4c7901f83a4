use anyhow::Context;
use docflow_core::config::Config;
use docflow_core::generator::Generator;
use docflow_core::spec::{self, SpecOptions};
use std::path::{Path, PathBuf};

pub fn run(
    prd_file: &Path,
    template: &Path,
    output: &Path,
    validation_file: &Path,
    product_idea: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let gen = Generator::new(&config);

    spec::generate(
        &gen,
        &SpecOptions {
            prd_file: prd_file.to_path_buf(),
            template: template.to_path_buf(),
            output: output.to_path_buf(),
            validation_file: validation_file.to_path_buf(),
            product_idea,
        },
    )
    .context("technical specification generation failed")?;

    println!("Technical specification generated: {}", output.display());
    Ok(())
}
