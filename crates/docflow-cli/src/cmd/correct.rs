use anyhow::Context;
use docflow_core::config::Config;
use docflow_core::corrector::{self, CorrectorOptions};
use docflow_core::generator::Generator;
use std::path::Path;

pub fn run(prd_file: &Path, spec_file: &Path, validation_file: &Path) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let gen = Generator::new(&config).with_temperature(corrector::CORRECTION_TEMPERATURE);

    println!("Applying post-generation corrections...");
    let outcome = corrector::apply(
        &gen,
        &CorrectorOptions {
            prd_file: prd_file.to_path_buf(),
            spec_file: spec_file.to_path_buf(),
            validation_file: validation_file.to_path_buf(),
        },
    )
    .context("correction pass failed")?;

    if outcome.corrections.is_empty() {
        println!("No correction patterns detected; corrected documents written for review.");
    } else {
        println!("Corrections applied:");
        for c in &outcome.corrections {
            println!("  - {c}");
        }
    }
    println!("Corrected PRD:  {}", outcome.corrected_prd.display());
    println!("Corrected spec: {}", outcome.corrected_spec.display());
    Ok(())
}
