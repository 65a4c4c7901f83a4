use anyhow::Context;
use docflow_core::{io, validation};
use std::path::Path;

/// Pure extraction — no model call, no credential needed.
pub fn run(spec_file: &Path, output: &Path) -> anyhow::Result<()> {
    let spec = io::read_input(spec_file)?;
    let findings = validation::extract_from_spec(&spec);
    io::atomic_write(output, validation::render_tracking(&findings).as_bytes())
        .context("failed to write validation tracking file")?;

    println!("Validation tracking file created: {}", output.display());
    Ok(())
}
