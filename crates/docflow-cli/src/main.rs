mod cmd;
mod output;

use clap::{Parser, Subcommand};
use docflow_core::paths;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docflow",
    about = "Generate product documents (PRD, tech spec, action plan, milestones, GTM) from a seed idea",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Product Requirements Document from a product idea file
    Prd {
        /// Product idea text file
        input: PathBuf,

        /// PRD instruction template (CSV)
        #[arg(long, default_value = paths::PRD_TEMPLATE)]
        template: PathBuf,

        /// Output markdown file
        #[arg(long, default_value = paths::PRD_OUTPUT)]
        output: PathBuf,

        /// Validation tracking file ((re)initialized by this stage)
        #[arg(long, default_value = paths::VALIDATION_OUTPUT)]
        validation_output: PathBuf,
    },

    /// Generate a Technical Specification from a PRD
    Spec {
        /// PRD markdown file
        prd_file: PathBuf,

        /// Spec instruction template (CSV)
        #[arg(long, default_value = paths::SPEC_TEMPLATE)]
        template: PathBuf,

        /// Output markdown file
        #[arg(long, default_value = paths::SPEC_OUTPUT)]
        output: PathBuf,

        /// Validation tracking file to extend
        #[arg(long, default_value = paths::VALIDATION_OUTPUT)]
        validation_file: PathBuf,

        /// Original product idea file for additional context
        #[arg(long)]
        product_idea: Option<PathBuf>,
    },

    /// Generate an Action Plan from a Technical Specification
    Plan {
        /// Technical specification markdown file
        spec_file: PathBuf,

        /// PRD file for additional context
        #[arg(long)]
        prd_file: Option<PathBuf>,

        /// Action plan template (markdown with {{SPEC_MD}}/{{PRD_MD}} tokens)
        #[arg(long, default_value = paths::PLAN_TEMPLATE)]
        template: PathBuf,

        /// Output markdown file
        #[arg(long, default_value = paths::PLAN_OUTPUT)]
        output: PathBuf,

        /// Product name substituted into the template
        #[arg(long, default_value = "Product")]
        product_name: String,
    },

    /// Generate milestone specifications from a spec and action plan
    Milestones {
        /// Technical specification markdown file
        spec_file: PathBuf,

        /// Action plan with milestone marker blocks
        #[arg(long)]
        action_plan_file: Option<PathBuf>,

        /// Output markdown file
        #[arg(short, long, default_value = paths::MILESTONES_OUTPUT)]
        output: PathBuf,
    },

    /// Generate a Go-To-Market plan from a PRD and Technical Specification
    Gtm {
        /// PRD markdown file
        prd_file: PathBuf,

        /// Technical specification markdown file
        spec_file: PathBuf,

        /// Output markdown file
        #[arg(short, long, default_value = paths::GTM_OUTPUT)]
        output: PathBuf,
    },

    /// Extract validation findings from a spec into a tracking file
    Extract {
        /// Technical specification markdown file
        spec_file: PathBuf,

        /// Validation tracking file to write
        #[arg(long, default_value = paths::VALIDATION_OUTPUT)]
        output: PathBuf,
    },

    /// Apply post-generation architecture corrections from validation findings
    Correct {
        /// PRD markdown file
        prd_file: PathBuf,

        /// Technical specification markdown file
        spec_file: PathBuf,

        /// Validation tracking file with findings
        #[arg(long, default_value = paths::VALIDATION_OUTPUT)]
        validation_file: PathBuf,
    },

    /// Run the full pipeline, assigning version-numbered filenames
    Run {
        /// Product idea: a file path, or raw text
        idea: String,

        /// Version suffix for output files (default: computed from existing files)
        #[arg(long)]
        version_label: Option<String>,

        /// Output directory
        #[arg(long, default_value = paths::OUTPUT_DIR, env = "DOCFLOW_OUTPUT_DIR")]
        output_dir: PathBuf,

        /// Skip PRD generation
        #[arg(long)]
        skip_prd: bool,

        /// Skip Technical Specification generation
        #[arg(long)]
        skip_spec: bool,

        /// Skip Action Plan generation
        #[arg(long)]
        skip_action_plan: bool,

        /// Skip Milestone Specifications generation
        #[arg(long)]
        skip_milestones: bool,

        /// Skip Go-To-Market Plan generation
        #[arg(long)]
        skip_gtm: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Prd {
            input,
            template,
            output,
            validation_output,
        } => cmd::prd::run(&input, &template, &output, &validation_output),
        Commands::Spec {
            prd_file,
            template,
            output,
            validation_file,
            product_idea,
        } => cmd::spec::run(&prd_file, &template, &output, &validation_file, product_idea),
        Commands::Plan {
            spec_file,
            prd_file,
            template,
            output,
            product_name,
        } => cmd::plan::run(&spec_file, prd_file, &template, &output, &product_name),
        Commands::Milestones {
            spec_file,
            action_plan_file,
            output,
        } => cmd::milestones::run(&spec_file, action_plan_file, &output),
        Commands::Gtm {
            prd_file,
            spec_file,
            output,
        } => cmd::gtm::run(&prd_file, &spec_file, &output),
        Commands::Extract { spec_file, output } => cmd::extract::run(&spec_file, &output),
        Commands::Correct {
            prd_file,
            spec_file,
            validation_file,
        } => cmd::correct::run(&prd_file, &spec_file, &validation_file),
        Commands::Run {
            idea,
            version_label,
            output_dir,
            skip_prd,
            skip_spec,
            skip_action_plan,
            skip_milestones,
            skip_gtm,
        } => cmd::run::run(cmd::run::RunArgs {
            idea,
            version_label,
            output_dir,
            skip_prd,
            skip_spec,
            skip_action_plan,
            skip_milestones,
            skip_gtm,
        }),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
