use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cf_canonizer::config::{
    DEFAULT_IMPORT_COMMAND, DEFAULT_OUTPUT_DEFINITION, DEFAULT_OUTPUT_IMPORT, DEFAULT_RESOURCE_KIND,
};
use cf_canonizer::CanonizerConfig;

/// Rename generated DNS-record resources deterministically and rewrite the import script to match.
#[derive(Parser, Debug)]
#[command(name = "cf-canonizer", version)]
struct Args {
    /// Generated resource definition file
    definition: PathBuf,

    /// Generated import script
    import: PathBuf,

    #[arg(long, default_value = DEFAULT_RESOURCE_KIND)]
    resource_kind: String,

    #[arg(long, default_value = DEFAULT_IMPORT_COMMAND)]
    import_command: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_DEFINITION)]
    out_definition: PathBuf,

    #[arg(long, default_value = DEFAULT_OUTPUT_IMPORT)]
    out_import: PathBuf,

    /// Also write a TOON mapping report (renames, dropped blocks, unresolved imports)
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    // exits with a usage error before any file is touched
    let args = Args::parse();

    let config = CanonizerConfig {
        resource_kind: args.resource_kind,
        import_command: args.import_command,
        output_definition: args.out_definition,
        output_import: args.out_import,
        report: args.report,
    };

    let written = cf_canonizer::run(&args.definition, &args.import, &config)
        .with_context(|| format!("canonizing {} and {}", args.definition.display(), args.import.display()))?;

    println!("Wrote canonized Terraform to {}", written.definition.display());
    println!("Wrote canonized import script to {}", written.import.display());
    if let Some(report) = written.report {
        println!("Wrote mapping report to {}", report.display());
    }
    Ok(())
}
