use clap::Parser;
use std::path::PathBuf;

use aerial_manifest::{print_run_summary, ManifestBuilder, RunConfig};

/// Build train/val/test tile manifests and print the run recap.
#[derive(Parser, Debug)]
#[command(name = "build_manifest", about = "Build aerial tile dataset manifests")]
struct Args {
    /// Run configuration YAML.
    #[arg(long, default_value = "flair-config.yml")]
    config: PathBuf,
    /// Dataset root containing train/ and test/ domain folders.
    #[arg(long)]
    data_root: PathBuf,
    /// JSON metadata lookup keyed by image stem.
    #[arg(long, default_value = "flair-metadata.json")]
    metadata: PathBuf,
    /// Share of train/ domains assigned to the train split (rest go to validation).
    #[arg(long, default_value_t = 0.8)]
    val_percent: f64,
    /// Optional shuffle seed for a reproducible domain split.
    #[arg(long)]
    seed: Option<u64>,
    /// Mark this process as a non-primary worker (suppresses the recap).
    #[arg(long, default_value_t = false)]
    secondary: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = RunConfig::load(&args.config)?;

    let builder = ManifestBuilder {
        data_root: args.data_root,
        metadata_path: args.metadata,
        val_percent: args.val_percent,
        use_metadata: config.get("use_metadata")?,
        seed: args.seed,
    };
    let manifests = builder.build()?;

    for warning in manifests
        .train
        .warnings
        .iter()
        .chain(&manifests.val.warnings)
    {
        println!("warning: {warning}");
    }

    print_run_summary(&config, &manifests, !args.secondary)?;
    Ok(())
}
