//! Operator-facing run recap.

use std::fmt;

use crate::config::RunConfig;
use crate::manifest::DatasetManifests;
use crate::types::ManifestResult;

fn print_field(label: &str, value: impl fmt::Display) {
    println!("- {label:<25}:    {value}");
}

/// Print the run recap: model name, tasking flags, per-split sample counts,
/// and hyperparameters. Writes to stdout only.
///
/// In a multi-process run exactly one worker should pass `is_primary =
/// true`; every other process returns without printing.
pub fn print_run_summary(
    config: &RunConfig,
    manifests: &DatasetManifests,
    is_primary: bool,
) -> ManifestResult<()> {
    if !is_primary {
        return Ok(());
    }

    let rule = "=".repeat(80);
    let dash = "-".repeat(80);

    println!("\n+{rule}+");
    println!("Model name: {}", config.get::<String>("out_model_name")?);
    println!("+{rule}+");
    println!("[---TASKING---]");
    print_field("use weights", config.get::<bool>("use_weights")?);
    print_field("use metadata", config.get::<bool>("use_metadata")?);
    print_field("use augmentation", config.get::<bool>("use_augmentation")?);

    println!("\n+{dash}+");
    println!("[---DATA SPLIT---]");
    for (name, manifest) in [
        ("train", &manifests.train),
        ("val", &manifests.val),
        ("test", &manifests.test),
    ] {
        print_field(name, format_args!("{} samples", manifest.len()));
    }

    println!("\n+{dash}+");
    println!("[---HYPER-PARAMETERS---]");
    print_field("batch size", config.get::<u64>("batch_size")?);
    print_field("learning rate", config.get::<f64>("learning_rate")?);
    print_field("epochs", config.get::<u64>("num_epochs")?);
    print_field("nodes", config.get::<u64>("num_nodes")?);
    print_field("GPU per nodes", config.get::<u64>("gpus_per_node")?);
    print_field("accelerator", config.get::<String>("accelerator")?);
    print_field("workers", config.get::<u64>("num_workers")?);

    println!("\n+{dash}+\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ManifestError;

    fn full_config() -> RunConfig {
        RunConfig::from_value(
            serde_yaml::from_str(
                "\
out_model_name: flair-base
use_weights: true
use_metadata: true
use_augmentation: false
batch_size: 8
learning_rate: 0.0001
num_epochs: 50
num_nodes: 1
gpus_per_node: 2
accelerator: gpu
num_workers: 4
",
            )
            .unwrap(),
        )
    }

    #[test]
    fn primary_worker_prints_full_recap() {
        let manifests = DatasetManifests::default();
        print_run_summary(&full_config(), &manifests, true).unwrap();
    }

    #[test]
    fn secondary_worker_skips_config_access() {
        // An empty config would fail on access; the gate must come first.
        let empty = RunConfig::from_value(serde_yaml::Value::Null);
        let manifests = DatasetManifests::default();
        print_run_summary(&empty, &manifests, false).unwrap();
    }

    #[test]
    fn missing_key_propagates_on_primary() {
        let partial = RunConfig::from_value(
            serde_yaml::from_str("out_model_name: flair-base\n").unwrap(),
        );
        let manifests = DatasetManifests::default();
        let err = print_run_summary(&partial, &manifests, true).unwrap_err();
        assert!(matches!(err, ManifestError::MissingConfigKey { .. }));
    }
}
