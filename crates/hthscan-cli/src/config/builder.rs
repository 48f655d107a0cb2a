use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use hthscan::engine::config::ScanConfigBuilder;
use tracing::debug;

pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let file_config = apply_set_values(file_config, &cli.set_values)?;

    let dispatch_file = file_config.dispatch.unwrap_or_default();
    let output_file = file_config.output.unwrap_or_default();

    let threads = cli.threads.or(dispatch_file.threads).or(defaults.threads);
    let show_progress = !cli.quiet
        && !cli.no_progress
        && output_file.progress.unwrap_or(defaults.show_progress);

    let scan_config = ScanConfigBuilder::new()
        .threads(threads)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!(?threads, show_progress, "Resolved configuration.");

    Ok(AppConfig {
        input_path: cli.input.clone(),
        output_path: cli.output.clone(),
        show_progress,
        scan_config,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;

        match key.trim() {
            "dispatch.threads" => {
                config.dispatch.get_or_insert_with(Default::default).threads =
                    Some(value_str.trim().parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
            }
            "output.progress" => {
                config.output.get_or_insert_with(Default::default).progress =
                    Some(value_str.trim().parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid boolean value for {}: {}",
                            key, value_str
                        ))
                    })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unknown configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
