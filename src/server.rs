use crate::config::{log_config, Config};
use crate::core_fs::WorkingDirectory;
use crate::core_network::network;
use anyhow::{Context, Result};
use log::{error, info};
use std::sync::Arc;

/// Runs the file server with the provided configuration.
///
/// The shared working directory starts at `root_dir` when configured, and at
/// the process working directory otherwise.
///
/// # Returns
///
/// Result<(), anyhow::Error>; only returns on a startup failure.
pub async fn run(config: Config) -> Result<()> {
    info!("Starting server with config:");
    log_config(&config);

    let workdir = Arc::new(initialize_workdir(&config)?);
    info!("Serving from: {}", workdir.current().await);

    match network::start_server(Arc::new(config), workdir).await {
        Ok(_) => info!("Server stopped."),
        Err(e) => {
            error!("Failed to start server: {:#}", e);
            return Err(e);
        }
    }

    Ok(())
}

pub fn initialize_workdir(config: &Config) -> Result<WorkingDirectory> {
    match &config.server.root_dir {
        Some(dir) => Ok(WorkingDirectory::new(dir.to_string_lossy().into_owned())),
        None => WorkingDirectory::from_process_cwd()
            .context("Failed to determine the process working directory"),
    }
}
