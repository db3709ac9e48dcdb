use anyhow::{Context, Result};
use clap::Parser;
use ftserved::constants::CMD_GET;
use ftserved::core_cli::ClientCli;
use ftserved::core_log::logger::init_logger;
use ftserved::core_network::client::{build_request, request};
use log::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ClientCli::parse();
    init_logger(false);

    let message = build_request(&args.command, args.name.as_deref())?;
    let payload = request(&args.host, args.port, &message).await?;

    match (args.command.as_str(), args.name.as_deref()) {
        (CMD_GET, Some(name)) if !payload.is_empty() => {
            tokio::fs::write(name, &payload)
                .await
                .with_context(|| format!("Failed to write {}", name))?;
            info!("File transfer complete: {} ({} bytes)", name, payload.len());
        }
        // The server answers an unknown name with an empty payload, so an
        // empty file on the server is reported the same way and not written.
        (CMD_GET, Some(name)) => {
            error!("File not found or empty on server: {}", name);
        }
        _ => print!("{}", String::from_utf8_lossy(&payload)),
    }

    Ok(())
}
