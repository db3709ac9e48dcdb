use anyhow::Result;
use clap::Parser;
use ftserved::config::Config;
use ftserved::core_cli::Cli;
use ftserved::core_log::logger::init_logger;
use ftserved::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    init_logger(args.verbose);

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    // The positional port always wins over the file.
    config.server.listen_port = args.port;

    server::run(config).await?;

    Ok(())
}
