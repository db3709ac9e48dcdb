pub mod client_cli;
pub mod core_cli;

pub use client_cli::ClientCli;
pub use core_cli::Cli;
