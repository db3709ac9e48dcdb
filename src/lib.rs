pub mod config;
pub mod constants;
pub mod core_cli;
pub mod core_command;
pub mod core_error;
pub mod core_fs;
pub mod core_log;
pub mod core_network;
pub mod server;
