// Request commands understood by the server, one module per command.
pub mod cd;
pub mod command;
pub mod get;
pub mod handlers;
pub mod list;
pub mod response;

pub use command::Command;
pub use handlers::dispatch;
pub use response::Response;
