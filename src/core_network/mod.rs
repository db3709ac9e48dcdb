pub mod client;
pub mod frame;
pub mod network;
pub mod session;
