pub mod error;

pub use error::ServeError;
