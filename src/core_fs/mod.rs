pub mod directory;

pub use directory::{DirectoryListing, EntryKind, WorkingDirectory};
