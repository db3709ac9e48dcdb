use crate::constants::{PARENT_ENTRY, SELF_ENTRY};
use crate::core_error::ServeError;
use log::{debug, info};
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Files,
    Directories,
}

/// Both entry sequences of one enumeration, in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    pub files: Vec<String>,
    pub directories: Vec<String>,
}

impl DirectoryListing {
    pub fn into_entries(self, kind: EntryKind) -> Vec<String> {
        match kind {
            EntryKind::Files => self.files,
            EntryKind::Directories => self.directories,
        }
    }
}

/// The server-wide working directory, shared by every session.
///
/// Reads and writes of the path are serialized through the lock. Enumeration
/// works on a snapshot of the path, so a `cd` from another session may land
/// between a listing and the action that follows it.
#[derive(Debug)]
pub struct WorkingDirectory {
    path: Mutex<String>,
}

impl WorkingDirectory {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Mutex::new(path.into()),
        }
    }

    pub fn from_process_cwd() -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd.to_string_lossy().into_owned()))
    }

    pub async fn current(&self) -> String {
        self.path.lock().await.clone()
    }

    /// Path of `name` inside the current working directory.
    pub async fn resolve(&self, name: &str) -> PathBuf {
        let path = self.path.lock().await;
        PathBuf::from(format!("{}/{}", *path, name))
    }

    pub async fn list_entries(&self, kind: EntryKind) -> Result<Vec<String>, ServeError> {
        Ok(self.list_all().await?.into_entries(kind))
    }

    /// Enumerates the current directory once. Regular files go to `files`;
    /// everything else, symlinks and devices included, goes to `directories`
    /// together with the self and parent entries.
    pub async fn list_all(&self) -> Result<DirectoryListing, ServeError> {
        let path = PathBuf::from(self.current().await);
        let unavailable = |source: std::io::Error| ServeError::DirectoryUnavailable {
            path: path.clone(),
            source,
        };

        let mut reader = fs::read_dir(&path).await.map_err(unavailable)?;
        let mut listing = DirectoryListing {
            files: Vec::new(),
            directories: vec![SELF_ENTRY.to_string(), PARENT_ENTRY.to_string()],
        };

        while let Some(entry) = reader.next_entry().await.map_err(unavailable)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_regular = entry
                .file_type()
                .await
                .map(|file_type| file_type.is_file())
                .unwrap_or(false);
            if is_regular {
                listing.files.push(name);
            } else {
                listing.directories.push(name);
            }
        }

        debug!(
            "Listed {:?}: {} files, {} directories",
            path,
            listing.files.len(),
            listing.directories.len()
        );
        Ok(listing)
    }

    /// Moves to the parent on `..`, otherwise descends into `name`. The
    /// target is not checked; there is no floor above the starting directory.
    pub async fn change_directory(&self, name: &str) -> String {
        let mut path = self.path.lock().await;
        if name == PARENT_ENTRY {
            if let Some(idx) = path.rfind(['/', '\\']) {
                path.truncate(idx);
            }
        } else {
            path.push('/');
            path.push_str(name);
        }
        info!("Working directory changed to: {}", *path);
        path.clone()
    }
}
