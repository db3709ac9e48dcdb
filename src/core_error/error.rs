use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),

    #[error("Peer closed the connection before the message was complete")]
    PeerClosed,

    #[error("Short write: {written} of {expected} bytes delivered")]
    ShortWrite { expected: usize, written: usize },

    #[error("Cannot open directory {path:?}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Admission rejected: {0} sessions already active")]
    AdmissionRejected(usize),
}

impl ServeError {
    /// True for failures that end the session without a response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ServeError::Transport(_) | ServeError::PeerClosed | ServeError::ShortWrite { .. }
        )
    }
}
