use crate::config::ServerConfig;
use crate::core_command::dispatch;
use crate::core_command::response::send_response;
use crate::core_error::ServeError;
use crate::core_fs::WorkingDirectory;
use crate::core_network::frame::{receive_message, ScanWindow};
use log::{debug, error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Accepted,
    Receiving,
    Dispatching,
    Responding,
    Closed,
}

/// Per-session knobs taken from the server configuration.
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub recv_buffer_size: usize,
    pub send_buffer_size: usize,
    pub window: ScanWindow,
}

impl From<&ServerConfig> for SessionSettings {
    fn from(config: &ServerConfig) -> Self {
        Self {
            recv_buffer_size: config.recv_buffer_size,
            send_buffer_size: config.send_buffer_size,
            window: ScanWindow::from_strict(config.strict_framing),
        }
    }
}

/// One accepted connection, serving exactly one request/response exchange.
pub struct Session<S> {
    stream: S,
    peer: SocketAddr,
    state: SessionState,
    settings: SessionSettings,
    workdir: Arc<WorkingDirectory>,
}

impl<S> Session<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(
        stream: S,
        peer: SocketAddr,
        settings: SessionSettings,
        workdir: Arc<WorkingDirectory>,
    ) -> Self {
        Self {
            stream,
            peer,
            state: SessionState::Accepted,
            settings,
            workdir,
        }
    }

    fn transition(&mut self, next: SessionState) {
        debug!("Session {}: {:?} -> {:?}", self.peer, self.state, next);
        self.state = next;
    }

    /// Runs the exchange to completion. Transport failures are logged and
    /// returned after the connection is closed.
    pub async fn run(mut self) -> Result<(), ServeError> {
        let result = self.exchange().await;
        match &result {
            Err(e) if e.is_transport() => error!("Session {} aborted: {}", self.peer, e),
            Err(e) => warn!("Session {} ended early: {}", self.peer, e),
            Ok(()) => {}
        }

        self.transition(SessionState::Closed);
        if let Err(e) = self.stream.shutdown().await {
            debug!("Session {}: shutdown failed: {}", self.peer, e);
        }
        info!("Connection closed for {}", self.peer);
        result
    }

    // TODO: bound the Receiving and Responding states with a timeout so a
    // silent client cannot hold its admission slot forever.
    async fn exchange(&mut self) -> Result<(), ServeError> {
        self.transition(SessionState::Receiving);
        let request = receive_message(
            &mut self.stream,
            self.settings.recv_buffer_size,
            self.settings.window,
        )
        .await?;
        info!(
            "Received request from {}: {}",
            self.peer,
            String::from_utf8_lossy(&request)
        );

        self.transition(SessionState::Dispatching);
        let response = dispatch(&self.workdir, &request).await;

        self.transition(SessionState::Responding);
        send_response(&mut self.stream, &response, self.settings.send_buffer_size).await
    }
}
