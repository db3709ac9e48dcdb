use crate::config::Config;
use crate::core_error::ServeError;
use crate::core_fs::WorkingDirectory;
use crate::core_network::session::{Session, SessionSettings};
use anyhow::{Context, Result};
use log::{error, info, warn};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;

/// Binds the listener and serves connections until the process exits.
/// A bind failure is fatal.
pub async fn start_server(config: Arc<Config>, workdir: Arc<WorkingDirectory>) -> Result<()> {
    let bind_address = config.server.bind_address.as_str();
    let listen_port = config.server.listen_port;

    let listener = TcpListener::bind((bind_address, listen_port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", bind_address, listen_port))?;
    let local_addr = listener.local_addr()?;
    info!("Server open on port {}", local_addr.port());

    serve(listener, config, workdir).await
}

/// Accept loop. Connections beyond `max_sessions` are dropped unserved; the
/// others each get a detached session task holding one admission permit.
pub async fn serve(
    listener: TcpListener,
    config: Arc<Config>,
    workdir: Arc<WorkingDirectory>,
) -> Result<()> {
    let max_sessions = config.server.max_sessions;
    let admission = Arc::new(Semaphore::new(max_sessions));
    let settings = SessionSettings::from(&config.server);

    loop {
        let (socket, addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Failed to accept connection: {}", e);
                continue;
            }
        };
        info!("New connection from {}", addr.ip());

        let permit = match Arc::clone(&admission).try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                warn!(
                    "Dropping connection from {}: {}",
                    addr,
                    ServeError::AdmissionRejected(max_sessions)
                );
                drop(socket);
                continue;
            }
        };

        let workdir = Arc::clone(&workdir);
        tokio::spawn(async move {
            // Errors are already logged by the session.
            let _ = Session::new(socket, addr, settings, workdir).run().await;
            drop(permit);
        });
    }
}
