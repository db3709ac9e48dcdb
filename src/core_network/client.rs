use crate::constants::{CMD_CHANGE_DIR, CMD_GET, CMD_LIST_DIRS, CMD_LIST_FILES};
use crate::core_network::frame::{receive_until_close, send_message};
use anyhow::{bail, Context, Result};
use log::info;
use tokio::net::TcpStream;

const CLIENT_RECV_BUFFER_SIZE: usize = 1000;

/// Builds the request bytes (without delimiter) for a client command.
pub fn build_request(command: &str, name: Option<&str>) -> Result<Vec<u8>> {
    match (command, name) {
        (CMD_LIST_FILES | CMD_LIST_DIRS, None) => Ok(command.as_bytes().to_vec()),
        (CMD_GET | CMD_CHANGE_DIR, Some(name)) if !name.is_empty() => {
            Ok(format!("{}{}", command, name).into_bytes())
        }
        (CMD_GET | CMD_CHANGE_DIR, _) => bail!("Command {} requires a name", command),
        (CMD_LIST_FILES | CMD_LIST_DIRS, Some(_)) => {
            bail!("Command {} does not take a name", command)
        }
        _ => bail!("Invalid command: {}", command),
    }
}

/// Sends one framed request and returns the response payload. A server that
/// closes without sending the delimiter yields whatever arrived before.
pub async fn request(host: &str, port: u16, message: &[u8]) -> Result<Vec<u8>> {
    let mut stream = TcpStream::connect((host, port))
        .await
        .with_context(|| format!("Failed to connect to {}:{}", host, port))?;
    info!("Connected to server on {}:{}", host, port);

    send_message(&mut stream, message)
        .await
        .context("Failed to send request")?;
    let payload = receive_until_close(&mut stream, CLIENT_RECV_BUFFER_SIZE)
        .await
        .context("Failed to receive response")?;
    Ok(payload)
}
