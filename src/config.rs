use crate::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_MAX_SESSIONS, DEFAULT_RECV_BUFFER_SIZE,
    DEFAULT_SEND_BUFFER_SIZE, DELIMITER,
};
use anyhow::{bail, Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::Semaphore;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_port: u16,
    pub bind_address: String,
    pub max_sessions: usize,
    pub recv_buffer_size: usize,
    pub send_buffer_size: usize,
    /// Scan the whole receive accumulator for the delimiter instead of only
    /// the latest chunk.
    pub strict_framing: bool,
    /// Starting working directory. The process working directory when unset.
    pub root_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_port: 0,
            bind_address: String::from(DEFAULT_BIND_ADDRESS),
            max_sessions: DEFAULT_MAX_SESSIONS,
            recv_buffer_size: DEFAULT_RECV_BUFFER_SIZE,
            send_buffer_size: DEFAULT_SEND_BUFFER_SIZE,
            strict_framing: false,
            root_dir: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse configuration file: {}", path))
    }

    pub fn from_toml(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;

        // Zero-sized buffers would make every read look like a closed peer.
        if config.server.recv_buffer_size == 0 {
            config.server.recv_buffer_size = DEFAULT_RECV_BUFFER_SIZE;
        }
        if config.server.send_buffer_size == 0 {
            config.server.send_buffer_size = DEFAULT_SEND_BUFFER_SIZE;
        }

        // The single-chunk window can only match a delimiter that fits in one read.
        if !config.server.strict_framing && config.server.recv_buffer_size < DELIMITER.len() {
            warn!(
                "recv_buffer_size {} is smaller than the delimiter, raising it to {}",
                config.server.recv_buffer_size,
                DELIMITER.len()
            );
            config.server.recv_buffer_size = DELIMITER.len();
        }

        if config.server.max_sessions > Semaphore::MAX_PERMITS {
            bail!(
                "max_sessions {} exceeds the limit of {}",
                config.server.max_sessions,
                Semaphore::MAX_PERMITS
            );
        }

        Ok(config)
    }
}

// Helper function to log configuration options
pub fn log_config(config: &Config) {
    info!("  Listen Port: {}", config.server.listen_port);
    info!("  Bind Address: {}", config.server.bind_address);
    info!("  Max Sessions: {}", config.server.max_sessions);
    info!("  Receive Buffer Size: {} bytes", config.server.recv_buffer_size);
    info!("  Send Buffer Size: {} bytes", config.server.send_buffer_size);
    info!("  Strict Framing: {}", config.server.strict_framing);
    match &config.server.root_dir {
        Some(dir) => info!("  Root Directory: {}", dir.display()),
        None => info!("  Root Directory: <process working directory>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.server.max_sessions, 5);
        assert_eq!(config.server.recv_buffer_size, 100);
        assert_eq!(config.server.send_buffer_size, 1000);
        assert!(!config.server.strict_framing);
        assert!(config.server.root_dir.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
            [server]
            max_sessions = 2
            strict_framing = true
            root_dir = "/srv/files"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.max_sessions, 2);
        assert!(config.server.strict_framing);
        assert_eq!(config.server.root_dir, Some(PathBuf::from("/srv/files")));
        assert_eq!(config.server.recv_buffer_size, 100);
    }

    #[test]
    fn test_zero_buffers_fall_back() {
        let config = Config::from_toml(
            r#"
            [server]
            recv_buffer_size = 0
            send_buffer_size = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.server.recv_buffer_size, 100);
        assert_eq!(config.server.send_buffer_size, 1000);
    }

    #[test]
    fn test_small_recv_buffer_is_raised_for_chunk_window() {
        let config = Config::from_toml("[server]\nrecv_buffer_size = 4\n").unwrap();
        assert_eq!(config.server.recv_buffer_size, DELIMITER.len());
    }

    #[test]
    fn test_small_recv_buffer_kept_for_strict_framing() {
        let config = Config::from_toml(
            r#"
            [server]
            recv_buffer_size = 4
            strict_framing = true
            "#,
        )
        .unwrap();
        assert_eq!(config.server.recv_buffer_size, 4);
    }

    #[tokio::test]
    async fn test_raised_recv_buffer_reads_requests() {
        use crate::core_network::frame::{receive_message, ScanWindow};
        use tokio::io::AsyncWriteExt;

        let config = Config::from_toml("[server]\nrecv_buffer_size = 1\n").unwrap();
        let (mut client, mut server) = tokio::io::duplex(64);
        client.write_all(b"<J#J1J3>").await.unwrap();

        let message = receive_message(
            &mut server,
            config.server.recv_buffer_size,
            ScanWindow::from_strict(config.server.strict_framing),
        )
        .await
        .unwrap();
        assert!(message.is_empty());
    }

    #[test]
    fn test_max_sessions_above_semaphore_limit() {
        let config_str = format!("[server]\nmax_sessions = {}\n", Semaphore::MAX_PERMITS + 1);
        assert!(Config::from_toml(&config_str).is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml("[server\nmax_sessions = ").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(Config::load_from_file("/nonexistent/ftserved.conf").is_err());
    }
}
