use crate::core_error::ServeError;
use crate::core_network::frame::{send_message, send_stream};
use log::{error, info};
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::AsyncWrite;

/// What a session sends back for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Raw content of an existing file.
    File(PathBuf),
    /// Listing lines, each sent with a trailing newline.
    Lines(Vec<String>),
    /// Zero payload bytes, just the delimiter.
    Empty,
}

impl Response {
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Response::Lines(lines.into_iter().map(Into::into).collect())
    }
}

pub fn build_listing(lines: &[String]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        payload.extend_from_slice(line.as_bytes());
        payload.push(b'\n');
    }
    payload
}

/// Sends the response framed by the delimiter. File content is forwarded in
/// chunks of `chunk_size` bytes.
pub async fn send_response<W>(
    writer: &mut W,
    response: &Response,
    chunk_size: usize,
) -> Result<(), ServeError>
where
    W: AsyncWrite + Unpin,
{
    match response {
        Response::File(path) => {
            let mut file = match File::open(path).await {
                Ok(file) => file,
                Err(e) => {
                    // Removed or replaced after the membership check.
                    error!("Failed to open {:?} for sending: {}", path, e);
                    return send_message(writer, b"").await;
                }
            };
            let sent = send_stream(writer, &mut file, chunk_size).await?;
            info!("File transfer completed: {:?} ({} bytes)", path, sent);
            Ok(())
        }
        Response::Lines(lines) => send_message(writer, &build_listing(lines)).await,
        Response::Empty => send_message(writer, b"").await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DELIMITER;

    #[test]
    fn test_every_line_gets_a_newline() {
        let lines = vec!["a.txt".to_string(), "b.txt".to_string()];
        assert_eq!(build_listing(&lines), b"a.txt\nb.txt\n");
        assert!(build_listing(&[]).is_empty());
    }

    #[tokio::test]
    async fn test_send_lines() {
        let mut out = Vec::new();
        send_response(&mut out, &Response::lines(["subdir", ".."]), 1000)
            .await
            .unwrap();
        assert_eq!(out, b"subdir\n..\n<J#J1J3>");
    }

    #[tokio::test]
    async fn test_send_empty() {
        let mut out = Vec::new();
        send_response(&mut out, &Response::Empty, 1000).await.unwrap();
        assert_eq!(out, DELIMITER);
    }

    #[tokio::test]
    async fn test_send_file_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        let content: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(&path, &content).unwrap();

        let mut out = Vec::new();
        send_response(&mut out, &Response::File(path), 1000)
            .await
            .unwrap();
        assert_eq!(&out[..content.len()], &content[..]);
        assert_eq!(&out[content.len()..], DELIMITER);
    }

    #[tokio::test]
    async fn test_vanished_file_sends_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        send_response(&mut out, &Response::File(dir.path().join("gone")), 1000)
            .await
            .unwrap();
        assert_eq!(out, DELIMITER);
    }
}
