use crate::constants::DELIMITER;
use crate::core_error::ServeError;
use log::trace;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Which bytes are searched for the delimiter after each read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanWindow {
    /// Only the chunk returned by the latest read. A delimiter split across
    /// two reads is never seen.
    LastChunk,
    /// The whole accumulated message.
    Accumulator,
}

impl ScanWindow {
    pub fn from_strict(strict_framing: bool) -> Self {
        if strict_framing {
            ScanWindow::Accumulator
        } else {
            ScanWindow::LastChunk
        }
    }
}

pub fn find_delimiter(haystack: &[u8]) -> Option<usize> {
    if haystack.len() < DELIMITER.len() {
        return None;
    }
    haystack
        .windows(DELIMITER.len())
        .position(|window| window == DELIMITER)
}

/// Reads one delimiter-terminated message and returns it without the
/// delimiter. Bytes after the delimiter in the final chunk are dropped.
pub async fn receive_message<R>(
    reader: &mut R,
    buffer_size: usize,
    window: ScanWindow,
) -> Result<Vec<u8>, ServeError>
where
    R: AsyncRead + Unpin,
{
    let mut accumulator = Vec::new();
    let mut chunk = vec![0u8; buffer_size.max(1)];

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            return Err(ServeError::PeerClosed);
        }
        let received = &chunk[..n];
        trace!("Received chunk of {} bytes", n);

        match window {
            ScanWindow::LastChunk => {
                if let Some(pos) = find_delimiter(received) {
                    accumulator.extend_from_slice(&received[..pos]);
                    return Ok(accumulator);
                }
                accumulator.extend_from_slice(received);
            }
            ScanWindow::Accumulator => {
                // Resume where a straddling delimiter could begin.
                let start = accumulator.len().saturating_sub(DELIMITER.len() - 1);
                accumulator.extend_from_slice(received);
                if let Some(pos) = find_delimiter(&accumulator[start..]) {
                    accumulator.truncate(start + pos);
                    return Ok(accumulator);
                }
            }
        }
    }
}

/// Client side read: like `receive_message` with the accumulator window, but
/// end of stream also ends the message and the bytes so far are returned.
pub async fn receive_until_close<R>(
    reader: &mut R,
    buffer_size: usize,
) -> Result<Vec<u8>, ServeError>
where
    R: AsyncRead + Unpin,
{
    let mut accumulator = Vec::new();
    let mut chunk = vec![0u8; buffer_size.max(1)];

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            trace!("Stream closed after {} bytes", accumulator.len());
            return Ok(accumulator);
        }
        let start = accumulator.len().saturating_sub(DELIMITER.len() - 1);
        accumulator.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_delimiter(&accumulator[start..]) {
            accumulator.truncate(start + pos);
            return Ok(accumulator);
        }
    }
}

async fn write_checked<W>(writer: &mut W, bytes: &[u8]) -> Result<(), ServeError>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    while written < bytes.len() {
        match writer.write(&bytes[written..]).await? {
            0 => {
                return Err(ServeError::ShortWrite {
                    expected: bytes.len(),
                    written,
                })
            }
            n => written += n,
        }
    }
    Ok(())
}

/// Writes the payload, then the delimiter as a separate trailing write.
pub async fn send_message<W>(writer: &mut W, payload: &[u8]) -> Result<(), ServeError>
where
    W: AsyncWrite + Unpin,
{
    write_checked(writer, payload).await?;
    write_checked(writer, DELIMITER).await?;
    writer.flush().await?;
    Ok(())
}

/// Forwards `source` to `writer` in chunks of at most `chunk_size` bytes,
/// then writes the delimiter. Returns the payload length.
pub async fn send_stream<W, R>(
    writer: &mut W,
    source: &mut R,
    chunk_size: usize,
) -> Result<u64, ServeError>
where
    W: AsyncWrite + Unpin,
    R: AsyncRead + Unpin,
{
    let mut buffer = vec![0u8; chunk_size.max(1)];
    let mut total = 0u64;

    loop {
        let n = source.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        write_checked(writer, &buffer[..n]).await?;
        total += n as u64;
    }

    write_checked(writer, DELIMITER).await?;
    writer.flush().await?;
    Ok(total)
}
