use crate::core_command::response::Response;
use crate::core_error::ServeError;
use crate::core_fs::{EntryKind, WorkingDirectory};
use log::{info, warn};

/// Handles `-g<filename>`.
///
/// The name must appear in a fresh file listing of the working directory.
/// Unknown names get an empty response rather than an error listing.
pub async fn handle_get_command(
    workdir: &WorkingDirectory,
    arg: &str,
) -> Result<Response, ServeError> {
    let files = workdir.list_entries(EntryKind::Files).await?;

    if !files.iter().any(|name| name == arg) {
        warn!("Requested file not found in working directory: {:?}", arg);
        return Ok(Response::Empty);
    }

    let path = workdir.resolve(arg).await;
    info!("Sending file: {:?}", path);
    Ok(Response::File(path))
}
